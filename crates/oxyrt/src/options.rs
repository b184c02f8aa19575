/// Number of handle slots a [`DynArray`](crate::DynArray) reserves up front
/// when built with default options.
pub const DEFAULT_INITIAL_CAPACITY: usize = 100;

/// Configuration options for [`DynArray`](crate::DynArray).
///
/// # Examples
///
/// ```rust
/// use oxyrt::{ArrayOptions, DynArray};
///
/// let arr: DynArray<u32> = DynArray::with_options(ArrayOptions {
///     initial_capacity: 4,
///     ..Default::default()
/// });
/// assert_eq!(arr.capacity(), 4);
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Number of slots allocated when the array is created.
    ///
    /// Zero is allowed; the first append then allocates a single slot and
    /// doubling proceeds from there.
    ///
    /// # Default
    ///
    /// [`DEFAULT_INITIAL_CAPACITY`] (100)
    pub initial_capacity: usize,

    /// Whether [`DynArray::remove`](crate::DynArray::remove) reports a
    /// diagnostic line on stderr when the handle is not present.
    ///
    /// The miss is always returned as an error; this only controls the
    /// report. Has no effect without the `std` feature.
    ///
    /// # Default
    ///
    /// `true`
    pub report_missing_removals: bool,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            report_missing_removals: true,
        }
    }
}
