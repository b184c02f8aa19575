//! A growable array of non-owned handles.
//!
//! [`DynArray`] owns its backing buffer and nothing else. Elements are
//! [`Handle`]s: `Copy` values that identify data owned elsewhere, so
//! dropping or shrinking the array never runs element destructors.
//!
//! When an append finds the buffer full, the array moves to a buffer with
//! twice as many slots. Over `n` appends the copying work is bounded by
//! `2n` element moves, so appends are amortized O(1).
use core::{fmt, ops::Index, slice};

use crate::{ArrayOptions, Handle, NotFound, raw_buf::RawBuf};

/// A growable array of [`Handle`]s.
///
/// # Examples
///
/// ```rust
/// use oxyrt::DynArray;
///
/// let (a, b, c) = ('A', 'B', 'C');
/// let mut arr = DynArray::new();
/// arr.append(&a);
/// arr.append(&b);
/// arr.append(&c);
/// assert_eq!(arr.len(), 3);
///
/// assert_eq!(arr.remove(&b), Ok(1));
/// assert_eq!(arr.get(0), Some(&a));
/// assert_eq!(arr.get(1), Some(&c));
/// assert_eq!(arr.len(), 2);
/// ```
pub struct DynArray<H: Handle> {
    buf: RawBuf<H>,
    len: usize,
    report_missing_removals: bool,
}

impl<H: Handle> DynArray<H> {
    /// Creates an empty array with [`ArrayOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ArrayOptions::default())
    }

    /// Creates an empty array configured by `options`.
    #[must_use]
    pub fn with_options(options: ArrayOptions) -> Self {
        Self {
            buf: RawBuf::with_capacity(options.initial_capacity),
            len: 0,
            report_missing_removals: options.report_missing_removals,
        }
    }

    /// Creates an empty array with room for `capacity` handles and default
    /// options otherwise.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(ArrayOptions {
            initial_capacity: capacity,
            ..ArrayOptions::default()
        })
    }

    /// Number of stored handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no handles are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer. Never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Stores `handle` after the last element, doubling the buffer first if
    /// it is full.
    #[inline]
    pub fn append(&mut self, handle: H) {
        if self.len == self.buf.capacity() {
            self.grow();
        }
        self.buf.write(self.len, handle);
        self.len += 1;
    }

    fn grow(&mut self) {
        let new_cap = match self.len.checked_mul(2) {
            Some(0) => 1,
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        // SAFETY: the first `len` slots are written and `len < new_cap`.
        unsafe { self.buf.reallocate(new_cap, self.len) };
    }

    /// Removes the first occurrence of `handle`, shifting later handles one
    /// slot towards the front, and returns the index it was stored at.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] and leaves the array untouched if no stored
    /// handle is [`same`](Handle::same) as `handle`. The miss is also
    /// reported on stderr when
    /// [`ArrayOptions::report_missing_removals`] is set.
    pub fn remove(&mut self, handle: H) -> Result<usize, NotFound> {
        let Some(index) = self.position(handle) else {
            if self.report_missing_removals {
                report!("DynArray.remove", "element not found in array");
            }
            return Err(NotFound);
        };

        // SAFETY: the first `len` slots are written.
        let live = unsafe { self.buf.slice_mut(self.len) };
        live.copy_within(index + 1.., index);
        self.len -= 1;
        Ok(index)
    }

    /// The handle at `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<H> {
        self.as_slice().get(index).copied()
    }

    /// The handle at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](DynArray::len).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> H {
        // SAFETY: guaranteed by the caller.
        unsafe { *self.as_slice().get_unchecked(index) }
    }

    /// Index of the first stored handle that is [`same`](Handle::same) as
    /// `handle`.
    #[must_use]
    pub fn position(&self, handle: H) -> Option<usize> {
        self.iter().position(|stored| stored.same(handle))
    }

    /// Returns `true` if a stored handle is [`same`](Handle::same) as
    /// `handle`.
    #[must_use]
    pub fn contains(&self, handle: H) -> bool {
        self.position(handle).is_some()
    }

    /// Forgets every stored handle. The buffer is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The stored handles, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[H] {
        // SAFETY: the first `len` slots are written.
        unsafe { self.buf.slice(self.len) }
    }

    /// Iterates over the stored handles, in insertion order.
    pub fn iter(&self) -> core::iter::Copied<slice::Iter<'_, H>> {
        self.as_slice().iter().copied()
    }

    /// Panics if the length exceeds the capacity.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self) {
        assert!(
            self.len <= self.buf.capacity(),
            "length {} exceeds capacity {}",
            self.len,
            self.buf.capacity()
        );
    }
}

impl<H: Handle> Default for DynArray<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle> Clone for DynArray<H> {
    fn clone(&self) -> Self {
        Self {
            buf: RawBuf::copy_from(self.as_slice(), self.capacity()),
            len: self.len,
            report_missing_removals: self.report_missing_removals,
        }
    }
}

impl<H: Handle + fmt::Debug> fmt::Debug for DynArray<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Arrays are equal when they hold the [`same`](Handle::same) handles in the
/// same order, the identity [`DynArray::remove`] and
/// [`DynArray::position`] use. Referents are never compared.
impl<H: Handle> PartialEq for DynArray<H> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other).all(|(a, b)| a.same(b))
    }
}

impl<H: Handle> Eq for DynArray<H> {}

impl<H: Handle> Index<usize> for DynArray<H> {
    type Output = H;

    fn index(&self, index: usize) -> &H {
        let len = self.len;
        self.as_slice()
            .get(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for length {len}"))
    }
}

impl<H: Handle> Extend<H> for DynArray<H> {
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        for handle in iter {
            self.append(handle);
        }
    }
}

impl<H: Handle> FromIterator<H> for DynArray<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, H: Handle> IntoIterator for &'a DynArray<H> {
    type Item = H;
    type IntoIter = core::iter::Copied<slice::Iter<'a, H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
