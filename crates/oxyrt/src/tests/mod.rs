
mod property_array;
mod property_string;

/// Number of quickcheck cases to run, scaled down for Miri and fast runs.
pub(crate) fn test_count() -> u64 {
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    tests
}
