mod property_roundtrip;

/// Number of quickcheck cases per property.
pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 100_000 } else { 10_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 100;
    tests
}
