
mod property_purify;
mod quirks;

/// Iteration count for the quickcheck properties.
fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
