/// Debug logging; a no-op unless the `tracing` feature is enabled.
#[cfg(not(feature = "tracing"))]
macro_rules! scan_debug {
    ($($arg:tt)*) => {};
}

/// Debug logging routed to `tracing`.
#[cfg(feature = "tracing")]
macro_rules! scan_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
