//! Conditional tracing support
//!
//! Emit a `tracing` event when the `tracing` feature is enabled. When it is
//! disabled the statement is compiled out.

macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}
