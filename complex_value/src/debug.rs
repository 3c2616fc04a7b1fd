//! Diagnostic logging.
//!
//! Set `COMPLEX_VALUE_DEBUG=1` to trace token scanning and rejected checked
//! operations on stderr. Only available in debug builds.

/// Check if debug logging is enabled via the `COMPLEX_VALUE_DEBUG` env var.
#[cfg(debug_assertions)]
pub(crate) fn debug_enabled() -> bool {
    use std::sync::OnceLock;
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var("COMPLEX_VALUE_DEBUG").is_ok())
}

#[cfg(not(debug_assertions))]
#[inline]
pub(crate) fn debug_enabled() -> bool {
    false
}

/// Write a diagnostic line to stderr without relying on `eprintln!`.
pub(crate) fn debug_log(args: std::fmt::Arguments<'_>) {
    if debug_enabled() {
        use std::io::Write;
        let _ = writeln!(std::io::stderr(), "[complex_value] {args}");
    }
}
