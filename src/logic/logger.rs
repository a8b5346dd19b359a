//! Logging helpers shared by the grammar and rule modules.
//!
//! The engine never owns a logger (no filesystem access, per the parser's
//! scope) — it only emits `log` records through whatever subscriber the
//! embedding application installs. This module just keeps log statements
//! from panicking or flooding output when the input contains long or
//! multi-byte text.

/// Safe string preview for logging - truncates by character count, not bytes.
///
/// Byte-slicing a string for a debug preview can panic on a non-char
/// boundary; this truncates by `char` instead.
#[inline]
pub fn safe_preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Safe debug logging with automatic string truncation.
///
/// Use instead of `log::debug!()` when logging string slices that might
/// contain multi-byte UTF-8 characters.
#[macro_export]
macro_rules! safe_debug {
    ($fmt:expr, $text:expr, $max:expr) => {
        log::debug!($fmt, $crate::logic::logger::safe_preview($text, $max))
    };
    ($fmt:expr, $text:expr, $max:expr, $($arg:tt)*) => {
        log::debug!($fmt, $crate::logic::logger::safe_preview($text, $max), $($arg)*)
    };
}
