//! crates/logging/src/macros.rs
//!
//! Severity-tagged entry points, four forms each: plain, conditional
//! (`*_if`), raw-dump (`*_dump`), and conditional raw-dump (`*_dump_if`).
//! All take the logger context as their first argument and capture the call
//! site's `file!()`/`line!()` automatically; the message is always a format
//! literal plus an argument list, never a single opaque string.
//!
//! Each severity is controlled by its cargo feature (`log-trace`,
//! `log-debug`, …). When a feature is disabled the macros expand to `()`
//! without evaluating any argument, so the severity costs nothing and is
//! absent from the call graph. There is no runtime fallback for the static
//! mask.

// ============================================================================
// Generic record entry points (feature log-base)
// ============================================================================
// The severity-specific macros below expand through these, so disabling
// log-base silences every record form at once.

/// Emits a record at an explicit severity.
#[cfg(feature = "log-base")]
#[macro_export]
macro_rules! log_base {
    ($ctx:expr, $severity:expr, $($arg:tt)+) => {
        $ctx.log($severity, file!(), line!(), format_args!($($arg)+))
    };
}
#[cfg(not(feature = "log-base"))]
#[macro_export]
macro_rules! log_base {
    ($($arg:tt)*) => {
        ()
    };
}

/// Emits a record at an explicit severity when `$condition` holds.
#[cfg(feature = "log-base")]
#[macro_export]
macro_rules! log_base_if {
    ($ctx:expr, $condition:expr, $severity:expr, $($arg:tt)+) => {
        if $condition {
            $crate::log_base!($ctx, $severity, $($arg)+);
        }
    };
}
#[cfg(not(feature = "log-base"))]
#[macro_export]
macro_rules! log_base_if {
    ($($arg:tt)*) => {
        ()
    };
}

/// Emits a delimited per-byte dump at an explicit severity.
#[cfg(feature = "log-base")]
#[macro_export]
macro_rules! log_base_dump {
    ($ctx:expr, $severity:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => {
        $ctx.dump($severity, file!(), line!(), $format, $bytes, $count, format_args!($($arg)+))
    };
}
#[cfg(not(feature = "log-base"))]
#[macro_export]
macro_rules! log_base_dump {
    ($($arg:tt)*) => {
        ()
    };
}

/// Emits a delimited per-byte dump at an explicit severity when `$condition`
/// holds.
#[cfg(feature = "log-base")]
#[macro_export]
macro_rules! log_base_dump_if {
    ($ctx:expr, $condition:expr, $severity:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => {
        if $condition {
            $crate::log_base_dump!($ctx, $severity, $format, $bytes, $count, $($arg)+);
        }
    };
}
#[cfg(not(feature = "log-base"))]
#[macro_export]
macro_rules! log_base_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ============================================================================
// Text substrate entry points (feature log-text)
// ============================================================================

/// Writes raw text through the sink: no record formatting, no added newline.
#[cfg(feature = "log-text")]
#[macro_export]
macro_rules! log_text {
    ($ctx:expr, $($arg:tt)+) => {
        $ctx.write_text(format_args!($($arg)+))
    };
}
#[cfg(not(feature = "log-text"))]
#[macro_export]
macro_rules! log_text {
    ($($arg:tt)*) => {
        ()
    };
}

/// Writes raw text when `$condition` holds.
#[cfg(feature = "log-text")]
#[macro_export]
macro_rules! log_text_if {
    ($ctx:expr, $condition:expr, $($arg:tt)+) => {
        if $condition {
            $crate::log_text!($ctx, $($arg)+);
        }
    };
}
#[cfg(not(feature = "log-text"))]
#[macro_export]
macro_rules! log_text_if {
    ($($arg:tt)*) => {
        ()
    };
}

/// Bare per-byte dump: one line per byte, then a blank line. No banners.
#[cfg(feature = "log-text")]
#[macro_export]
macro_rules! log_text_dump {
    ($ctx:expr, $format:expr, $bytes:expr, $count:expr) => {
        $ctx.dump_text($format, $bytes, $count, file!(), line!())
    };
}
#[cfg(not(feature = "log-text"))]
#[macro_export]
macro_rules! log_text_dump {
    ($($arg:tt)*) => {
        ()
    };
}

/// Bare per-byte dump when `$condition` holds.
#[cfg(feature = "log-text")]
#[macro_export]
macro_rules! log_text_dump_if {
    ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr) => {
        if $condition {
            $crate::log_text_dump!($ctx, $format, $bytes, $count);
        }
    };
}
#[cfg(not(feature = "log-text"))]
#[macro_export]
macro_rules! log_text_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ============================================================================
// Severity-specific entry points
// ============================================================================

// ---------------------- TRACE ----------------------
/// `T` record.
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Trace, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Trace, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Trace, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Trace, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
/// `D` record.
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Debug, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Debug, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Debug, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Debug, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
/// `I` record.
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Info, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Info, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- NOTICE ----------------------
/// `N` record.
#[cfg(feature = "log-notice")]
#[macro_export]
macro_rules! log_notice { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Notice, $($arg)+) } }
#[cfg(feature = "log-notice")]
#[macro_export]
macro_rules! log_notice_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Notice, $($arg)+) } }
#[cfg(feature = "log-notice")]
#[macro_export]
macro_rules! log_notice_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Notice, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-notice")]
#[macro_export]
macro_rules! log_notice_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Notice, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-notice"))]
#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-notice"))]
#[macro_export]
macro_rules! log_notice_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-notice"))]
#[macro_export]
macro_rules! log_notice_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-notice"))]
#[macro_export]
macro_rules! log_notice_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
/// `W` record.
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! log_warning { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Warning, $($arg)+) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! log_warning_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Warning, $($arg)+) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! log_warning_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Warning, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! log_warning_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Warning, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! log_warning_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! log_warning_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! log_warning_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
/// `E` record.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Error, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Error, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
/// `F` record. Emission only; terminating the host is the caller's call.
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! log_fatal { ($ctx:expr, $($arg:tt)+) => { $crate::log_base!($ctx, $crate::Severity::Fatal, $($arg)+) } }
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! log_fatal_if { ($ctx:expr, $condition:expr, $($arg:tt)+) => { $crate::log_base_if!($ctx, $condition, $crate::Severity::Fatal, $($arg)+) } }
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! log_fatal_dump { ($ctx:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump!($ctx, $crate::Severity::Fatal, $format, $bytes, $count, $($arg)+) } }
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! log_fatal_dump_if { ($ctx:expr, $condition:expr, $format:expr, $bytes:expr, $count:expr, $($arg:tt)+) => { $crate::log_base_dump_if!($ctx, $condition, $crate::Severity::Fatal, $format, $bytes, $count, $($arg)+) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! log_fatal_if {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! log_fatal_dump {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! log_fatal_dump_if {
    ($($arg:tt)*) => {
        ()
    };
}

// ============================================================================
// Always-fatal checks
// ============================================================================

/// Release-build invariant check: on a false condition, logs a `V` record
/// with the stringified condition and aborts the process. The runtime mask
/// can suppress the record, never the abort.
#[cfg(feature = "log-verify")]
#[macro_export]
macro_rules! log_verify {
    ($ctx:expr, $condition:expr) => {
        if !$condition {
            $ctx.log(
                $crate::Severity::Verify,
                file!(),
                line!(),
                format_args!("{}", stringify!($condition)),
            );
            ::std::process::abort();
        }
    };
}
#[cfg(not(feature = "log-verify"))]
#[macro_export]
macro_rules! log_verify {
    ($($arg:tt)*) => {
        ()
    };
}

/// Debug-build invariant check: on a false condition, logs an `A` record
/// then panics. Compiled out entirely outside debug builds.
#[cfg(all(feature = "log-assert", debug_assertions))]
#[macro_export]
macro_rules! log_assert {
    ($ctx:expr, $condition:expr) => {
        if !$condition {
            $ctx.log(
                $crate::Severity::Assert,
                file!(),
                line!(),
                format_args!("{}", stringify!($condition)),
            );
            ::std::panic!("assertion failed: {}", stringify!($condition));
        }
    };
}
#[cfg(not(all(feature = "log-assert", debug_assertions)))]
#[macro_export]
macro_rules! log_assert {
    ($($arg:tt)*) => {
        ()
    };
}
