#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `oc-log` is an embeddable, single-sink, synchronous logging facility for
//! applications and daemons that do not want a full logging framework. Each
//! record carries a timestamp, a one-character severity tag, the call site,
//! and the message, and is routed to exactly one configured sink: console,
//! debugger channel, syslog, or an append-only file.
//!
//! Severities are compiled in per cargo feature, so a disabled severity's
//! call sites vanish from the binary; an optional runtime mask
//! (`dynamic-filter`) narrows further at run time. The raw-dump entry points
//! render unterminated byte ranges one formatted line per byte.
//!
//! This crate is a facade: the implementation lives in the `logging`
//! (filtering, formatting, macros) and `logging-sink` (output backends)
//! workspace members.
//!
//! # Examples
//!
//! ```
//! use oc_log::{LogConfig, Logger, log_info, log_warning_if};
//!
//! # fn main() -> Result<(), oc_log::ConfigError> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("app.log");
//! let config = LogConfig::new().with_file_path(&path);
//! # #[cfg(feature = "dynamic-filter")]
//! # let config = config.with_dynamic_mask(oc_log::SeverityMask::ALL);
//! let logger = Logger::new(config)?;
//!
//! log_info!(logger, "listening on port {}", 8730);
//! log_warning_if!(logger, 8730 < 1024, "privileged port");
//! # Ok(())
//! # }
//! ```
//!
//! A process that wants a singleton installs it once:
//!
//! ```
//! use oc_log::{LogConfig, Logger, log_notice};
//!
//! # fn main() -> Result<(), oc_log::ConfigError> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("app.log");
//! # let config = LogConfig::new().with_file_path(&path);
//! # #[cfg(feature = "dynamic-filter")]
//! # let config = config.with_dynamic_mask(oc_log::SeverityMask::ALL);
//! let _ = oc_log::install(Logger::new(config)?);
//! if let Some(logger) = oc_log::global() {
//!     log_notice!(logger, "logger installed");
//! }
//! # Ok(())
//! # }
//! ```

pub use logging::{
    ByteFormat, ConfigError, DEFAULT_FILE_NAME, DEFAULT_SYSLOG_TAG, LogConfig, Logger,
    SESSION_BANNER, STACK_CAPACITY, Severity, SeverityMask, SinkKind, SyslogFacility,
    SyslogPriority, SyslogSettings, global, install,
};

#[cfg(feature = "tracing")]
pub use logging::OcLogLayer;

pub use logging::{
    log_assert, log_base, log_base_dump, log_base_dump_if, log_base_if, log_debug, log_debug_dump,
    log_debug_dump_if, log_debug_if, log_error, log_error_dump, log_error_dump_if, log_error_if,
    log_fatal, log_fatal_dump, log_fatal_dump_if, log_fatal_if, log_info, log_info_dump,
    log_info_dump_if, log_info_if, log_notice, log_notice_dump, log_notice_dump_if, log_notice_if,
    log_text, log_text_dump, log_text_dump_if, log_text_if, log_trace, log_trace_dump,
    log_trace_dump_if, log_trace_if, log_verify, log_warning, log_warning_dump,
    log_warning_dump_if, log_warning_if,
};
