#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the front end of the oc-log facility: the severity
//! vocabulary and its bitmask, the two-stage filter gate, the record
//! formatter, the raw-dump renderer, and the severity-tagged entry-point
//! macros. Rendered lines are handed to the single configured backend in
//! [`logging_sink`].
//!
//! # Design
//!
//! Filtering is two-stage. The *static* mask is the set of `log-*` cargo
//! features compiled into the binary: a disabled severity's macros expand to
//! `()`, so its call sites do not exist and cost nothing. The *dynamic* mask
//! (feature `dynamic-filter`) is a process-wide runtime bitset consulted by
//! [`Logger::admit`]; it can only narrow what the static mask admitted. The
//! `Text` severity additionally gates the raw write substrate that every
//! record line passes through.
//!
//! The context is an explicit [`Logger`] value rather than an implicit
//! global, so isolated contexts are trivial to construct in tests; a process
//! that wants a singleton installs one via [`install`].
//!
//! # Invariants
//!
//! - A record is emitted only if both filter stages admit its severity.
//! - Lines are rendered exactly once per admitted record, with one trailing
//!   newline, in call order per thread.
//! - After construction, no operation returns an error or panics; failures
//!   degrade output silently. The two deliberate exceptions are
//!   [`log_verify!`] (aborts on a false condition) and [`log_assert!`]
//!   (panics, debug builds only).
//!
//! # Errors
//!
//! [`ConfigError`] from [`Logger::new`] is the only error surface: an
//! unsupported sink for the platform, or a missing initial mask when
//! `dynamic-filter` is enabled.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, Logger, log_info, log_warning_if};
//!
//! # fn main() -> Result<(), logging::ConfigError> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("app.log");
//! let config = LogConfig::new().with_file_path(&path);
//! # #[cfg(feature = "dynamic-filter")]
//! # let config = config.with_dynamic_mask(logging::SeverityMask::ALL);
//! let logger = Logger::new(config)?;
//!
//! log_info!(logger, "engine started with {} workers", 4);
//! log_warning_if!(logger, 4 > 3, "worker count above limit");
//! # Ok(())
//! # }
//! ```

mod clock;
mod config;
mod context;
mod dump;
mod macros;
mod record;
mod severity;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConfigError, DEFAULT_FILE_NAME, LogConfig};
pub use context::{Logger, global, install};
pub use dump::ByteFormat;
pub use severity::{Severity, SeverityMask};

#[cfg(feature = "tracing")]
pub use tracing_bridge::OcLogLayer;

// Backend types callers need for configuration.
pub use logging_sink::{
    DEFAULT_SYSLOG_TAG, SESSION_BANNER, STACK_CAPACITY, SinkKind, SyslogFacility, SyslogPriority,
    SyslogSettings,
};
