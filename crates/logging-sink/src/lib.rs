//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output backends for the oc-log facility. A
//! process configures exactly one [`Sink`], and every rendered log line is
//! routed through it synchronously on the caller's thread. The four backends
//! are the standard output stream, the platform debugger channel, the
//! privileged syslog channel, and an append-only file.
//!
//! # Design
//!
//! [`Sink`] is a closed enum rather than a trait object: the set of backends
//! is fixed at configuration time and never extended at runtime, so dispatch
//! stays a plain `match` with no allocation. The only backend carrying state
//! is [`FileSink`], which owns a lazily opened handle behind a process-wide
//! mutex and recovers from write failures by discarding the handle and
//! reopening on the next call.
//!
//! # Invariants
//!
//! - Every [`Sink::write`] call is self-contained; no buffering state is
//!   retained across calls outside the file sink's handle.
//! - Sinks never surface errors to the caller. A failed write degrades output
//!   and nothing else.
//! - The file sink's check-open-write-flush sequence runs under one lock, so
//!   concurrent callers get whole-line atomicity.
//!
//! # Errors
//!
//! None. Backend I/O failures are swallowed by design; the file sink folds
//! them into its state machine and the other backends ignore them.

mod sink;
pub mod syslog;

pub use sink::debugger::{DebuggerSink, STACK_CAPACITY};
pub use sink::file::{FileSink, SESSION_BANNER};
pub use sink::{ConsoleSink, Sink, SinkKind};
pub use syslog::{DEFAULT_SYSLOG_TAG, SyslogFacility, SyslogPriority, SyslogSettings};

#[cfg(unix)]
pub use syslog::SyslogChannel;
