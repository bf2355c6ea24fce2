//! crates/logging-sink/src/sink/mod.rs
//! Sink selection and dispatch.

pub(crate) mod console;
pub(crate) mod debugger;
pub(crate) mod file;

use std::fmt;
use std::path::PathBuf;

use crate::syslog::SyslogPriority;
#[cfg(unix)]
use crate::syslog::{SyslogChannel, SyslogSettings};

pub use console::ConsoleSink;
use debugger::DebuggerSink;
use file::FileSink;

/// The output destination a process routes all log lines to.
///
/// Chosen once at configuration time; there is no per-call sink selection and
/// no fan-out. The default resolution (console unless a file path is
/// configured) happens in the front-end configuration layer, not here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkKind {
    /// Standard output stream; flushing inherited from the stream.
    Console,
    /// Debugger output channel (`OutputDebugString` on Windows, stderr
    /// elsewhere).
    DebuggerChannel,
    /// Privileged syslog(3) channel. Unix only.
    KernelChannel,
    /// Append-only file with lazy open and self-healing reopen.
    AppendFile,
}

impl SinkKind {
    /// Returns the configuration-file spelling of the sink kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::DebuggerChannel => "debugger",
            Self::KernelChannel => "kernel",
            Self::AppendFile => "file",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single configured output backend.
///
/// Constructed once from the resolved configuration and shared for the
/// process lifetime. All variants write synchronously on the caller's
/// thread; only [`FileSink`] carries state across calls.
#[derive(Debug)]
pub enum Sink {
    /// Lines go to stdout.
    Console(ConsoleSink),
    /// Lines go to the platform debugger channel.
    Debugger(DebuggerSink),
    /// Lines go to syslog(3) with a severity-derived priority.
    #[cfg(unix)]
    Kernel(SyslogChannel),
    /// Lines are appended to the configured file.
    File(FileSink),
}

impl Sink {
    /// Creates the console backend.
    #[must_use]
    pub fn console() -> Self {
        Self::Console(ConsoleSink)
    }

    /// Creates the debugger-channel backend.
    #[must_use]
    pub fn debugger() -> Self {
        Self::Debugger(DebuggerSink)
    }

    /// Opens the syslog connection and creates the kernel-channel backend.
    #[cfg(unix)]
    #[must_use]
    pub fn kernel(settings: &SyslogSettings) -> Self {
        Self::Kernel(SyslogChannel::open(settings))
    }

    /// Creates the append-file backend. The file itself is opened lazily on
    /// the first write.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>, require_existing: bool) -> Self {
        Self::File(FileSink::new(path, require_existing))
    }

    /// Returns which [`SinkKind`] this sink was built for.
    #[must_use]
    pub const fn kind(&self) -> SinkKind {
        match self {
            Self::Console(_) => SinkKind::Console,
            Self::Debugger(_) => SinkKind::DebuggerChannel,
            #[cfg(unix)]
            Self::Kernel(_) => SinkKind::KernelChannel,
            Self::File(_) => SinkKind::AppendFile,
        }
    }

    /// Writes one rendered line to the backend.
    ///
    /// `priority` grades the message for the syslog backend; the other
    /// backends ignore it. Failures are absorbed: the caller can never
    /// observe an error from a log write.
    pub fn write(&self, priority: SyslogPriority, line: &str) {
        #[cfg(not(unix))]
        let _ = priority;
        match self {
            Self::Console(sink) => sink.write(line),
            Self::Debugger(sink) => sink.write(line),
            #[cfg(unix)]
            Self::Kernel(channel) => channel.write(priority, line),
            Self::File(sink) => sink.write(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_reports_backing_variant() {
        assert_eq!(Sink::console().kind(), SinkKind::Console);
        assert_eq!(Sink::debugger().kind(), SinkKind::DebuggerChannel);
        assert_eq!(Sink::file("x.log", false).kind(), SinkKind::AppendFile);
    }

    #[test]
    fn sink_kind_display_matches_as_str() {
        for kind in [
            SinkKind::Console,
            SinkKind::DebuggerChannel,
            SinkKind::KernelChannel,
            SinkKind::AppendFile,
        ] {
            assert_eq!(format!("{kind}"), kind.as_str());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sink_kind_serde_round_trip() {
        let json = serde_json::to_string(&SinkKind::AppendFile).expect("serialize");
        let decoded: SinkKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, SinkKind::AppendFile);
    }
}
