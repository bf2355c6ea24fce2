//! crates/logging/src/context.rs
//!
//! The logger context: one configured sink, the runtime gate, and every
//! write path. A `Logger` is an explicit value rather than hidden global
//! state so tests construct isolated contexts; processes that want a
//! singleton install one with [`install`].

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use logging_sink::{Sink, SinkKind, SyslogPriority};

#[cfg(feature = "dynamic-filter")]
use std::sync::atomic::{AtomicU32, Ordering};

use crate::clock;
use crate::config::{ConfigError, LogConfig};
use crate::dump::{self, ByteFormat};
use crate::record;
use crate::severity::Severity;

#[cfg(feature = "dynamic-filter")]
use crate::severity::SeverityMask;

/// The logging context a process configures once.
///
/// Owns the single sink and the runtime severity mask. All operations take
/// `&self` and are synchronous: a log call runs on the caller's thread and
/// returns when the sink write does. Within one thread, lines appear in call
/// order; across threads the file sink serializes whole lines under its own
/// lock.
///
/// No method here returns an error. Anything that goes wrong after
/// construction degrades output silently; a logging facility must not be
/// able to destabilize its host.
#[derive(Debug)]
pub struct Logger {
    sink: Sink,
    kind: SinkKind,
    started: Instant,
    #[cfg(feature = "dynamic-filter")]
    dynamic_mask: AtomicU32,
}

impl Logger {
    /// Validates the configuration and builds the sink.
    ///
    /// This is the one fallible moment in the facility's lifetime: an
    /// unsupported sink for the platform, or (with `dynamic-filter`) a
    /// missing initial mask, refuses to construct the context.
    pub fn new(config: LogConfig) -> Result<Self, ConfigError> {
        #[cfg(feature = "dynamic-filter")]
        let initial = config
            .dynamic_mask
            .ok_or(ConfigError::MissingDynamicMask)?;

        let kind = config.resolved_sink();
        let sink = match kind {
            SinkKind::Console => Sink::console(),
            SinkKind::DebuggerChannel => Sink::debugger(),
            SinkKind::KernelChannel => kernel_sink(&config)?,
            SinkKind::AppendFile => {
                Sink::file(config.resolved_file_path(), config.require_existing_file)
            }
        };

        Ok(Self {
            sink,
            kind,
            started: Instant::now(),
            #[cfg(feature = "dynamic-filter")]
            dynamic_mask: AtomicU32::new(initial.bits()),
        })
    }

    /// Which sink this context writes to.
    #[must_use]
    pub const fn sink_kind(&self) -> SinkKind {
        self.kind
    }

    /// Runtime admission for a severity.
    ///
    /// The compile-time mask never reaches this check; it acts at macro
    /// expansion, where disabled severities vanish from the call graph.
    #[cfg(feature = "dynamic-filter")]
    #[must_use]
    pub fn admit(&self, severity: Severity) -> bool {
        self.dynamic_mask().contains(severity)
    }

    /// Runtime admission for a severity. Without `dynamic-filter` the gate
    /// is a constant: everything the static mask compiled in is admitted.
    #[cfg(not(feature = "dynamic-filter"))]
    #[must_use]
    pub fn admit(&self, _severity: Severity) -> bool {
        true
    }

    /// Snapshot of the runtime mask. Relaxed: the mask is a filter, racy
    /// reads are tolerated.
    #[cfg(feature = "dynamic-filter")]
    #[must_use]
    pub fn dynamic_mask(&self) -> SeverityMask {
        SeverityMask::from_bits(self.dynamic_mask.load(Ordering::Relaxed))
    }

    /// Replaces the runtime mask for subsequent calls.
    #[cfg(feature = "dynamic-filter")]
    pub fn set_dynamic_mask(&self, mask: SeverityMask) {
        self.dynamic_mask.store(mask.bits(), Ordering::Relaxed);
    }

    /// Formats and emits one record, subject to the gate.
    ///
    /// The entry-point macros route here with the call site's `file!()` and
    /// `line!()`; calling it directly is supported for wrappers that capture
    /// source location themselves.
    pub fn log(&self, severity: Severity, file: &str, line: u32, message: fmt::Arguments<'_>) {
        if !self.admit(severity) {
            return;
        }
        let rendered = record::render_line(&self.timestamp(), severity, file, line, message);
        self.write_line(severity, &rendered);
    }

    /// Raw text write: no record formatting, no added newline.
    ///
    /// This is the substrate every record line also passes through, with its
    /// own `Text` gate.
    pub fn write_text(&self, message: fmt::Arguments<'_>) {
        #[cfg(feature = "log-text")]
        if self.text_admitted() {
            self.sink
                .write(priority_for(Severity::Text), &message.to_string());
        }
        #[cfg(not(feature = "log-text"))]
        let _ = message;
    }

    /// Text-level raw dump: one line per byte, then a bare newline.
    ///
    /// Invalid arguments produce a single diagnostic record naming the
    /// buffer length and requested count; nothing is ever read out of
    /// range. The gate is consulted once, before the loop.
    pub fn dump_text(&self, format: ByteFormat, bytes: &[u8], count: isize, file: &str, line: u32) {
        #[cfg(feature = "log-text")]
        {
            if !self.text_admitted() {
                return;
            }
            match dump::resolve_range(bytes, count) {
                Ok(range) => self.dump_bytes(Severity::Text, format, range),
                Err(err) => {
                    let rendered = record::render_line(
                        &self.timestamp(),
                        Severity::Text,
                        file,
                        line,
                        format_args!("cannot dump buffer {{len({}), count({})}}", err.len, err.count),
                    );
                    self.sink.write(priority_for(Severity::Text), &rendered);
                }
            }
        }
        #[cfg(not(feature = "log-text"))]
        let _ = (format, bytes, count, file, line);
    }

    /// Record-level raw dump: a `[START]` record carrying the caller's
    /// message, the per-byte block, then an `[E.N.D]` record, so the dump
    /// reads as one delimited unit in the stream.
    #[allow(clippy::too_many_arguments)]
    pub fn dump(
        &self,
        severity: Severity,
        file: &str,
        line: u32,
        format: ByteFormat,
        bytes: &[u8],
        count: isize,
        message: fmt::Arguments<'_>,
    ) {
        if !self.admit(severity) {
            return;
        }
        match dump::resolve_range(bytes, count) {
            Ok(range) => {
                self.log(
                    severity,
                    file,
                    line,
                    format_args!("[START]({count}) {message}"),
                );
                #[cfg(feature = "log-text")]
                if self.text_admitted() {
                    self.dump_bytes(severity, format, range);
                }
                #[cfg(not(feature = "log-text"))]
                let _ = (format, range);
                self.log(severity, file, line, format_args!("[E.N.D]"));
            }
            Err(err) => {
                self.log(
                    severity,
                    file,
                    line,
                    format_args!("cannot dump buffer {{len({}), count({})}}", err.len, err.count),
                );
            }
        }
    }

    #[cfg(feature = "log-text")]
    fn dump_bytes(&self, severity: Severity, format: ByteFormat, range: &[u8]) {
        let priority = priority_for(severity);
        for &byte in range {
            let mut rendered = format.render(byte);
            rendered.push('\n');
            self.sink.write(priority, &rendered);
        }
        self.sink.write(priority, "\n");
    }

    /// The substrate write under the record path: statically gated by
    /// `log-text`, dynamically by the `Text` bit.
    fn write_line(&self, severity: Severity, line: &str) {
        #[cfg(feature = "log-text")]
        if self.text_admitted() {
            self.sink.write(priority_for(severity), line);
        }
        #[cfg(not(feature = "log-text"))]
        let _ = (severity, line);
    }

    #[cfg(all(feature = "log-text", feature = "dynamic-filter"))]
    fn text_admitted(&self) -> bool {
        self.dynamic_mask().contains(Severity::Text)
    }

    #[cfg(all(feature = "log-text", not(feature = "dynamic-filter")))]
    fn text_admitted(&self) -> bool {
        true
    }

    /// Calendar stamp for ordinary sinks; a monotonic tick count (elapsed
    /// milliseconds) for the kernel channel, which has no business calling
    /// calendar APIs.
    fn timestamp(&self) -> String {
        if self.kind == SinkKind::KernelChannel {
            self.started.elapsed().as_millis().to_string()
        } else {
            clock::wall_stamp()
        }
    }
}

#[cfg(unix)]
fn kernel_sink(config: &LogConfig) -> Result<Sink, ConfigError> {
    Ok(Sink::kernel(&config.syslog))
}

#[cfg(not(unix))]
fn kernel_sink(_config: &LogConfig) -> Result<Sink, ConfigError> {
    Err(ConfigError::UnsupportedSink(SinkKind::KernelChannel))
}

/// Maps a record severity onto the grading the kernel channel understands.
const fn priority_for(severity: Severity) -> SyslogPriority {
    match severity {
        Severity::Fatal => SyslogPriority::Critical,
        Severity::Error | Severity::Verify | Severity::Assert => SyslogPriority::Error,
        Severity::Warning => SyslogPriority::Warning,
        Severity::Notice => SyslogPriority::Notice,
        Severity::Text | Severity::Base | Severity::Info => SyslogPriority::Info,
        Severity::Trace | Severity::Debug => SyslogPriority::Debug,
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// Returns the logger back if one is already installed; the first
/// installation wins.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// The installed process-wide logger, if any.
#[must_use]
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
