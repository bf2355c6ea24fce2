//! crates/logging/src/config.rs
//! Logger configuration, resolved once per context.

use std::path::{Path, PathBuf};

use logging_sink::{SinkKind, SyslogSettings};
use thiserror::Error;

#[cfg(feature = "dynamic-filter")]
use crate::severity::SeverityMask;

/// Fallback append target when the file sink is selected without a path.
pub const DEFAULT_FILE_NAME: &str = "oc.log";

/// Declarative logger configuration.
///
/// Plain data: building a config touches nothing. Validation and backend
/// construction happen once, in [`Logger::new`](crate::Logger::new), which is
/// the only place a configuration mistake can surface.
///
/// # Examples
///
/// ```
/// use logging::{LogConfig, SinkKind};
///
/// let config = LogConfig::new().with_file_path("/var/log/app.log");
/// assert_eq!(config.resolved_sink(), SinkKind::AppendFile);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Explicit sink choice. `None` resolves to the file sink when a path is
    /// configured and the console otherwise.
    pub sink: Option<SinkKind>,
    /// Append target for the file sink.
    pub file_path: Option<PathBuf>,
    /// Abandon file-sink writes until the file exists. Turning file logging
    /// on in the field then amounts to creating the marker file.
    pub require_existing_file: bool,
    /// Tag and facility for the kernel channel.
    pub syslog: SyslogSettings,
    /// Initial runtime severity mask. Mandatory: there is no built-in
    /// default, the embedding application decides what starts enabled.
    #[cfg(feature = "dynamic-filter")]
    pub dynamic_mask: Option<SeverityMask>,
}

impl LogConfig {
    /// An empty configuration; resolves to the console sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the sink explicitly.
    #[must_use]
    pub fn with_sink(mut self, kind: SinkKind) -> Self {
        self.sink = Some(kind);
        self
    }

    /// Sets the append target (and, implicitly, the file sink as default).
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Only write when the log file already exists.
    #[must_use]
    pub fn with_require_existing_file(mut self, require: bool) -> Self {
        self.require_existing_file = require;
        self
    }

    /// Overrides the syslog tag and facility for the kernel channel.
    #[must_use]
    pub fn with_syslog(mut self, settings: SyslogSettings) -> Self {
        self.syslog = settings;
        self
    }

    /// Supplies the initial runtime severity mask.
    #[cfg(feature = "dynamic-filter")]
    #[must_use]
    pub fn with_dynamic_mask(mut self, mask: SeverityMask) -> Self {
        self.dynamic_mask = Some(mask);
        self
    }

    /// The sink the process will use: the explicit choice if any, else the
    /// file sink when a path is configured, else the console.
    #[must_use]
    pub fn resolved_sink(&self) -> SinkKind {
        self.sink.unwrap_or(if self.file_path.is_some() {
            SinkKind::AppendFile
        } else {
            SinkKind::Console
        })
    }

    /// The append target the file sink will use.
    #[must_use]
    pub fn resolved_file_path(&self) -> &Path {
        self.file_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_FILE_NAME))
    }
}

/// Configuration mistakes, the only errors this facility ever raises.
///
/// Surfaced from [`Logger::new`](crate::Logger::new) and nowhere else: once a
/// context exists, logging failures degrade silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The selected sink does not exist on this platform.
    #[error("sink '{0}' is not supported on this platform")]
    UnsupportedSink(SinkKind),
    /// `dynamic-filter` is compiled in but no initial mask was supplied.
    #[cfg(feature = "dynamic-filter")]
    #[error("dynamic filtering is enabled but no initial severity mask was configured")]
    MissingDynamicMask,
}
