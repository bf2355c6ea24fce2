//! crates/logging-sink/src/syslog.rs
//!
//! Kernel-channel backend via syslog(3).
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate, keeping the dependency graph minimal. syslog is
//! the privileged, allocation-free primitive the host exposes for this kind
//! of logging, so the channel performs no file I/O and no calendar lookups of
//! its own.
//!
//! The facility, priority, and settings types are portable so configuration
//! can be described (and serialized) on any platform; only the connection
//! itself is unix-gated.

use std::fmt;

#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::sync::OnceLock;

/// Default syslog tag (ident) for processes that do not configure one.
pub const DEFAULT_SYSLOG_TAG: &str = "oc-log";

/// Syslog facility the kernel channel opens with.
///
/// Mirrors the `LOG_*` facility constants from `<syslog.h>`. Configuration
/// maps string names (e.g. `"user"`, `"local3"`) to these via
/// [`SyslogFacility::from_name`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern,
    /// User-level messages (LOG_USER) — the default.
    #[default]
    User,
    /// System daemons (LOG_DAEMON).
    Daemon,
    /// Reserved for local use (LOG_LOCAL0).
    Local0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7,
}

impl SyslogFacility {
    /// Parses a facility name, case-insensitively.
    ///
    /// Returns `None` for unrecognised names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "kern" => Some(Self::Kern),
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the configuration spelling of the facility.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }

    #[cfg(unix)]
    const fn as_libc(self) -> libc::c_int {
        match self {
            Self::Kern => libc::LOG_KERN,
            Self::User => libc::LOG_USER,
            Self::Daemon => libc::LOG_DAEMON,
            Self::Local0 => libc::LOG_LOCAL0,
            Self::Local1 => libc::LOG_LOCAL1,
            Self::Local2 => libc::LOG_LOCAL2,
            Self::Local3 => libc::LOG_LOCAL3,
            Self::Local4 => libc::LOG_LOCAL4,
            Self::Local5 => libc::LOG_LOCAL5,
            Self::Local6 => libc::LOG_LOCAL6,
            Self::Local7 => libc::LOG_LOCAL7,
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message grading passed alongside each line.
///
/// Only the kernel channel acts on it; the front end derives it from the
/// record's severity so syslog consumers can filter meaningfully.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyslogPriority {
    /// Critical conditions (LOG_CRIT).
    Critical,
    /// Error conditions (LOG_ERR).
    Error,
    /// Warning conditions (LOG_WARNING).
    Warning,
    /// Normal but significant condition (LOG_NOTICE).
    Notice,
    /// Informational messages (LOG_INFO).
    Info,
    /// Debug-level messages (LOG_DEBUG).
    Debug,
}

impl SyslogPriority {
    #[cfg(unix)]
    const fn as_libc(self) -> libc::c_int {
        match self {
            Self::Critical => libc::LOG_CRIT,
            Self::Error => libc::LOG_ERR,
            Self::Warning => libc::LOG_WARNING,
            Self::Notice => libc::LOG_NOTICE,
            Self::Info => libc::LOG_INFO,
            Self::Debug => libc::LOG_DEBUG,
        }
    }
}

/// Tag and facility the kernel channel opens the syslog connection with.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyslogSettings {
    /// Facility passed to `openlog(3)`.
    pub facility: SyslogFacility,
    /// Ident string prefixed to every message.
    pub tag: String,
}

impl Default for SyslogSettings {
    fn default() -> Self {
        Self {
            facility: SyslogFacility::default(),
            tag: DEFAULT_SYSLOG_TAG.to_owned(),
        }
    }
}

/// Open syslog connection backing the kernel channel.
///
/// Created once at sink construction; dropping it closes the connection.
#[cfg(unix)]
#[derive(Debug)]
pub struct SyslogChannel {
    _private: (),
}

#[cfg(unix)]
impl SyslogChannel {
    /// Opens the syslog connection with the configured facility and tag.
    ///
    /// syslog(3) stores the ident pointer rather than copying it, so the
    /// CString is kept in a process-lifetime static. The first tag opened
    /// with wins for the process, matching the one-connection-per-process
    /// model of syslog itself.
    #[must_use]
    pub fn open(settings: &SyslogSettings) -> Self {
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(settings.tag.as_str()).unwrap_or_else(|_| {
                CString::new(DEFAULT_SYSLOG_TAG).expect("default tag contains no NUL bytes")
            })
        });

        // SAFETY: the ident pointer stays valid for the process lifetime
        // because it is stored in a static OnceLock. openlog itself has no
        // other preconditions.
        unsafe {
            libc::openlog(
                ident.as_ptr(),
                libc::LOG_PID,
                settings.facility.as_libc(),
            );
        }

        Self { _private: () }
    }

    /// Sends one line to syslog at the given priority.
    ///
    /// The trailing newline is stripped (syslog frames messages itself) and
    /// the payload goes through a `"%s"` format so `%` sequences in the
    /// message cannot be interpreted. Lines with interior NUL bytes are
    /// dropped, as they cannot cross the C boundary.
    pub fn write(&self, priority: SyslogPriority, line: &str) {
        let Ok(message) = CString::new(line.trim_end_matches('\n')) else {
            return;
        };

        // SAFETY: syslog is callable from multiple threads once openlog has
        // completed, which construction of `self` guarantees. Both pointers
        // are valid NUL-terminated strings.
        unsafe {
            libc::syslog(priority.as_libc(), c"%s".as_ptr(), message.as_ptr());
        }
    }
}

#[cfg(unix)]
impl Drop for SyslogChannel {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog,
        // guaranteed by construction.
        unsafe {
            libc::closelog();
        }
    }
}
