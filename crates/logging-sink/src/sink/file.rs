//! crates/logging-sink/src/sink/file.rs
//! Append-file backend and its handle state machine.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Marker line written each time the sink transitions from closed to open,
/// before any caller content. Separates sessions in a file that is only ever
/// appended to.
pub const SESSION_BANNER: &str = "\n++++++++++OCLOG+++++++++++\n";

/// Lifecycle of the lazily opened append handle.
///
/// `Failed` records an open failure and behaves exactly like `Unopened`: the
/// next write retries the open from scratch. A write error on an open handle
/// discards it and returns to `Unopened`, so a later call can reopen against
/// a rotated or relinked file.
#[derive(Debug)]
enum HandleState {
    Unopened,
    Open(File),
    Failed,
}

/// Append-only file backend.
///
/// The handle is opened on the first write, not at configuration time, and
/// the whole check-open-write-flush sequence runs under one lock so
/// concurrent callers cannot interleave partial lines. No failure here is
/// ever visible to the caller; a dropped line is the worst outcome.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    require_existing: bool,
    state: Mutex<HandleState>,
}

impl FileSink {
    /// Creates the sink without touching the filesystem.
    ///
    /// With `require_existing` set, writes are silently abandoned until the
    /// file has been created externally. Field deployments use this so that
    /// turning file logging on amounts to touching the marker file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, require_existing: bool) -> Self {
        Self {
            path: path.into(),
            require_existing,
            state: Mutex::new(HandleState::Unopened),
        }
    }

    /// Returns the configured append target.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn write(&self, line: &str) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if matches!(*state, HandleState::Unopened | HandleState::Failed) {
            if self.require_existing && !self.path.exists() {
                *state = HandleState::Unopened;
                return;
            }
            match OpenOptions::new().append(true).create(true).open(&self.path) {
                Ok(mut file) => {
                    // Banner result is not checked; the first line write
                    // catches a dead handle.
                    let _ = file.write_all(SESSION_BANNER.as_bytes());
                    *state = HandleState::Open(file);
                }
                Err(_) => {
                    *state = HandleState::Failed;
                    return;
                }
            }
        }

        if let HandleState::Open(file) = &mut *state {
            let wrote = file.write_all(line.as_bytes()).and_then(|()| file.flush());
            if wrote.is_err() {
                *state = HandleState::Unopened;
            }
        }
    }

    /// Swaps in an arbitrary handle so tests can force write failures.
    #[cfg(test)]
    fn inject_handle(&self, file: File) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = HandleState::Open(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .expect("log file readable")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn first_write_opens_and_prepends_the_session_banner() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.log");
        let sink = FileSink::new(&path, false);

        sink.write("alpha\n");
        sink.write("beta\n");

        let lines = read_lines(&path);
        assert_eq!(lines, ["", "++++++++++OCLOG+++++++++++", "alpha", "beta"]);
    }

    #[test]
    fn lines_are_appended_in_call_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("order.log");
        let sink = FileSink::new(&path, false);

        for n in 0..16 {
            sink.write(&format!("line {n}\n"));
        }

        let lines = read_lines(&path);
        for n in 0..16 {
            assert_eq!(lines[n + 2], format!("line {n}"));
        }
    }

    #[test]
    fn require_existing_abandons_writes_until_the_file_appears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gated.log");
        let sink = FileSink::new(&path, true);

        sink.write("dropped\n");
        assert!(!path.exists(), "sink must not create the marker file itself");

        fs::write(&path, "").expect("touch marker file");
        sink.write("kept\n");

        let lines = read_lines(&path);
        assert_eq!(lines, ["", "++++++++++OCLOG+++++++++++", "kept"]);
    }

    #[test]
    fn write_failure_discards_the_handle_and_the_next_call_reopens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("heal.log");
        let sink = FileSink::new(&path, false);

        sink.write("before\n");

        // A read-only handle makes the next write fail the way a revoked
        // descriptor would.
        let broken = File::open(&path).expect("open read-only");
        sink.inject_handle(broken);
        sink.write("lost\n");

        sink.write("after\n");

        let content = fs::read_to_string(&path).expect("log file readable");
        assert!(content.contains("before"));
        assert!(!content.contains("lost"));
        assert!(content.contains("after"));
        assert_eq!(
            content.matches("++++++++++OCLOG+++++++++++").count(),
            2,
            "the reopen starts a new session with its own banner"
        );
    }

    #[test]
    fn open_failure_is_retried_on_the_next_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("missing");
        let path = nested.join("late.log");
        let sink = FileSink::new(&path, false);

        sink.write("dropped\n");
        assert!(!path.exists());

        fs::create_dir(&nested).expect("create parent dir");
        sink.write("recovered\n");

        let lines = read_lines(&path);
        assert_eq!(lines, ["", "++++++++++OCLOG+++++++++++", "recovered"]);
    }

    #[test]
    fn appends_across_sink_instances_preserve_prior_sessions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("multi.log");

        FileSink::new(&path, false).write("first session\n");
        FileSink::new(&path, false).write("second session\n");

        let content = fs::read_to_string(&path).expect("log file readable");
        assert_eq!(content.matches("++++++++++OCLOG+++++++++++").count(), 2);
        assert!(content.contains("first session"));
        assert!(content.contains("second session"));
    }
}
