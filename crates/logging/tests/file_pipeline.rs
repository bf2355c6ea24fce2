//! Integration tests for the record pipeline through the file sink.
//!
//! The file sink is the one backend whose output can be read back, so these
//! tests drive the whole path: macro entry point, filter gate, record
//! formatter, sink dispatch, file state machine.

use std::fs;
use std::path::Path;

use logging::{
    LogConfig, Logger, log_error, log_info, log_info_if, log_notice, log_trace, log_warning,
};

fn file_logger(path: &Path) -> Logger {
    let config = LogConfig::new().with_file_path(path);
    #[cfg(feature = "dynamic-filter")]
    let config = config.with_dynamic_mask(logging::SeverityMask::ALL);
    Logger::new(config).expect("file logger builds")
}

/// Lines after the two banner lines.
fn content_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).expect("log file readable");
    text.lines().skip(2).map(str::to_owned).collect()
}

#[test]
fn banner_precedes_content_and_lines_keep_call_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("order.log");
    let logger = file_logger(&path);

    log_info!(logger, "first");
    log_info!(logger, "second");
    log_info!(logger, "third");

    let text = fs::read_to_string(&path).expect("log file readable");
    assert!(text.starts_with("\n++++++++++OCLOG+++++++++++\n"));

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("| first"));
    assert!(lines[1].ends_with("| second"));
    assert!(lines[2].ends_with("| third"));
}

#[test]
fn each_severity_renders_its_tag_character() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tags.log");
    let logger = file_logger(&path);

    log_trace!(logger, "t");
    log_info!(logger, "i");
    log_notice!(logger, "n");
    log_warning!(logger, "w");
    log_error!(logger, "e");

    let tags: Vec<char> = content_lines(&path)
        .iter()
        .map(|line| line.chars().nth(15).expect("tag column"))
        .collect();
    assert_eq!(tags, ['T', 'I', 'N', 'W', 'E']);
}

#[test]
fn timestamp_field_has_the_fixed_width() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stamp.log");
    let logger = file_logger(&path);

    log_info!(logger, "stamped");

    let lines = content_lines(&path);
    let line = lines[0].as_bytes();
    assert!(
        lines[0].starts_with("<error time>")
            || (line[2] == b'-' && line[5] == b' ' && line[8] == b':' && line[11] == b':'),
        "unexpected stamp in: {}",
        lines[0]
    );
}

#[test]
fn source_location_is_reduced_to_the_basename() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("loc.log");
    let logger = file_logger(&path);

    log_info!(logger, "located");

    let lines = content_lines(&path);
    assert!(
        lines[0].contains(" file_pipeline.rs:"),
        "directories must be stripped: {}",
        lines[0]
    );
    assert!(!lines[0].contains("tests/"));
}

#[test]
fn message_arguments_are_formatted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fmt.log");
    let logger = file_logger(&path);

    log_info!(logger, "{} of {} blocks", 3, 8);

    let lines = content_lines(&path);
    assert!(lines[0].ends_with("| 3 of 8 blocks"));
}

#[test]
fn conditional_form_short_circuits_on_false() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cond.log");
    let logger = file_logger(&path);

    log_info_if!(logger, false, "suppressed");
    log_info_if!(logger, 1 + 1 == 2, "emitted");

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("| emitted"));
}

#[test]
fn repeated_calls_differ_only_in_the_timestamp_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ident.log");
    let logger = file_logger(&path);

    for _ in 0..2 {
        log_info!(logger, "identical payload");
    }

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0][14..], lines[1][14..]);
}

#[test]
fn lines_each_end_with_exactly_one_newline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nl.log");
    let logger = file_logger(&path);

    log_info!(logger, "one");
    log_info!(logger, "two");

    let text = fs::read_to_string(&path).expect("log file readable");
    assert!(!text.contains("one\n\n"));
    assert!(text.ends_with("two\n"));
}

#[test]
fn require_existing_file_suppresses_until_touched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("marker.log");
    let config = LogConfig::new()
        .with_file_path(&path)
        .with_require_existing_file(true);
    #[cfg(feature = "dynamic-filter")]
    let config = config.with_dynamic_mask(logging::SeverityMask::ALL);
    let logger = Logger::new(config).expect("file logger builds");

    log_info!(logger, "dropped");
    assert!(!path.exists());

    fs::write(&path, "").expect("touch marker");
    log_info!(logger, "kept");

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("| kept"));
}
