//! Integration tests for the raw dump renderer through the file sink.

use std::fs;
use std::path::Path;

use logging::{ByteFormat, LogConfig, Logger, log_info_dump, log_text_dump, log_text_dump_if};

const DEADBEEF: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

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
fn forward_hex_dump_emits_one_line_per_byte_then_a_blank_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fwd.log");
    let logger = file_logger(&path);

    log_text_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, 4);

    let lines = content_lines(&path);
    assert_eq!(lines, ["DE", "AD", "BE", "EF", ""]);
}

#[test]
fn backward_addressing_matches_the_forward_dump() {
    let dir = tempfile::tempdir().expect("tempdir");
    let forward = dir.path().join("f.log");
    let backward = dir.path().join("b.log");
    let buffer = [0x01u8, 0x02, 0x03];

    log_text_dump!(file_logger(&forward), ByteFormat::HexUpper, &buffer, 3);
    log_text_dump!(file_logger(&backward), ByteFormat::HexUpper, &buffer, -3);

    assert_eq!(content_lines(&forward), content_lines(&backward));
}

#[test]
fn partial_backward_dump_takes_the_trailing_bytes_in_forward_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tail.log");
    let logger = file_logger(&path);

    log_text_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, -2);

    assert_eq!(content_lines(&path), ["BE", "EF", ""]);
}

#[test]
fn zero_count_emits_exactly_one_diagnostic_and_no_byte_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("zero.log");
    let logger = file_logger(&path);

    log_text_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, 0);

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].ends_with("| cannot dump buffer {len(4), count(0)}"),
        "diagnostic mismatch: {}",
        lines[0]
    );
}

#[test]
fn oversized_count_is_diagnosed_instead_of_read_out_of_range() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("over.log");
    let logger = file_logger(&path);

    log_text_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, 9);

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("| cannot dump buffer {len(4), count(9)}"));
}

#[test]
fn record_dump_is_delimited_by_start_and_end_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rec.log");
    let logger = file_logger(&path);

    log_info_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, 4, "handshake bytes");

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains(" I "));
    assert!(lines[0].ends_with("| [START](4) handshake bytes"));
    assert_eq!(&lines[1..5], ["DE", "AD", "BE", "EF"]);
    assert_eq!(lines[5], "");
    assert!(lines[6].ends_with("| [E.N.D]"));
}

#[test]
fn record_dump_with_invalid_count_collapses_to_one_diagnostic_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("recbad.log");
    let logger = file_logger(&path);

    log_info_dump!(logger, ByteFormat::HexUpper, &DEADBEEF, 0, "never dumped");

    let lines = content_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("| cannot dump buffer {len(4), count(0)}"));
    assert!(!lines.iter().any(|l| l.contains("[START]")));
}

#[test]
fn conditional_dump_short_circuits_on_false() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conddump.log");
    let logger = file_logger(&path);

    log_text_dump_if!(logger, false, ByteFormat::HexUpper, &DEADBEEF, 4);
    assert!(!path.exists(), "nothing may be written, not even the banner");

    log_text_dump_if!(logger, true, ByteFormat::HexUpper, &DEADBEEF, 1);
    assert_eq!(content_lines(&path), ["DE", ""]);
}

#[test]
fn decimal_and_custom_formats_apply_per_byte() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fmt.log");
    let logger = file_logger(&path);

    log_text_dump!(logger, ByteFormat::Decimal, &[7u8, 200], 2);
    log_text_dump!(
        logger,
        ByteFormat::Custom(|byte| format!("<{byte:02x}>")),
        &[0xABu8],
        1
    );

    let lines = content_lines(&path);
    assert_eq!(lines, ["7", "200", "", "<ab>", ""]);
}
