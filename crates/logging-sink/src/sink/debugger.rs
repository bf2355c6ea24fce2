//! crates/logging-sink/src/sink/debugger.rs
//! Debugger-output-channel backend.

#[cfg(not(windows))]
use std::io::{self, Write};

/// Capacity of the stack buffer a line is rendered into before the sink
/// falls back to a heap allocation. Build-time constant, like the rest of
/// the configuration surface.
pub const STACK_CAPACITY: usize = 512;

/// Routes lines to the platform debugger channel.
///
/// On Windows the line is handed to `OutputDebugStringA`, which requires a
/// NUL-terminated buffer. Elsewhere the line goes to stderr, the stream a
/// debugger conventionally captures.
///
/// Lines that fit into [`STACK_CAPACITY`] bytes (including the terminating
/// NUL) are staged on the stack; longer lines get a heap buffer sized
/// exactly to the need, used for the single write and dropped immediately.
/// The rendered content is never truncated.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebuggerSink;

impl DebuggerSink {
    pub(crate) fn write(self, line: &str) {
        with_line_buffer(line, emit);
    }
}

/// Stages `line` into a NUL-terminated buffer and passes it to `f`.
///
/// The buffer lives on the stack when `line.len() + 1 <= STACK_CAPACITY`
/// and on the heap otherwise.
fn with_line_buffer<R>(line: &str, f: impl FnOnce(&[u8]) -> R) -> R {
    let needed = line.len() + 1;
    if needed <= STACK_CAPACITY {
        let mut stack = [0u8; STACK_CAPACITY];
        stack[..line.len()].copy_from_slice(line.as_bytes());
        f(&stack[..needed])
    } else {
        let mut heap = vec![0u8; needed];
        heap[..line.len()].copy_from_slice(line.as_bytes());
        f(&heap)
    }
}

#[cfg(windows)]
fn emit(buffer: &[u8]) {
    // SAFETY: `with_line_buffer` guarantees the buffer ends with a NUL byte,
    // which is all OutputDebugStringA requires of its argument.
    unsafe {
        windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringA(buffer.as_ptr());
    }
}

#[cfg(not(windows))]
fn emit(buffer: &[u8]) {
    let text = &buffer[..buffer.len() - 1];
    let mut err = io::stderr().lock();
    let _ = err.write_all(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_staged_on_a_nul_terminated_stack_buffer() {
        with_line_buffer("hello", |buffer| {
            assert_eq!(buffer.len(), 6);
            assert_eq!(&buffer[..5], b"hello");
            assert_eq!(buffer[5], 0);
        });
    }

    #[test]
    fn boundary_line_still_fits_the_stack_buffer() {
        let line = "x".repeat(STACK_CAPACITY - 1);
        with_line_buffer(&line, |buffer| {
            assert_eq!(buffer.len(), STACK_CAPACITY);
            assert_eq!(buffer[STACK_CAPACITY - 1], 0);
        });
    }

    #[test]
    fn oversized_line_is_carried_in_full() {
        let line = "y".repeat(STACK_CAPACITY * 3);
        with_line_buffer(&line, |buffer| {
            assert_eq!(buffer.len(), line.len() + 1);
            assert!(buffer[..line.len()].iter().all(|&b| b == b'y'));
            assert_eq!(buffer[line.len()], 0);
        });
    }

    #[test]
    fn empty_line_yields_a_lone_nul() {
        with_line_buffer("", |buffer| {
            assert_eq!(buffer, [0]);
        });
    }

    #[test]
    fn write_does_not_panic() {
        DebuggerSink.write("debugger sink smoke line\n");
        DebuggerSink.write(&"z".repeat(STACK_CAPACITY * 2));
    }
}
