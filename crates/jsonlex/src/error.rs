//! Error type for the I/O and threading layers around the lexer.
//!
//! Lexing itself never fails with an error: malformed input is reported as
//! an `Illegal` token. These variants cover everything around it.

use thiserror::Error;

/// Errors produced by printing, streaming and validation.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lexer worker thread could not be started.
    #[error("failed to spawn lexer thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The lexer worker thread panicked.
    #[error("lexer thread panicked")]
    WorkerPanicked,

    /// Input was not a complete, well-formed JSON document.
    ///
    /// `len` is zero when the input ended early.
    #[error("illegal input at byte {offset} ({len} bytes unconsumed)")]
    Illegal { offset: usize, len: usize },

    /// The lexer stopped without consuming all input and without reporting
    /// an illegal token (input starting with whitespace under
    /// `LeadingWhitespace::Halt`).
    #[error("input not consumed from byte {offset} ({len} bytes)")]
    Unconsumed { offset: usize, len: usize },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_display() {
        let err = Error::Illegal { offset: 4, len: 3 };
        assert_eq!(err.to_string(), "illegal input at byte 4 (3 bytes unconsumed)");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn spawn_keeps_source() {
        use std::error::Error as _;
        let err = Error::Spawn(std::io::Error::new(std::io::ErrorKind::Other, "no threads"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to spawn lexer thread: no threads");
    }

    #[test]
    fn unconsumed_display() {
        let err = Error::Unconsumed { offset: 0, len: 5 };
        assert_eq!(err.to_string(), "input not consumed from byte 0 (5 bytes)");
    }

    #[test]
    fn worker_panicked_display() {
        assert_eq!(Error::WorkerPanicked.to_string(), "lexer thread panicked");
    }
}
