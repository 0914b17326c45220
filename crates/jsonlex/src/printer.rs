//! Verbatim printer: writes token values back out unchanged.
//!
//! Printing every token of a lexer run reproduces the consumed input byte
//! for byte, which is how losslessness of the lexer is checked.

use std::io::{self, Write};

use jsonlex_core::{Lexer, LexerOptions, Span, Token};
use tracing::debug;

use crate::Result;

/// Writes each token's raw value to an output sink, in order.
pub struct VerbatimPrinter<W: Write> {
    out: W,
    tokens: usize,
    bytes: usize,
}

impl<W: Write> VerbatimPrinter<W> {
    /// Create a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            tokens: 0,
            bytes: 0,
        }
    }

    /// Write one token's value.
    pub fn print(&mut self, token: &Token<'_>) -> io::Result<()> {
        self.print_value(token.value)
    }

    /// Write a raw token value, e.g. from a `StreamToken`.
    pub fn print_value(&mut self, value: &[u8]) -> io::Result<()> {
        self.out.write_all(value)?;
        self.tokens += 1;
        self.bytes += value.len();
        Ok(())
    }

    /// Number of tokens written so far.
    pub fn tokens_written(&self) -> usize {
        self.tokens
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.bytes
    }

    /// Flush the sink and return it.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Outcome of [`reprint`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintSummary {
    /// Tokens written, including a trailing illegal token.
    pub tokens: usize,
    /// Bytes written.
    pub bytes: usize,
    /// Span of the illegal token, if lexing stopped on one.
    pub illegal: Option<Span>,
}

impl PrintSummary {
    /// Returns `true` if every token was legal.
    pub fn is_clean(&self) -> bool {
        self.illegal.is_none()
    }
}

/// Lex `input` and write every token value to `out`.
///
/// The illegal token, if any, is written too, so the output always equals
/// the consumed input.
pub fn reprint<W: Write>(input: &[u8], options: LexerOptions, out: W) -> Result<PrintSummary> {
    let mut printer = VerbatimPrinter::new(out);
    let mut illegal = None;
    for token in Lexer::with_options(input, options) {
        printer.print(&token)?;
        if token.kind.is_illegal() {
            illegal = Some(token.span);
        }
    }
    let summary = PrintSummary {
        tokens: printer.tokens_written(),
        bytes: printer.bytes_written(),
        illegal,
    };
    printer.finish()?;
    debug!(tokens = summary.tokens, bytes = summary.bytes, "reprint complete");
    Ok(summary)
}
