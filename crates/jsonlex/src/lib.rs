//! JSON lexing with printing, threaded streaming and validation.
//!
//! The lexer itself lives in `jsonlex_core` and is re-exported here. This
//! crate adds the layers around it:
//!
//! - [`VerbatimPrinter`] and [`reprint`] write tokens back out unchanged.
//! - [`TokenStream`] runs the lexer on a worker thread and hands tokens over
//!   one at a time.
//! - [`validate`] turns a lexer run into a `Result`.

mod error;
mod printer;
mod stream;

pub use error::{Error, Result};
pub use jsonlex_core::{
    lex, lex_with, LeadingWhitespace, Lexer, LexerOptions, Span, Token, TokenKind, WhitespaceSet,
};
pub use printer::{reprint, PrintSummary, VerbatimPrinter};
pub use stream::{StreamToken, TokenStream};

use tracing::debug;

/// Lex `input` to completion and report whether it was fully consumed
/// without an illegal token.
///
/// Returns the number of tokens produced.
///
/// # Errors
///
/// [`Error::Illegal`] if lexing stopped on an illegal token, and
/// [`Error::Unconsumed`] if it stopped early without one.
pub fn validate(input: &[u8], options: LexerOptions) -> Result<usize> {
    let mut lexer = Lexer::with_options(input, options);
    let mut count = 0;
    for token in lexer.by_ref() {
        if token.kind.is_illegal() {
            debug!(offset = token.span.start, "validation failed");
            return Err(Error::Illegal {
                offset: token.span.start,
                len: token.span.len(),
            });
        }
        count += 1;
    }
    let consumed = lexer.position();
    if consumed < input.len() {
        return Err(Error::Unconsumed {
            offset: consumed,
            len: input.len() - consumed,
        });
    }
    Ok(count)
}
