//! Single-pass JSON lexer.
//!
//! Converts raw JSON bytes into a lossless sequence of classified tokens.
//! Each token borrows the exact input bytes that produced it, so the
//! concatenation of all token values reproduces the consumed input byte for
//! byte.
//!
//! Deviations from the grammar are not reported through `Result`. Instead,
//! the first byte that cannot continue the document starts a single
//! [`TokenKind::Illegal`] token that runs to the end of input, and lexing
//! stops.
//!
//! ```
//! use jsonlex_core::{lex, TokenKind};
//!
//! let tokens = lex(br#"{"a": [1, 2.5]}"#);
//! assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));
//!
//! let joined: Vec<u8> = tokens.iter().flat_map(|t| t.value.to_vec()).collect();
//! assert_eq!(joined, br#"{"a": [1, 2.5]}"#);
//! ```
//!
//! This crate has no dependency on the rest of the workspace; threaded
//! streaming and printing live in `jsonlex`.

mod cursor;
mod lexer;
mod options;
mod recognize;
mod tag;

pub use lexer::{lex, lex_with, Lexer};
pub use options::{LeadingWhitespace, LexerOptions, WhitespaceSet};
pub use tag::{Span, Token, TokenKind};
