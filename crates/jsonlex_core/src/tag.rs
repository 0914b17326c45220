//! Token kinds, byte spans, and the token type itself.
//!
//! A [`Token`] never owns its text: `value` borrows the exact bytes of the
//! input that produced it, quotes and punctuation included.

use std::fmt;

/// Classification of a lexed token.
///
/// The set is closed. Discriminants are grouped by category so that a kind
/// fits in a single byte:
///
/// - Values: 0-15
/// - Structural punctuation: 16-31
/// - Trivia: 32
/// - Errors: 240
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Values ===
    /// `null`
    Null = 0,
    /// `true`
    True = 1,
    /// `false`
    False = 2,
    /// Number literal, e.g. `-12.5e3`
    Number = 3,
    /// String literal including both quotes, escapes left undecoded
    String = 4,

    // === Structural ===
    /// `[`
    ArrayStart = 16,
    /// `]`
    ArrayStop = 17,
    /// `{`
    ObjectStart = 18,
    /// `}`
    ObjectStop = 19,
    /// `:`
    Colon = 20,
    /// `,`
    Comma = 21,

    // === Trivia ===
    /// A run of whitespace bytes
    Whitespace = 32,

    // === Errors ===
    /// Terminal token covering all input the lexer could not accept
    Illegal = 240,
}

impl TokenKind {
    /// Returns the fixed source text for kinds that always have one.
    ///
    /// Keywords and punctuation have a fixed lexeme; numbers, strings,
    /// whitespace and illegal spans do not.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Null => Some("null"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::ArrayStart => Some("["),
            TokenKind::ArrayStop => Some("]"),
            TokenKind::ObjectStart => Some("{"),
            TokenKind::ObjectStop => Some("}"),
            TokenKind::Colon => Some(":"),
            TokenKind::Comma => Some(","),
            TokenKind::Number | TokenKind::String | TokenKind::Whitespace | TokenKind::Illegal => {
                None
            }
        }
    }

    /// Stable, human-readable name used in listings and logs.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Null => "Null",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::ArrayStart => "ArrayStart",
            TokenKind::ArrayStop => "ArrayStop",
            TokenKind::ObjectStart => "ObjectStart",
            TokenKind::ObjectStop => "ObjectStop",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Illegal => "Illegal",
        }
    }

    /// `true` for the terminal illegal token.
    pub const fn is_illegal(self) -> bool {
        matches!(self, TokenKind::Illegal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open byte range `[start, end)` into the lexer input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified, contiguous view into the lexer input.
///
/// Invariant: `value.len() == span.len()` and `value` is exactly
/// `input[span.start..span.end]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub value: &'a [u8],
}

impl<'a> Token<'a> {
    /// Token value with invalid UTF-8 replaced, for display.
    pub fn text_lossy(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.value)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, self.text_lossy(), self.span)
    }
}
