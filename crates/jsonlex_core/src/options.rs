//! Lexer configuration.
//!
//! The defaults reproduce the lexer's established behavior: only the ASCII
//! space is whitespace, input that starts with whitespace produces no tokens
//! at all, and numbers may carry a leading `+`. [`LexerOptions::rfc8259`]
//! switches all three to what RFC 8259 prescribes.

use bitflags::bitflags;

bitflags! {
    /// Set of bytes the lexer treats as whitespace.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct WhitespaceSet: u8 {
        /// `0x20`
        const SPACE = 1 << 0;
        /// `0x09`
        const TAB = 1 << 1;
        /// `0x0A`
        const LINE_FEED = 1 << 2;
        /// `0x0D`
        const CARRIAGE_RETURN = 1 << 3;

        /// The four insignificant whitespace bytes of RFC 8259.
        const JSON = Self::SPACE.bits()
            | Self::TAB.bits()
            | Self::LINE_FEED.bits()
            | Self::CARRIAGE_RETURN.bits();
    }
}

impl WhitespaceSet {
    /// Returns `true` if `byte` is whitespace under this set.
    #[inline]
    pub fn matches(self, byte: u8) -> bool {
        let flag = match byte {
            b' ' => Self::SPACE,
            b'\t' => Self::TAB,
            b'\n' => Self::LINE_FEED,
            b'\r' => Self::CARRIAGE_RETURN,
            _ => return false,
        };
        self.contains(flag)
    }
}

impl Default for WhitespaceSet {
    fn default() -> Self {
        Self::SPACE
    }
}

/// What to do when the very first input byte is whitespace.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LeadingWhitespace {
    /// Stop immediately and produce no tokens.
    #[default]
    Halt,
    /// Emit the run as a `Whitespace` token and keep lexing.
    Lex,
}

/// Configuration for a [`Lexer`](crate::Lexer).
///
/// Options are fixed for the lifetime of a lexer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Bytes accepted as whitespace between tokens.
    pub whitespace: WhitespaceSet,
    /// Handling of whitespace at offset 0.
    pub leading_whitespace: LeadingWhitespace,
    /// Accept `+` as a number sign in addition to `-`.
    pub allow_plus_sign: bool,
    /// Maximum container nesting depth. `None` is unbounded.
    ///
    /// The `[` or `{` that would exceed the limit starts the illegal span.
    pub max_depth: Option<usize>,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            whitespace: WhitespaceSet::default(),
            leading_whitespace: LeadingWhitespace::default(),
            allow_plus_sign: true,
            max_depth: None,
        }
    }
}

impl LexerOptions {
    /// Options matching RFC 8259 whitespace and number signs.
    pub fn rfc8259() -> Self {
        Self {
            whitespace: WhitespaceSet::JSON,
            leading_whitespace: LeadingWhitespace::Lex,
            allow_plus_sign: false,
            max_depth: None,
        }
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: WhitespaceSet) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn with_leading_whitespace(mut self, leading: LeadingWhitespace) -> Self {
        self.leading_whitespace = leading;
        self
    }

    #[must_use]
    pub fn with_plus_sign(mut self, allow: bool) -> Self {
        self.allow_plus_sign = allow;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests;
