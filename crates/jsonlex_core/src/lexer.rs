//! Streaming JSON lexer.
//!
//! [`Lexer`] walks its input once, left to right, and yields one [`Token`]
//! per call to [`Iterator::next`]. Emitted tokens are contiguous: every byte
//! of consumed input belongs to exactly one token, so concatenating token
//! values reproduces the input.
//!
//! # Design
//!
//! The lexer is an explicit state machine. `State` records what the document
//! grammar allows at the current position (a value, a key, a colon, a
//! separator or closing bracket, or nothing more), and a container stack
//! records the open arrays and objects. Each `next()` call dispatches on the
//! state, recognizes one token, and moves to the following state.
//!
//! The first byte that cannot continue the document starts an `Illegal`
//! token that runs to the end of input. After it, the iterator is exhausted.
//! When input ends while the document is incomplete (an open container, a
//! dangling key, a missing value), a zero-length `Illegal` token is emitted
//! at the end of input.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::options::{LeadingWhitespace, LexerOptions};
use crate::recognize;
use crate::tag::{Span, Token, TokenKind};

/// Open container on the nesting stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Container {
    Array,
    Object,
}

/// Grammar position of the lexer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet; the leading-whitespace rule still applies.
    Start,
    /// A value is required.
    Value,
    /// Just after `[`: a value or `]`.
    ArrayFirst,
    /// Just after `{`: a string key or `}`.
    ObjectFirst,
    /// After `,` in an object: a string key.
    Key,
    /// After an object key: `:`.
    Colon,
    /// A value just completed: `,` or the closing bracket of the innermost
    /// container, or end of input at top level.
    AfterValue,
    /// Lexing finished; no more tokens.
    Done,
}

/// Single-pass JSON lexer over a borrowed byte buffer.
///
/// # Example
///
/// ```
/// use jsonlex_core::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new(b"[1,]").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::ArrayStart,
///         TokenKind::Number,
///         TokenKind::Comma,
///         TokenKind::Illegal,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// Start offset of the token being assembled.
    start: usize,
    options: LexerOptions,
    state: State,
    stack: SmallVec<[Container; 16]>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with default options.
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    /// Create a lexer with the given options.
    pub fn with_options(input: &'a [u8], options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            start: 0,
            options,
            state: State::Start,
            stack: SmallVec::new(),
        }
    }

    /// Byte offset up to which input has been consumed.
    ///
    /// Once the lexer is exhausted, anything past this offset was left
    /// untouched (leading whitespace under `LeadingWhitespace::Halt`).
    pub fn position(&self) -> usize {
        self.start
    }

    // ─── Emission ────────────────────────────────────────────────

    fn emit(&mut self, kind: TokenKind) -> Token<'a> {
        let end = self.cursor.pos();
        let token = Token {
            kind,
            span: Span::new(self.start, end),
            value: self.cursor.slice_from(self.start),
        };
        self.start = end;
        trace!(kind = kind.name(), start = token.span.start, end, "token");
        token
    }

    /// Emit everything from the token start to end of input as `Illegal`
    /// and stop.
    fn illegal(&mut self) -> Token<'a> {
        self.cursor.advance_to_end();
        self.state = State::Done;
        self.stack.clear();
        debug!(
            offset = self.start,
            len = self.cursor.pos() - self.start,
            "illegal input"
        );
        self.emit(TokenKind::Illegal)
    }

    /// Finish the current token as `kind` and move to `next`.
    fn accept(&mut self, kind: TokenKind, next: State) -> Token<'a> {
        self.state = next;
        self.emit(kind)
    }

    // ─── Structure ───────────────────────────────────────────────

    fn open(&mut self, container: Container) -> Token<'a> {
        if self
            .options
            .max_depth
            .is_some_and(|max| self.stack.len() >= max)
        {
            return self.illegal();
        }
        self.stack.push(container);
        self.cursor.advance();
        match container {
            Container::Array => self.accept(TokenKind::ArrayStart, State::ArrayFirst),
            Container::Object => self.accept(TokenKind::ObjectStart, State::ObjectFirst),
        }
    }

    fn close(&mut self) -> Token<'a> {
        let kind = match self.stack.pop() {
            Some(Container::Array) => TokenKind::ArrayStop,
            Some(Container::Object) => TokenKind::ObjectStop,
            None => return self.illegal(),
        };
        self.cursor.advance();
        self.accept(kind, State::AfterValue)
    }

    // ─── Values ──────────────────────────────────────────────────

    fn value(&mut self) -> Token<'a> {
        match self.cursor.current() {
            b'[' => self.open(Container::Array),
            b'{' => self.open(Container::Object),
            b'"' => self.string(State::AfterValue),
            b'-' | b'+' | b'0'..=b'9' => {
                if recognize::number(&mut self.cursor, self.options.allow_plus_sign) {
                    self.accept(TokenKind::Number, State::AfterValue)
                } else {
                    self.illegal()
                }
            }
            _ => match recognize::keyword(&mut self.cursor) {
                Some(kind) => self.accept(kind, State::AfterValue),
                None => self.illegal(),
            },
        }
    }

    fn string(&mut self, next: State) -> Token<'a> {
        if recognize::string(&mut self.cursor) {
            self.accept(TokenKind::String, next)
        } else {
            self.illegal()
        }
    }

    fn key(&mut self) -> Token<'a> {
        if self.cursor.current() == b'"' {
            self.string(State::Colon)
        } else {
            self.illegal()
        }
    }

    /// Handle the byte after a completed value.
    fn after_value(&mut self) -> Token<'a> {
        let innermost = self.stack.last().copied();
        match (innermost, self.cursor.current()) {
            (Some(Container::Array), b',') => {
                self.cursor.advance();
                self.accept(TokenKind::Comma, State::Value)
            }
            (Some(Container::Object), b',') => {
                self.cursor.advance();
                self.accept(TokenKind::Comma, State::Key)
            }
            (Some(Container::Array), b']') | (Some(Container::Object), b'}') => self.close(),
            _ => self.illegal(),
        }
    }

    // ─── Dispatch ────────────────────────────────────────────────

    /// Produce the next token for any state other than `Start` and `Done`.
    fn step(&mut self) -> Option<Token<'a>> {
        if recognize::whitespace(&mut self.cursor, self.options.whitespace) {
            return Some(self.emit(TokenKind::Whitespace));
        }

        if self.cursor.is_eof() {
            if self.state == State::AfterValue && self.stack.is_empty() {
                self.state = State::Done;
                return None;
            }
            return Some(self.illegal());
        }

        let token = match self.state {
            State::Value => self.value(),
            State::ArrayFirst if self.cursor.current() == b']' => self.close(),
            State::ArrayFirst => self.value(),
            State::ObjectFirst if self.cursor.current() == b'}' => self.close(),
            State::ObjectFirst | State::Key => self.key(),
            State::Colon if self.cursor.current() == b':' => {
                self.cursor.advance();
                self.accept(TokenKind::Colon, State::Value)
            }
            State::Colon => self.illegal(),
            State::AfterValue => self.after_value(),
            State::Start | State::Done => return None,
        };
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        match self.state {
            State::Done => None,
            State::Start => {
                let first = self.cursor.current();
                let halt = self.cursor.is_eof()
                    || (self.options.leading_whitespace == LeadingWhitespace::Halt
                        && self.options.whitespace.matches(first));
                if halt {
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Value;
                self.step()
            }
            _ => self.step(),
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex `input` with default options and collect every token.
pub fn lex(input: &[u8]) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Lex `input` with `options` and collect every token.
pub fn lex_with(input: &[u8], options: LexerOptions) -> Vec<Token<'_>> {
    Lexer::with_options(input, options).collect()
}
