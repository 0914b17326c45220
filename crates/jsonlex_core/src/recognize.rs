//! Per-construct recognizers: keywords, numbers, strings, whitespace.
//!
//! Each recognizer starts at the cursor's current byte and either consumes
//! one complete construct and returns success, or returns failure. On failure
//! the cursor position is unspecified; the caller holds the token start and
//! discards the attempt.

use crate::cursor::Cursor;
use crate::options::WhitespaceSet;
use crate::tag::TokenKind;

const KEYWORDS: [TokenKind; 3] = [TokenKind::Null, TokenKind::True, TokenKind::False];

/// Recognize `null`, `true` or `false`.
///
/// Only the exact byte sequence matches; whatever follows the keyword is
/// left for the next token.
pub(crate) fn keyword(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    for kind in KEYWORDS {
        let Some(text) = kind.lexeme() else { continue };
        if cursor.starts_with(text.as_bytes()) {
            cursor.advance_n(text.len());
            return Some(kind);
        }
    }
    None
}

/// Consume a run of whitespace. Returns `false` if the current byte is not
/// whitespace.
pub(crate) fn whitespace(cursor: &mut Cursor<'_>, set: WhitespaceSet) -> bool {
    if cursor.is_eof() || !set.matches(cursor.current()) {
        return false;
    }
    cursor.eat_while(|b| set.matches(b));
    true
}

// ─── Numbers ─────────────────────────────────────────────────────

/// Recognize `[sign] int-part [fraction] [exponent]`.
///
/// The integer part is either a lone `0` or a non-zero digit followed by
/// digits, so `01` stops after the `0`. A `.` must be followed by at least
/// one digit and an exponent marker must be followed (after an optional sign)
/// by at least one digit; otherwise the whole number fails.
pub(crate) fn number(cursor: &mut Cursor<'_>, allow_plus_sign: bool) -> bool {
    match cursor.current() {
        b'-' => cursor.advance(),
        b'+' if allow_plus_sign => cursor.advance(),
        _ => {}
    }

    match cursor.current() {
        b'0' => cursor.advance(),
        b'1'..=b'9' => {
            cursor.eat_digits();
        }
        _ => return false,
    }

    if cursor.current() == b'.' {
        cursor.advance();
        if cursor.eat_digits() == 0 {
            return false;
        }
    }

    if matches!(cursor.current(), b'e' | b'E') {
        cursor.advance();
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        if cursor.eat_digits() == 0 {
            return false;
        }
    }

    true
}

// ─── Strings ─────────────────────────────────────────────────────

/// Recognize a string literal starting at the opening `"`.
///
/// Escape syntax is validated but nothing is decoded. Raw control bytes
/// (`0x00..=0x1F`) and end of input before the closing quote fail the
/// attempt.
pub(crate) fn string(cursor: &mut Cursor<'_>) -> bool {
    debug_assert_eq!(cursor.current(), b'"', "string must start at a quote");
    cursor.advance(); // consume opening '"'
    loop {
        match cursor.skip_to_string_delim() {
            b'"' => {
                cursor.advance(); // consume closing '"'
                return true;
            }
            b'\\' => {
                cursor.advance(); // consume '\'
                if !escape(cursor) {
                    return false;
                }
            }
            // Raw control byte, interior NUL, or EOF.
            _ => return false,
        }
    }
}

/// Validate and consume the escape body after a backslash.
fn escape(cursor: &mut Cursor<'_>) -> bool {
    match cursor.current() {
        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
            cursor.advance();
            true
        }
        b'u' => {
            cursor.advance();
            match cursor.rest().get(..4) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => {
                    cursor.advance_n(4);
                    true
                }
                _ => false,
            }
        }
        _ => false,
    }
}
