//! Byte cursor over a borrowed input buffer.
//!
//! The cursor advances through the input byte-by-byte. Reads at or past the
//! end of input return `0x00`, so recognizers can look ahead without bounds
//! checks of their own. Because JSON input may legally contain a raw `0x00`
//! byte (which is then rejected as a control character or an unknown token
//! start), a `0x00` return value is ambiguous; use [`Cursor::is_eof`] to tell
//! the two apart.
//!
//! Unlike a sentinel-terminated buffer, the input is never copied: every
//! slice handed out by the cursor is a view into the caller's bytes.

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine the `memchr` search for string delimiters with the
/// separate search for control bytes.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over an immutable byte buffer.
///
/// The cursor is [`Copy`], so a recognizer can take a snapshot before a
/// speculative attempt and restore it when the attempt fails.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// The complete input buffer.
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }


    /// Advance the cursor by one byte.
    ///
    /// Never moves past the end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, clamped to the end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Move the cursor to the end of input.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.buf.len();
    }

    /// Returns `true` if every input byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Extract the input bytes from `start` to the current position.
    ///
    /// `start` must be a position previously reported by
    /// [`pos()`](Self::pos).
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(
            start <= self.pos,
            "slice start {start} exceeds position {}",
            self.pos
        );
        &self.buf[start..self.pos]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.buf.len() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance while the current byte is an ASCII digit.
    ///
    /// Returns the number of digits consumed.
    #[inline]
    pub fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        self.eat_while(|b| b.is_ascii_digit());
        self.pos - start
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes inside a JSON string are `"`, `\` and every
    /// control byte in `0x00..=0x1F`. The delimiters are located with
    /// `memchr2`; control bytes are rare, so the region before the delimiter
    /// is checked with a plain scan. A returned `0` is an interior NUL when
    /// [`is_eof()`](Self::is_eof) is still `false`.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.rest();
        let delim = memchr::memchr2(b'"', b'\\', remaining);
        let searched = delim.map_or(remaining, |off| &remaining[..off]);
        let control = searched.iter().position(|&b| b < 0x20);

        if let Some(off) = earliest_of(delim, control) {
            self.pos += off;
            self.buf[self.pos]
        } else {
            self.pos = self.buf.len();
            0
        }
    }
}

#[cfg(test)]
mod tests;
