//! Character cursor over an in-memory source buffer.
//!
//! The cursor walks the buffer one Unicode scalar at a time and remembers
//! the width of the last character it consumed, so a scanner state can
//! read one character too far and hand it back with [`Cursor::unread`].
//! Offsets are byte offsets, stored as `u32` like `lexa_ir::Span`
//! positions downstream.
//!
//! Bulk skips (comment bodies, string contents) use `memchr` and clear the
//! unread slot: only a single [`Cursor::bump`] can be undone.

/// Character cursor with one character of pushback.
///
/// The cursor is [`Copy`], so callers can snapshot it before speculative
/// lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: u32,
    /// Byte width of the character consumed by the last `bump`, or 0 when
    /// there is nothing to unread.
    last_width: u32,
}

/// Longest source a cursor can address. Positions are `u32` byte offsets.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Cursor should stay within three machine words.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// Only the first [`MAX_SOURCE_LEN`] bytes of `source` are addressable;
    /// anything past that (rounded down to a character boundary) is cut off.
    pub fn new(source: &'a str) -> Self {
        Self {
            source: clamp_to_char_boundary(source, MAX_SOURCE_LEN),
            pos: 0,
            last_width: 0,
        }
    }

    /// The character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one position past the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// The character `n` positions past the current one (`peek_nth(0)` is
    /// [`current`](Self::current)).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume and return the current character.
    ///
    /// Returns `None` at EOF; the cursor does not move and the unread slot
    /// is cleared.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        match self.current() {
            Some(c) => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "len_utf8() is at most 4"
                )]
                let width = c.len_utf8() as u32;
                self.pos += width;
                self.last_width = width;
                Some(c)
            }
            None => {
                self.last_width = 0;
                None
            }
        }
    }

    /// Consume the current character only if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Step back over the character consumed by the last [`bump`](Self::bump).
    ///
    /// At most one character can be unread; a second call without an
    /// intervening `bump` does nothing.
    #[inline]
    pub fn unread(&mut self) {
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    /// Advance over `n` bytes of ASCII text already inspected via
    /// [`rest`](Self::rest).
    #[inline]
    pub fn advance_ascii(&mut self, n: u32) {
        debug_assert!(
            self.rest().as_bytes()[..n as usize].is_ascii(),
            "advance_ascii over non-ASCII text"
        );
        self.pos += n;
        self.last_width = 0;
    }

    /// Consume characters while `pred` holds.
    ///
    /// Implemented as bump-then-unread: the first rejected character is
    /// read and handed back, so the cursor stops on it.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.bump() {
            if !pred(c) {
                self.unread();
                break;
            }
        }
        self.last_width = 0;
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source is clamped to MAX_SOURCE_LEN bytes in new()"
    )]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// Extract a source substring.
    ///
    /// `start..end` must lie on character boundaries, which holds for any
    /// pair of positions previously returned by [`pos`](Self::pos).
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Byte at `offset`, if in bounds. Used for ASCII checks behind the cursor.
    #[inline]
    pub fn byte_at(&self, offset: u32) -> Option<u8> {
        self.source.as_bytes().get(offset as usize).copied()
    }

    /// Advance to the next `\n` byte or EOF using a SIMD-accelerated search.
    ///
    /// The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len(),
        }
        self.last_width = 0;
    }

    /// Advance to the next `quote` or `\` byte and return it, or return
    /// `None` and move to EOF if neither occurs.
    ///
    /// The found byte is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn skip_to_quote_or_escape(&mut self, quote: u8) -> Option<u8> {
        debug_assert!(quote.is_ascii(), "quote must be ASCII");
        self.last_width = 0;
        let rest = self.rest().as_bytes();
        if let Some(offset) = memchr::memchr2(quote, b'\\', rest) {
            self.pos += offset as u32;
            Some(rest[offset])
        } else {
            self.pos = self.source_len();
            None
        }
    }

    /// Advance past the next occurrence of `needle`, returning `true`, or
    /// move to EOF and return `false` if it never occurs.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_through(&mut self, needle: &str) -> bool {
        self.last_width = 0;
        if let Some(offset) = memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            self.pos += (offset + needle.len()) as u32;
            true
        } else {
            self.pos = self.source_len();
            false
        }
    }
}

/// Longest prefix of `source` that fits in `limit` bytes and ends on a
/// character boundary.
fn clamp_to_char_boundary(source: &str, limit: usize) -> &str {
    if source.len() <= limit {
        return source;
    }
    let mut end = limit;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

#[cfg(test)]
mod tests;
