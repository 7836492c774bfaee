//! Bracket nesting validator.
//!
//! A LIFO stack of open brackets and the offsets they were seen at. The
//! scanner feeds it every `(`, `{`, `[` and their closers; it answers with
//! [`LexError`]s for closers that do not pair and, at end of input, for
//! openers that were never closed.

use lexa_ir::Span;

use crate::LexError;

/// The three bracket families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` `)`
    Paren,
    /// `{` `}`
    Brace,
    /// `[` `]`
    Square,
}

impl Bracket {
    /// Bracket opened by `c`, if `c` is an opening bracket.
    pub fn from_open(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Paren),
            '{' => Some(Bracket::Brace),
            '[' => Some(Bracket::Square),
            _ => None,
        }
    }

    /// Bracket closed by `c`, if `c` is a closing bracket.
    pub fn from_close(c: char) -> Option<Bracket> {
        match c {
            ')' => Some(Bracket::Paren),
            '}' => Some(Bracket::Brace),
            ']' => Some(Bracket::Square),
            _ => None,
        }
    }

    pub const fn open_char(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Brace => '{',
            Bracket::Square => '[',
        }
    }

    pub const fn close_char(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Brace => '}',
            Bracket::Square => ']',
        }
    }
}

/// An open bracket awaiting its closer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BracketEntry {
    pub symbol: Bracket,
    /// Byte offset of the opening character.
    pub position: u32,
}

/// Stack-based nesting checker. One per scan.
#[derive(Clone, Debug, Default)]
pub struct BracketValidator {
    stack: Vec<BracketEntry>,
}

impl BracketValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an opening bracket.
    pub fn on_open(&mut self, symbol: Bracket, position: u32) {
        self.stack.push(BracketEntry { symbol, position });
    }

    /// Record a closing bracket.
    ///
    /// With nothing open, reports an unmatched closer and leaves the stack
    /// alone. Otherwise the innermost entry is popped; if it belongs to a
    /// different family a mismatch is reported for it.
    pub fn on_close(&mut self, symbol: Bracket, position: u32) -> Option<LexError> {
        let span = Span::at(position);
        let Some(top) = self.stack.pop() else {
            return Some(LexError::unmatched_closing(span, symbol.close_char()));
        };
        if top.symbol == symbol {
            None
        } else {
            Some(LexError::mismatched_bracket(
                span,
                top.symbol.open_char(),
                top.position,
                symbol.close_char(),
            ))
        }
    }

    /// Drain the stack, reporting every bracket still open, innermost first.
    pub fn finalize(&mut self) -> Vec<LexError> {
        let mut errors = Vec::with_capacity(self.stack.len());
        while let Some(entry) = self.stack.pop() {
            errors.push(LexError::unmatched_opening(
                Span::at(entry.position),
                entry.symbol.open_char(),
            ));
        }
        errors
    }
}
