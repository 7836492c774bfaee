//! Finite-state scanner.
//!
//! One pass over the source, driven by [`ScanState`]. Every state method
//! consumes its token (or error run) and returns the next state, which is
//! always [`ScanState::Start`] once something has been emitted. `Start`
//! skips whitespace, reads one character and picks the state that owns it.
//!
//! A state that reads one character too far hands it back with
//! [`Cursor::unread`], so `Start` sees it again.

use lexa_ir::{Span, Token, TokenKind, TokenList};
use lexa_lexer_core::literal::{
    classify_number, is_digit_or_separator, is_hex_literal, is_literal_run_char,
    is_octal_literal, NumericShape,
};
use lexa_lexer_core::Cursor;
use tracing::trace;

use crate::brackets::{Bracket, BracketValidator};
use crate::{keywords, LexError, LexOutput};

/// Scanner state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Between tokens. Initial state, and the state after every token.
    Start,
    Number,
    String,
    Char,
    LineComment,
    BlockComment,
    Identifier,
    Operator,
    /// Inside a run of characters no token can start with.
    Error,
}

/// Compound operators, longest first so the first prefix hit is the
/// maximal munch.
const COMPOUND_OPERATORS: [&str; 21] = [
    "<<=", ">>=", "++", "--", "->", "+=", "-=", "*=", "/=", "%=", "==", "!=", "<=", ">=", "&&",
    "||", "<<", ">>", "&=", "|=", "^=",
];

/// Working state of one scan. Never outlives the [`scan`](crate::scan) call
/// that created it.
pub(crate) struct ScanContext<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    /// Offset of the first byte of the lexeme being built.
    lexeme_start: u32,
    brackets: BracketValidator,
    tokens: TokenList,
    errors: Vec<LexError>,
}

impl<'a> ScanContext<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: ScanState::Start,
            lexeme_start: 0,
            brackets: BracketValidator::new(),
            // Rough guess: one token per five bytes of C-like source.
            tokens: TokenList::with_capacity(source.len() / 5 + 1),
            errors: Vec::new(),
        }
    }

    /// Drive the machine to end of input.
    pub(crate) fn run(mut self) -> LexOutput {
        loop {
            self.state = match self.state {
                ScanState::Start => match self.start() {
                    Some(next) => next,
                    None => break,
                },
                ScanState::Number => self.number(),
                ScanState::String => self.quoted(b'"', TokenKind::String),
                ScanState::Char => self.quoted(b'\'', TokenKind::Char),
                ScanState::LineComment => self.line_comment(),
                ScanState::BlockComment => self.block_comment(),
                ScanState::Identifier => self.identifier(),
                ScanState::Operator => self.operator(),
                ScanState::Error => self.error_run(),
            };
        }
        self.errors.extend(self.brackets.finalize());
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Skip whitespace and dispatch on the next character.
    ///
    /// Returns `None` at end of input.
    fn start(&mut self) -> Option<ScanState> {
        self.cursor.eat_while(is_whitespace);
        self.lexeme_start = self.cursor.pos();
        let c = self.cursor.bump()?;
        let next = match c {
            '0'..='9' => ScanState::Number,
            '"' => ScanState::String,
            '\'' => ScanState::Char,
            '/' if self.cursor.eat('/') => ScanState::LineComment,
            '/' if self.cursor.eat('*') => ScanState::BlockComment,
            c if is_delimiter(c) => {
                self.delimiter(c);
                ScanState::Start
            }
            c if is_ident_start(c) => ScanState::Identifier,
            c if is_operator_char(c) => {
                // Operator matching works from the lexeme start.
                self.cursor.unread();
                ScanState::Operator
            }
            _ => ScanState::Error,
        };
        Some(next)
    }

    fn delimiter(&mut self, c: char) {
        self.emit(TokenKind::Delimiter);
        let pos = self.lexeme_start;
        if let Some(open) = Bracket::from_open(c) {
            self.brackets.on_open(open, pos);
        } else if let Some(close) = Bracket::from_close(c) {
            if let Some(err) = self.brackets.on_close(close, pos) {
                trace!(%err, "bracket error");
                self.errors.push(err);
            }
        }
    }

    /// Numeric literal. The first digit has been consumed.
    fn number(&mut self) -> ScanState {
        if self.cursor.byte_at(self.lexeme_start) == Some(b'0') {
            match self.cursor.current() {
                Some('x' | 'X') => return self.radix_literal(NumericShape::Hex),
                Some(c) if c.is_ascii_digit() => return self.radix_literal(NumericShape::Octal),
                _ => {}
            }
        }
        self.decimal_literal()
    }

    /// Hex or octal literal, validated as a whole over the literal run.
    fn radix_literal(&mut self, shape: NumericShape) -> ScanState {
        self.cursor.eat_while(is_literal_run_char);
        let span = Span::new(self.lexeme_start, self.cursor.pos());
        let text = self.cursor.slice_from(self.lexeme_start);
        let (valid, kind) = match shape {
            NumericShape::Hex => (is_hex_literal(text), TokenKind::HexNumber),
            _ => (is_octal_literal(text), TokenKind::OctalNumber),
        };
        if valid {
            self.emit(kind);
        } else {
            let err = match shape {
                NumericShape::Hex => LexError::invalid_hex_literal(span, text),
                _ => LexError::invalid_octal_literal(span, text),
            };
            trace!(%err, "invalid literal");
            self.errors.push(err);
            self.emit(TokenKind::Invalid);
        }
        ScanState::Start
    }

    /// Decimal or float literal. Stops at the first character that cannot
    /// continue it.
    fn decimal_literal(&mut self) -> ScanState {
        self.cursor.eat_while(is_digit_or_separator);
        if self.cursor.eat('.') {
            self.cursor.eat_while(is_digit_or_separator);
        }
        if matches!(self.cursor.current(), Some('e' | 'E')) {
            let digit_at = if matches!(self.cursor.peek(), Some('+' | '-')) {
                2
            } else {
                1
            };
            if self
                .cursor
                .peek_nth(digit_at)
                .is_some_and(|c| c.is_ascii_digit())
            {
                for _ in 0..digit_at {
                    self.cursor.bump();
                }
                self.cursor.eat_while(is_digit_or_separator);
            }
        }
        let kind = match self.cursor.current() {
            Some('f' | 'F') => {
                self.cursor.bump();
                TokenKind::FloatNumber
            }
            Some('l' | 'L') => {
                self.cursor.bump();
                TokenKind::Number
            }
            _ => TokenKind::Number,
        };
        debug_assert_eq!(
            classify_number(self.cursor.slice_from(self.lexeme_start)),
            Some(if kind == TokenKind::FloatNumber {
                NumericShape::Float
            } else {
                NumericShape::Decimal
            }),
            "scanner and classifier disagree"
        );
        self.emit(kind);
        ScanState::Start
    }

    /// String or char literal. The opening quote has been consumed.
    fn quoted(&mut self, quote: u8, kind: TokenKind) -> ScanState {
        loop {
            match self.cursor.skip_to_quote_or_escape(quote) {
                Some(b'\\') => {
                    self.cursor.advance_ascii(1);
                    // Escaped character, whatever it is.
                    self.cursor.bump();
                }
                Some(_) => {
                    self.cursor.advance_ascii(1);
                    self.emit(kind);
                    return ScanState::Start;
                }
                None => {
                    let span = Span::at(self.lexeme_start);
                    let err = if kind == TokenKind::Char {
                        LexError::unterminated_char(span)
                    } else {
                        LexError::unterminated_string(span)
                    };
                    trace!(%err, "unterminated literal");
                    self.errors.push(err);
                    return ScanState::Start;
                }
            }
        }
    }

    /// `//` comment. The newline (and a `\r` before it) stays outside.
    fn line_comment(&mut self) -> ScanState {
        self.cursor.eat_until_newline_or_eof();
        let mut end = self.cursor.pos();
        if end > self.lexeme_start + 2 && self.cursor.byte_at(end - 1) == Some(b'\r') {
            end -= 1;
        }
        self.emit_until(TokenKind::LineComment, end);
        ScanState::Start
    }

    /// `/* */` comment. Does not nest.
    fn block_comment(&mut self) -> ScanState {
        if self.cursor.eat_through("*/") {
            self.emit(TokenKind::BlockComment);
        } else {
            let err =
                LexError::unterminated_comment(Span::new(self.lexeme_start, self.lexeme_start + 2));
            trace!(%err, "unterminated comment");
            self.errors.push(err);
        }
        ScanState::Start
    }

    fn identifier(&mut self) -> ScanState {
        self.cursor.eat_while(is_ident_continue);
        let kind = keywords::classify(self.cursor.slice_from(self.lexeme_start));
        self.emit(kind);
        ScanState::Start
    }

    /// Operator by maximal munch. The cursor sits on the first character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "operators are at most 3 bytes"
    )]
    fn operator(&mut self) -> ScanState {
        let rest = self.cursor.rest();
        let len = COMPOUND_OPERATORS
            .iter()
            .find(|op| rest.starts_with(**op))
            .map_or(1, |op| op.len());
        self.cursor.advance_ascii(len as u32);
        self.emit(TokenKind::Operator);
        ScanState::Start
    }

    /// Unrecognized characters. The first one has been consumed; the run
    /// extends to the next whitespace or token start.
    fn error_run(&mut self) -> ScanState {
        self.cursor.eat_while(|c| !can_start_token(c));
        let span = Span::new(self.lexeme_start, self.cursor.pos());
        let text = self.cursor.slice_from(self.lexeme_start);
        let err = LexError::unrecognized_token(span, text);
        trace!(%err, "unrecognized input");
        self.errors.push(err);
        self.emit(TokenKind::Invalid);
        ScanState::Start
    }

    #[inline]
    fn emit(&mut self, kind: TokenKind) {
        self.emit_until(kind, self.cursor.pos());
    }

    fn emit_until(&mut self, kind: TokenKind, end: u32) {
        let value = self.cursor.slice(self.lexeme_start, end);
        trace!(?kind, value, start = self.lexeme_start, "token");
        self.tokens
            .push(Token::new(value, kind, Span::new(self.lexeme_start, end)));
    }
}

/// Space, tab, CR, LF, vertical tab and form feed.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '?' | ':' | '.'
    )
}

#[inline]
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',')
}

/// Returns `true` if `c` ends an unrecognized run: whitespace, or any
/// character `Start` would hand to a state other than `Error`.
pub fn can_start_token(c: char) -> bool {
    is_whitespace(c)
        || c.is_ascii_digit()
        || c == '"'
        || c == '\''
        || is_delimiter(c)
        || is_ident_start(c)
        || is_operator_char(c)
}
