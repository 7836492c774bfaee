//! Lexical error values.
//!
//! Every problem the scanner finds is recovered locally and collected as a
//! [`LexError`]: a `span` saying where, a [`LexErrorKind`] saying what. The
//! `lexac` driver turns these into rendered diagnostics; the core never
//! panics or aborts on malformed input.

use std::fmt;

use lexa_ir::Span;

/// A lexer error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Where the error occurred.
    pub span: Span,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Unterminated Regions ===
    /// Missing closing `"` for a string literal.
    UnterminatedString,
    /// Missing closing `'` for a char literal.
    UnterminatedChar,
    /// Missing closing `*/` for a block comment.
    UnterminatedComment,

    // === Character Errors ===
    /// A run of characters that cannot start any token.
    UnrecognizedToken { text: String },

    // === Numeric Errors ===
    /// A `0x` literal run with a non-hex character or no digits.
    InvalidHexLiteral { text: String },
    /// A `0`-prefixed literal run with a digit outside `0-7`.
    InvalidOctalLiteral { text: String },

    // === Bracket Errors ===
    /// A closing bracket that does not pair with the innermost open one.
    MismatchedBracket {
        expected_open: char,
        open_pos: u32,
        found_close: char,
    },
    /// A closing bracket with nothing open.
    UnmatchedClosing { symbol: char },
    /// An opening bracket still open at end of input.
    UnmatchedOpening { symbol: char },
}

impl LexError {
    /// Create an unterminated string error spanning the opening quote.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create an unterminated char error spanning the opening quote.
    #[cold]
    pub fn unterminated_char(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedChar,
        }
    }

    /// Create an unterminated block comment error spanning the `/*`.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    #[cold]
    pub fn unrecognized_token(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnrecognizedToken { text: text.into() },
        }
    }

    #[cold]
    pub fn invalid_hex_literal(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidHexLiteral { text: text.into() },
        }
    }

    #[cold]
    pub fn invalid_octal_literal(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidOctalLiteral { text: text.into() },
        }
    }

    /// Create a mismatched bracket error. `span` locates the closer.
    #[cold]
    pub fn mismatched_bracket(
        span: Span,
        expected_open: char,
        open_pos: u32,
        found_close: char,
    ) -> Self {
        Self {
            span,
            kind: LexErrorKind::MismatchedBracket {
                expected_open,
                open_pos,
                found_close,
            },
        }
    }

    #[cold]
    pub fn unmatched_closing(span: Span, symbol: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnmatchedClosing { symbol },
        }
    }

    #[cold]
    pub fn unmatched_opening(span: Span, symbol: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnmatchedOpening { symbol },
        }
    }

    /// Byte offset the error is reported at.
    #[inline]
    pub fn position(&self) -> u32 {
        self.span.start
    }

}

impl LexErrorKind {
    /// An actionable fix, if there is an obvious one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => Some("add a closing `\"`"),
            LexErrorKind::UnterminatedChar => Some("add a closing `'`"),
            LexErrorKind::UnterminatedComment => Some("add a closing `*/`"),
            LexErrorKind::InvalidHexLiteral { .. } => {
                Some("hex literals use digits 0-9, a-f and A-F after `0x`")
            }
            LexErrorKind::InvalidOctalLiteral { .. } => {
                Some("octal literals use digits 0-7 after the leading `0`")
            }
            LexErrorKind::MismatchedBracket { .. } | LexErrorKind::UnmatchedOpening { .. } => {
                None
            }
            LexErrorKind::UnmatchedClosing { .. } => Some("remove this bracket"),
            LexErrorKind::UnrecognizedToken { .. } => None,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedChar => write!(f, "unterminated character literal"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnrecognizedToken { text } => write!(f, "unrecognized token '{text}'"),
            LexErrorKind::InvalidHexLiteral { text } => {
                write!(f, "invalid hexadecimal literal '{text}'")
            }
            LexErrorKind::InvalidOctalLiteral { text } => write!(f, "invalid octal literal '{text}'"),
            LexErrorKind::MismatchedBracket {
                expected_open,
                open_pos,
                found_close,
            } => write!(
                f,
                "mismatched closing bracket '{found_close}' for '{expected_open}' opened at position {open_pos}"
            ),
            LexErrorKind::UnmatchedClosing { symbol } => {
                write!(f, "unmatched closing bracket '{symbol}'")
            }
            LexErrorKind::UnmatchedOpening { symbol } => {
                write!(f, "unmatched opening bracket '{symbol}'")
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at position {}: {}", self.position(), self.kind)
    }
}

impl std::error::Error for LexError {}
