//! Token types produced by the scanner.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Span;

/// A classified lexeme with its span in the source.
///
/// `value` is the exact text consumed to produce the token and is never
/// empty. Equality and hashing look at `value` and `kind` only, so a token
/// compares equal to the same lexeme found at a different offset.
#[derive(Clone)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(value: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        let value = value.into();
        debug_assert!(!value.is_empty(), "token value must not be empty");
        Token { value, kind, span }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.value, self.span)
    }
}

/// Renders as `<value, KIND>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.value, self.kind)
    }
}
