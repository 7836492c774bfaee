//! Lexa IR - shared token types
//!
//! This crate contains the data structures produced by the scanner:
//! - Spans for source locations
//! - Tokens, their closed set of kinds, and `TokenList` for scanner output
//!
//! It has no dependencies so that printers, test harnesses and downstream
//! parsers can consume a token stream without pulling in the scanner.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
