//! Low-level building blocks for the Lexa scanner.
//!
//! - [`Cursor`]: a character cursor over an in-memory buffer with
//!   peek / advance / unread-by-one, used to express pushback explicitly.
//! - [`literal`]: pure functions that decide whether a complete lexeme is a
//!   well-formed hexadecimal, octal, decimal, or floating-point literal.

mod cursor;
pub mod literal;

pub use cursor::{Cursor, MAX_SOURCE_LEN};
pub use literal::{classify_number, NumericShape};
