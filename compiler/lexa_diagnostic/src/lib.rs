//! Diagnostic system for lexical error reporting.
//!
//! Every reported problem carries:
//! - an error code for searchability
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - context labels and notes (why)
//! - suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
