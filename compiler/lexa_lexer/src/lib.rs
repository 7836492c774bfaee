//! Finite-state scanner for C-family source text.
//!
//! [`scan`] turns a complete in-memory buffer into a [`TokenList`] plus the
//! [`LexError`]s found along the way. Errors never stop the scan: bad input
//! becomes an `INVALID` token or is dropped, and scanning resumes.
//!
//! Each call owns its scan state, so independent buffers can be scanned
//! concurrently; [`scan_batch`] does exactly that on the rayon pool.

mod brackets;
pub mod keywords;
mod lex_error;
mod scanner;

use lexa_ir::TokenList;
use rayon::prelude::*;

pub use brackets::{Bracket, BracketEntry, BracketValidator};
pub use lexa_lexer_core::MAX_SOURCE_LEN;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::ScanState;

use scanner::ScanContext;

/// Tokens and errors from one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Errors in the order they were found; unclosed brackets come last.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` from start to end.
///
/// Positions are `u32` byte offsets, so only the first [`MAX_SOURCE_LEN`]
/// bytes of `source` are scanned. Callers reading untrusted input should
/// reject anything longer before scanning.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> LexOutput {
    if source.len() > MAX_SOURCE_LEN {
        tracing::warn!(
            len = source.len(),
            max = MAX_SOURCE_LEN,
            "source exceeds addressable length; scanning a prefix"
        );
    }
    let output = ScanContext::new(source).run();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}

/// Scan independent buffers in parallel. Results keep the input order.
pub fn scan_batch<S: AsRef<str> + Sync>(sources: &[S]) -> Vec<LexOutput> {
    if sources.len() <= 1 {
        sources.iter().map(|s| scan(s.as_ref())).collect()
    } else {
        sources.par_iter().map(|s| scan(s.as_ref())).collect()
    }
}
