//! Error codes for scanner diagnostics.
//!
//! Each code is a unique identifier (e.g. `E0001`). The second digit groups
//! codes by source: `E00xx` for literal and character errors, `E01xx` for
//! bracket nesting.

use std::fmt;

/// Error codes for all scanner diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Literal and Character Errors (E00xx)
    /// Unterminated string literal
    E0001,
    /// Unrecognized character or token
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated character literal
    E0004,
    /// Unterminated block comment
    E0005,

    // Bracket Errors (E01xx)
    /// Mismatched closing bracket
    E0101,
    /// Unmatched closing bracket
    E0102,
    /// Unmatched opening bracket
    E0103,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0103 => "E0103",
        }
    }

    /// Short explanation of the code, used as the default diagnostic
    /// message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unrecognized character or token",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unterminated character literal",
            ErrorCode::E0005 => "unterminated block comment",
            ErrorCode::E0101 => "mismatched closing bracket",
            ErrorCode::E0102 => "unmatched closing bracket",
            ErrorCode::E0103 => "unmatched opening bracket",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
