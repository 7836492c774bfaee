use std::fmt;

/// Classification of a lexeme.
///
/// Closed set: every token the scanner emits carries exactly one of these.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Decimal integer or unsuffixed decimal with point/exponent: `10`, `123L`, `3.14`
    Number,
    /// `0x1A_FF`
    HexNumber,
    /// `0755`
    OctalNumber,
    /// Decimal literal with an `f`/`F` suffix: `3.14f`, `1e5F`, `2f`
    FloatNumber,
    /// `"text"`, quotes included
    String,
    /// `'c'`, quotes included
    Char,
    /// `// ...` up to (not including) the newline
    LineComment,
    /// `/* ... */`
    BlockComment,
    ReservedWord,
    Identifier,
    Operator,
    /// `( ) { } [ ] ; ,`
    Delimiter,
    /// A run of characters that cannot start any token, or a malformed
    /// hex/octal literal.
    Invalid,
}

impl TokenKind {
    /// Upper-snake name used in rendered output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::HexNumber => "HEX_NUMBER",
            TokenKind::OctalNumber => "OCTAL_NUMBER",
            TokenKind::FloatNumber => "FLOAT_NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
