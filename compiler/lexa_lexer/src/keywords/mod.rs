//! Reserved-word table.
//!
//! A fixed, case-sensitive set of C-family keywords. Membership is the only
//! question asked: a hit classifies an identifier-shaped lexeme as
//! [`TokenKind::ReservedWord`], a miss as [`TokenKind::Identifier`].
//!
//! The lookup uses the lexeme's length as a first-pass filter (keywords
//! range from 2 to 9 bytes), then matches against the keywords of that
//! length.

use lexa_ir::TokenKind;

/// Classify identifier-shaped text.
#[inline]
pub fn classify(text: &str) -> TokenKind {
    if is_reserved(text) {
        TokenKind::ReservedWord
    } else {
        TokenKind::Identifier
    }
}

/// Returns `true` if `text` is a reserved word.
pub fn is_reserved(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-9 chars and start with ASCII lowercase
    if !(2..=9).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int"),
        4 => matches!(
            text,
            "auto" | "case" | "char" | "else" | "enum" | "goto" | "long" | "void"
        ),
        5 => matches!(
            text,
            "break" | "class" | "const" | "float" | "short" | "union" | "while"
        ),
        6 => matches!(
            text,
            "double"
                | "extern"
                | "public"
                | "return"
                | "signed"
                | "sizeof"
                | "static"
                | "struct"
                | "switch"
        ),
        7 => matches!(text, "default" | "private" | "typedef"),
        8 => matches!(text, "continue" | "register" | "unsigned" | "volatile"),
        9 => text == "protected",
        _ => false,
    }
}

#[cfg(test)]
mod tests;
