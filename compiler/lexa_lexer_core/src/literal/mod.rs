//! Numeric literal shapes.
//!
//! Pure predicates over a complete lexeme. The scanner uses them to accept
//! or reject a hex/octal literal run as a whole, and they double as the
//! reference grammar the scanner's decimal path is tested against.
//!
//! # Grammar
//!
//! ```text
//! hex      = ("0x" | "0X") [0-9A-Fa-f_]* hexdigit [0-9A-Fa-f_]* [lL]?
//! octal    = "0" [0-7] [0-7_]*           (a "0" followed by any digit)
//! decimal  = body [lL]?
//! float    = body [fF]
//! body     = digit [0-9_]* ("." [0-9_]*)? (("e" | "E") ("+" | "-")? digit [0-9_]*)?
//! ```
//!
//! A decimal or float body never starts with `0` followed by a digit: that
//! prefix always selects the octal shape.

/// Which numeric shape a lexeme has.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericShape {
    Decimal,
    Hex,
    Octal,
    Float,
}

/// Classify a complete numeric lexeme.
///
/// Shapes are tried in the order hex, octal, float, decimal; the first
/// match wins. Returns `None` if the lexeme has none of them.
pub fn classify_number(text: &str) -> Option<NumericShape> {
    if is_hex_literal(text) {
        Some(NumericShape::Hex)
    } else if is_octal_literal(text) {
        Some(NumericShape::Octal)
    } else if is_float_literal(text) {
        Some(NumericShape::Float)
    } else if is_decimal_literal(text) {
        Some(NumericShape::Decimal)
    } else {
        None
    }
}

/// `0x1A_FF`, `0XffL`.
pub fn is_hex_literal(text: &str) -> bool {
    let Some(rest) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    else {
        return false;
    };
    let digits = rest
        .strip_suffix(['l', 'L'])
        .unwrap_or(rest);
    digits.bytes().any(|b| b.is_ascii_hexdigit())
        && digits.bytes().all(|b| b.is_ascii_hexdigit() || b == b'_')
}

/// `0755`, `0_7`, `00`.
pub fn is_octal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2
        && bytes[0] == b'0'
        && bytes[1].is_ascii_digit()
        && bytes[1..].iter().all(|&b| is_octal_digit(b) || b == b'_')
}

/// `10`, `1_000`, `123L`, `3.14`, `6.02e23`.
pub fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    match decimal_body_len(bytes) {
        Some(len) if len == bytes.len() => true,
        Some(len) => len + 1 == bytes.len() && matches!(bytes[len], b'l' | b'L'),
        None => false,
    }
}

/// `3.14f`, `1e5F`, `2f`.
pub fn is_float_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    match decimal_body_len(bytes) {
        Some(len) => len + 1 == bytes.len() && matches!(bytes[len], b'f' | b'F'),
        None => false,
    }
}

/// Bytes that can appear anywhere in a numeric literal run. Hex and octal
/// literals are validated over the maximal run of these.
#[inline]
pub fn is_literal_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

#[inline]
pub fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub fn is_digit_or_separator(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

/// Length of the longest prefix of `bytes` matching `body`.
fn decimal_body_len(bytes: &[u8]) -> Option<usize> {
    let first = *bytes.first()?;
    if !first.is_ascii_digit() {
        return None;
    }
    if first == b'0' && bytes.get(1).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    let eat_digits = |mut i: usize| {
        while bytes
            .get(i)
            .is_some_and(|&b| b.is_ascii_digit() || b == b'_')
        {
            i += 1;
        }
        i
    };

    let mut end = eat_digits(1);
    if bytes.get(end) == Some(&b'.') {
        end = eat_digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            end = eat_digits(exp + 1);
        }
    }
    Some(end)
}

#[cfg(test)]
mod tests;
