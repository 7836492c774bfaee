use super::*;

#[test]
fn hex_shapes() {
    for text in ["0x1F", "0x1A_FF", "0XffL", "0xdeadbeefl", "0x_1"] {
        assert!(is_hex_literal(text), "{text} should be hex");
    }
    for text in ["0x", "0x_", "0xL", "0x1G", "1x1", "0x1.5", "0x1LL"] {
        assert!(!is_hex_literal(text), "{text} should not be hex");
    }
}

#[test]
fn octal_shapes() {
    for text in ["0123", "0755", "00", "07_7"] {
        assert!(is_octal_literal(text), "{text} should be octal");
    }
    for text in ["0", "0_7", "08", "0129", "123", "0755L", "07.5"] {
        assert!(!is_octal_literal(text), "{text} should not be octal");
    }
}

#[test]
fn decimal_shapes() {
    for text in [
        "0", "10", "1_000", "123L", "123l", "3.14", "1.", "6.02e23", "1e-5", "2E+10", "0.5",
        "0_7",
    ] {
        assert!(is_decimal_literal(text), "{text} should be decimal");
    }
    for text in ["", "a1", "1.2.3", "1e", "1e+", "123a", "3.14f", "08", "1LL"] {
        assert!(!is_decimal_literal(text), "{text} should not be decimal");
    }
}

#[test]
fn float_shapes() {
    for text in ["3.14f", "3.14F", "2f", "1e5f", "1.e3F", "1_0.5f"] {
        assert!(is_float_literal(text), "{text} should be float");
    }
    for text in ["3.14", "f", "1ff", "08f", "1.5fL"] {
        assert!(!is_float_literal(text), "{text} should not be float");
    }
}

#[test]
fn classify_follows_hex_octal_float_decimal_order() {
    assert_eq!(classify_number("0x1A_FF"), Some(NumericShape::Hex));
    assert_eq!(classify_number("0123"), Some(NumericShape::Octal));
    assert_eq!(classify_number("3.14f"), Some(NumericShape::Float));
    assert_eq!(classify_number("123L"), Some(NumericShape::Decimal));
    assert_eq!(classify_number("3.14"), Some(NumericShape::Decimal));
    assert_eq!(classify_number("0"), Some(NumericShape::Decimal));
    assert_eq!(classify_number("0x"), None);
    assert_eq!(classify_number("09"), None);
}

#[test]
fn run_chars() {
    assert!(is_literal_run_char('a'));
    assert!(is_literal_run_char('_'));
    assert!(is_literal_run_char('.'));
    assert!(!is_literal_run_char('+'));
    assert!(!is_literal_run_char('é'));
}
