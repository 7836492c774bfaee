use super::*;

/// The full table, sorted.
const RESERVED_WORDS: [&str; 36] = [
    "auto", "break", "case", "char", "class", "const", "continue", "default", "do", "double",
    "else", "enum", "extern", "float", "for", "goto", "if", "int", "long", "private",
    "protected", "public", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
];

#[test]
fn type_keywords() {
    for word in ["int", "float", "long", "double", "char", "void", "short"] {
        assert_eq!(classify(word), TokenKind::ReservedWord, "{word}");
    }
}

#[test]
fn control_flow_keywords() {
    for word in [
        "if", "else", "for", "while", "do", "return", "break", "continue", "switch", "case",
        "default", "goto",
    ] {
        assert_eq!(classify(word), TokenKind::ReservedWord, "{word}");
    }
}

#[test]
fn declaration_keywords() {
    for word in ["class", "public", "private", "protected", "static", "struct", "typedef"] {
        assert_eq!(classify(word), TokenKind::ReservedWord, "{word}");
    }
}

#[test]
fn table_and_lookup_agree() {
    for word in RESERVED_WORDS {
        assert!(is_reserved(word), "{word} is listed but not recognized");
    }
}

#[test]
fn case_sensitive() {
    assert_eq!(classify("Int"), TokenKind::Identifier);
    assert_eq!(classify("WHILE"), TokenKind::Identifier);
}

#[test]
fn identifiers() {
    for word in ["x", "myVar", "myVar123", "_int", "integer", "in", "i", "$tmp", "protecte"] {
        assert_eq!(classify(word), TokenKind::Identifier, "{word}");
    }
}
