use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source_has_nothing_to_read() {
    let mut cursor = Cursor::new("");
    assert!(cursor.rest().is_empty());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn bump_and_peek() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!(cursor.peek_nth(2), None);
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.bump(), Some('b'));
    assert!(cursor.rest().is_empty());
}

#[test]
fn unread_restores_last_char() {
    let mut cursor = Cursor::new("xy");
    cursor.bump();
    cursor.bump();
    cursor.unread();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), Some('y'));
}

#[test]
fn unread_is_single_level() {
    let mut cursor = Cursor::new("xyz");
    cursor.bump();
    cursor.bump();
    cursor.unread();
    cursor.unread();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn unread_multibyte_char() {
    let mut cursor = Cursor::new("λx");
    assert_eq!(cursor.bump(), Some('λ'));
    assert_eq!(cursor.pos(), 2);
    cursor.unread();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), Some('λ'));
}

#[test]
fn unread_after_eof_bump_is_noop() {
    let mut cursor = Cursor::new("a");
    cursor.bump();
    assert_eq!(cursor.bump(), None);
    cursor.unread();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn eat_consumes_only_expected() {
    let mut cursor = Cursor::new("/*");
    assert!(cursor.eat('/'));
    assert!(!cursor.eat('/'));
    assert!(cursor.eat('*'));
    assert!(cursor.rest().is_empty());
}

#[test]
fn eat_while_stops_on_rejected_char() {
    let mut cursor = Cursor::new("abc123 rest");
    cursor.eat_while(char::is_alphanumeric);
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), Some(' '));
    assert_eq!(cursor.slice_from(0), "abc123");
}

#[test]
fn eat_while_runs_to_eof() {
    let mut cursor = Cursor::new("12345");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert!(cursor.rest().is_empty());
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// hi\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_until_newline_without_newline_hits_eof() {
    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.rest().is_empty());
}

#[test]
fn skip_to_quote_or_escape_finds_nearest() {
    let mut cursor = Cursor::new("ab\\\"c\"");
    assert_eq!(cursor.skip_to_quote_or_escape(b'"'), Some(b'\\'));
    assert_eq!(cursor.pos(), 2);
    cursor.advance_ascii(2);
    assert_eq!(cursor.skip_to_quote_or_escape(b'"'), Some(b'"'));
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_quote_or_escape_missing_moves_to_eof() {
    let mut cursor = Cursor::new("no closing");
    assert_eq!(cursor.skip_to_quote_or_escape(b'\''), None);
    assert!(cursor.rest().is_empty());
}

#[test]
fn eat_through_consumes_needle() {
    let mut cursor = Cursor::new(" body */ after");
    assert!(cursor.eat_through("*/"));
    assert_eq!(cursor.rest(), " after");

    let mut cursor = Cursor::new(" body * /");
    assert!(!cursor.eat_through("*/"));
    assert!(cursor.rest().is_empty());
}

#[test]
fn byte_at_and_slice() {
    let cursor = Cursor::new("a\r\n");
    assert_eq!(cursor.byte_at(1), Some(b'\r'));
    assert_eq!(cursor.byte_at(3), None);
    assert_eq!(cursor.slice(0, 1), "a");
    assert_eq!(cursor.source_len(), 3);
}

#[test]
fn clamp_keeps_short_sources_whole() {
    assert_eq!(clamp_to_char_boundary("abc", 3), "abc");
    assert_eq!(clamp_to_char_boundary("abc", 10), "abc");
}

#[test]
fn clamp_cuts_at_char_boundary() {
    assert_eq!(clamp_to_char_boundary("abc", 2), "ab");
    // 'λ' occupies bytes 1..3, so a two-byte limit cannot keep any of it.
    assert_eq!(clamp_to_char_boundary("aλb", 2), "a");
    assert_eq!(clamp_to_char_boundary("aλb", 3), "aλ");
}

mod proptest_cursor {
    use super::super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bump_walks_every_char(source in "\\PC{0,64}") {
            let mut cursor = Cursor::new(&source);
            let mut seen = String::new();
            while let Some(c) = cursor.bump() {
                seen.push(c);
            }
            prop_assert_eq!(seen, source.clone());
            prop_assert!(cursor.rest().is_empty());
        }

        #[test]
        fn bump_then_unread_is_identity(source in "\\PC{1,32}", steps in 0usize..32) {
            let mut cursor = Cursor::new(&source);
            for _ in 0..steps {
                cursor.bump();
            }
            let before = cursor.pos();
            if cursor.bump().is_some() {
                cursor.unread();
            }
            prop_assert_eq!(cursor.pos(), before);
        }
    }
}
