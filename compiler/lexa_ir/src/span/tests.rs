use super::*;

#[test]
fn test_span_at_covers_one_byte() {
    assert_eq!(Span::at(7), Span::new(7, 8));
}

#[test]
fn test_span_default_is_empty_at_origin() {
    assert_eq!(Span::default(), Span::new(0, 0));
}

#[test]
fn test_span_display_and_debug() {
    let span = Span::new(2, 5);
    assert_eq!(span.to_string(), "2..5");
    assert_eq!(format!("{span:?}"), "2..5");
}
