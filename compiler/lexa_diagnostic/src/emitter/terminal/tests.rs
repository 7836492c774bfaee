use super::*;
use crate::ErrorCode;
use lexa_ir::Span;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0101)
        .with_message("mismatched closing bracket ']' for '(' opened at position 0")
        .with_label(Span::new(4, 5), "expected `)`")
        .with_secondary_label(Span::new(0, 1), "opened here")
        .with_note("brackets close in reverse order of opening")
        .with_suggestion("replace `]` with `)`")
}

fn render(mut emitter: TerminalEmitter<&mut Vec<u8>>, diag: &Diagnostic) {
    emitter.emit(diag);
    emitter.flush();
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut output = Vec::new();
    render(
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false),
        &sample_diagnostic(),
    );

    let text = String::from_utf8_lossy(&output);
    assert_eq!(
        text,
        "error[E0101]: mismatched closing bracket ']' for '(' opened at position 0\n\
         \x20 --> 4..5: expected `)`\n\
         \x20     0..1: opened here\n\
         \x20 = note: brackets close in reverse order of opening\n\
         \x20 = help: replace `]` with `)`\n\
         \n"
    );
}

#[test]
fn test_with_source_renders_line_col() {
    let source = "f(a,\n  b]";
    let mut output = Vec::new();
    let diag = Diagnostic::error(ErrorCode::E0101)
        .with_message("mismatch")
        .with_label(Span::new(8, 9), "here")
        .with_secondary_label(Span::new(1, 2), "opened");
    render(
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_source("input.c", source),
        &diag,
    );

    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--> input.c:2:4: here"), "{text}");
    assert!(text.contains("input.c:1:2: opened"), "{text}");
}

#[test]
fn test_with_color_mode_always() {
    let mut output = Vec::new();
    render(
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false),
        &sample_diagnostic(),
    );
    let text = String::from_utf8_lossy(&output);
    // Even without TTY, Always mode produces ANSI codes
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0101"));
}

#[test]
fn test_with_color_mode_auto() {
    let mut output = Vec::new();
    render(
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Auto, true),
        &sample_diagnostic(),
    );
    assert!(String::from_utf8_lossy(&output).contains("\x1b["));

    let mut output = Vec::new();
    render(
        TerminalEmitter::with_color_mode(&mut output, ColorMode::Auto, false),
        &sample_diagnostic(),
    );
    assert!(!String::from_utf8_lossy(&output).contains("\x1b["));
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E0002).with_message("error 2"),
    ];

    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_all(&diagnostics);
        emitter.flush();
    }

    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

fn summary(errors: usize) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_summary(errors);
        emitter.flush();
    }
    String::from_utf8_lossy(&output).into_owned()
}

#[test]
fn test_emit_summary() {
    assert_eq!(summary(1), "error: aborting due to previous error\n");
    assert_eq!(summary(2), "error: aborting due to 2 previous errors\n");
    assert_eq!(summary(0), "");
}

// --- ColorMode Tests ---

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse(" NEVER "), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
