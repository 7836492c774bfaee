//! Rendering of scanner errors as diagnostics.

use lexa_diagnostic::{Diagnostic, ErrorCode};
use lexa_ir::Span;
use lexa_lexer::{Bracket, LexError, LexErrorKind};

/// Render a `LexError` into a `Diagnostic` with error code, message,
/// labels and suggestions.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let span = err.span;
    let diag = match &err.kind {
        LexErrorKind::UnterminatedString => {
            Diagnostic::error(ErrorCode::E0001).with_label(span, "string starts here")
        }

        LexErrorKind::UnterminatedChar => {
            Diagnostic::error(ErrorCode::E0004).with_label(span, "character literal starts here")
        }

        LexErrorKind::UnterminatedComment => {
            Diagnostic::error(ErrorCode::E0005).with_label(span, "comment starts here")
        }

        LexErrorKind::UnrecognizedToken { text } => Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("unrecognized token `{text}`"))
            .with_label(span, "no token starts with this"),

        LexErrorKind::InvalidHexLiteral { text } => Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("invalid hexadecimal literal `{text}`"))
            .with_label(span, "not a valid hex literal"),

        LexErrorKind::InvalidOctalLiteral { text } => Diagnostic::error(ErrorCode::E0003)
            .with_message(format!("invalid octal literal `{text}`"))
            .with_label(span, "not a valid octal literal")
            .with_note("a literal starting with `0` followed by a digit is octal"),

        LexErrorKind::MismatchedBracket {
            expected_open,
            open_pos,
            found_close,
        } => {
            let expected_close =
                Bracket::from_open(*expected_open).map_or(*expected_open, Bracket::close_char);
            Diagnostic::error(ErrorCode::E0101)
                .with_message(with_symbol(ErrorCode::E0101, *found_close))
                .with_label(span, format!("expected `{expected_close}`"))
                .with_secondary_label(Span::at(*open_pos), format!("`{expected_open}` opened here"))
                .with_suggestion(format!("replace `{found_close}` with `{expected_close}`"))
        }

        LexErrorKind::UnmatchedClosing { symbol } => Diagnostic::error(ErrorCode::E0102)
            .with_message(with_symbol(ErrorCode::E0102, *symbol))
            .with_label(span, "no open bracket to close"),

        LexErrorKind::UnmatchedOpening { symbol } => Diagnostic::error(ErrorCode::E0103)
            .with_message(with_symbol(ErrorCode::E0103, *symbol))
            .with_label(span, "never closed"),
    };

    match err.kind.help() {
        Some(help) => diag.with_suggestion(help),
        None => diag,
    }
}

/// The code's description followed by the offending bracket, e.g.
/// "unmatched opening bracket `(`".
fn with_symbol(code: ErrorCode, symbol: char) -> String {
    format!("{} `{symbol}`", code.description())
}
