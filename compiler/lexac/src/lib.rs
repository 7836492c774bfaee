//! Lexa command-line driver.
//!
//! Glue between the filesystem, the scanner and the terminal: read a file,
//! scan it, print the tokens, render the errors.

pub mod config;
pub mod input;
pub mod problem;

use std::io::{self, Write};
use std::sync::Once;

use lexa_diagnostic::emitter::DiagnosticEmitter;
use lexa_diagnostic::Diagnostic;
use lexa_lexer::LexOutput;

pub use problem::render_lex_error;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Write one `<value, KIND>` line per token.
pub fn print_tokens(output: &LexOutput, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", output.tokens)?;
    out.flush()
}

/// Render every scan error through `emitter`, followed by a summary.
pub fn report_errors(output: &LexOutput, emitter: &mut impl DiagnosticEmitter) {
    let diagnostics: Vec<Diagnostic> = output.errors.iter().map(render_lex_error).collect();
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}
