//! `lexa`: print the token stream of a C-family source file.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use lexa_diagnostic::emitter::TerminalEmitter;
use lexac::config::color_mode_from_env;
use lexac::input::read_source;
use lexac::{init_tracing, print_tokens, report_errors};

/// Exit status for bad command-line usage.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage(&mut io::stdout());
            ExitCode::SUCCESS
        }
        [flag] if flag == "--version" || flag == "-V" => {
            println!("lexa {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        [path] => lex_file(path),
        _ => {
            print_usage(&mut io::stderr());
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn print_usage(out: &mut impl Write) {
    let _ = writeln!(out, "Usage: lexa <file>");
    let _ = writeln!(out);
    let _ = writeln!(out, "Prints one `<value, KIND>` line per token of <file>.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Options:");
    let _ = writeln!(out, "  -h, --help       Print this message");
    let _ = writeln!(out, "  -V, --version    Print the version");
    let _ = writeln!(out);
    let _ = writeln!(out, "Environment:");
    let _ = writeln!(out, "  LEXA_COLOR       auto | always | never (default: auto)");
    let _ = writeln!(out, "  NO_COLOR         disable colored diagnostics");
    let _ = writeln!(out, "  RUST_LOG         tracing filter, e.g. lexa_lexer=trace");
}

/// Scan one file. Exit status is 1 if it could not be read or had errors.
fn lex_file(path: &str) -> ExitCode {
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = lexa_lexer::scan(&source);
    if let Err(e) = print_tokens(&output, &mut io::stdout().lock()) {
        eprintln!("error: cannot write tokens: {e}");
        return ExitCode::FAILURE;
    }

    let mut emitter = TerminalEmitter::stderr(color_mode_from_env(), io::stderr().is_terminal())
        .with_source(path, &source);
    report_errors(&output, &mut emitter);
    if output.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
