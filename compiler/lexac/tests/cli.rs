//! End-to-end tests of the `lexa` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn lexa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexa"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run lexa")
}

fn lexa_file(dir: &Path, name: &str, contents: &str) -> Output {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    lexa(&[path.to_str().unwrap()])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_arguments_prints_usage() {
    let output = lexa(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage: lexa <file>"));
    assert!(output.stdout.is_empty());
}

#[test]
fn two_arguments_prints_usage() {
    let output = lexa(&["a.c", "b.c"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage: lexa <file>"));
}

#[test]
fn help_goes_to_stdout() {
    let output = lexa(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: lexa <file>"));
}

#[test]
fn version() {
    let output = lexa(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("lexa "));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.c");
    let output = lexa(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn directory_argument() {
    let dir = tempfile::tempdir().unwrap();
    let output = lexa(&[dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is not a regular file"));
}

#[test]
fn valid_file_prints_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let output = lexa_file(dir.path(), "ok.c", "int x = 10;\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "<int, RESERVED_WORD>\n<x, IDENTIFIER>\n<=, OPERATOR>\n<10, NUMBER>\n<;, DELIMITER>\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn lexical_errors_fail_but_still_print_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let output = lexa_file(dir.path(), "bad.c", "x = (0x1G;\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "<x, IDENTIFIER>\n<=, OPERATOR>\n<(, DELIMITER>\n<0x1G, INVALID>\n<;, DELIMITER>\n"
    );

    let err = stderr(&output);
    assert!(err.contains("error[E0003]: invalid hexadecimal literal `0x1G`"), "{err}");
    assert!(err.contains("error[E0103]: unmatched opening bracket `(`"), "{err}");
    assert!(err.contains("bad.c:1:5"), "{err}");
    assert!(!err.contains("\x1b["), "{err}");
    assert!(err.ends_with("error: aborting due to 2 previous errors\n"), "{err}");
}

#[test]
fn empty_file_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let output = lexa_file(dir.path(), "empty.c", "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
