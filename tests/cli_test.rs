//! End-to-end tests for the `asciiplot` binary.
//!
//! Run: cargo test --test cli_test

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_asciiplot"));
    cmd.args(args).env_remove("RUST_LOG");
    cmd
}

fn asciiplot(args: &[&str], stdin: &str) -> Output {
    asciiplot_bytes(args, stdin.as_bytes())
}

fn asciiplot_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn asciiplot");

    // the child may exit before reading (e.g. --help), so a broken pipe is fine
    let _ = child.stdin.take().expect("stdin is piped").write_all(stdin);

    child.wait_with_output().expect("failed to wait for asciiplot")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone()).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn diagonal_three_points() {
    let output = asciiplot(&["-w", "10", "-l", "10"], "0 0\n10 10\n5 5");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let rows = stdout_lines(&output);
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0], format!("┏{}┓", "━".repeat(11)));
    assert_eq!(rows[1], "┃..........#┃");
    assert_eq!(rows[6], "┃.....#.....┃");
    assert_eq!(rows[11], "┃#..........┃");
    assert_eq!(rows[12], format!("┗{}┛", "━".repeat(11)));
    assert_eq!(rows.concat().matches('#').count(), 3);
}

#[test]
fn max_y_on_top_row() {
    let output = asciiplot(&["-w", "4", "-l", "4"], "0 0\n1 9\n2 3\n");
    let rows = stdout_lines(&output);
    assert_eq!(rows[1], "┃..#..┃");
    assert!(rows[2..rows.len() - 1].iter().all(|r| !r.contains("..#..")));
}

#[test]
fn empty_input_default_size() {
    let output = asciiplot(&[], "");
    assert_eq!(output.status.code(), Some(0));

    let rows = stdout_lines(&output);
    assert_eq!(rows.len(), 27);
    for row in &rows[1..26] {
        assert_eq!(row, &format!("┃{}┃", ".".repeat(81)));
    }
}

#[test]
fn malformed_line_exits_1() {
    let output = asciiplot(&[], "1 2 3");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected exactly two values per row"));
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn invalid_x_exits_1() {
    let output = asciiplot(&[], "a 2");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid x-coordinate 'a'"));
}

#[test]
fn invalid_y_after_good_lines_produces_no_grid() {
    let output = asciiplot(&[], "1 1\n2 2\n3 z\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("line 3: invalid y-coordinate 'z'"));
}

#[test]
fn constant_axis_does_not_crash() {
    let output = asciiplot(&["-w", "4", "-l", "2"], "7 1\n7 2\n");
    assert!(output.status.success());
    let rows = stdout_lines(&output);
    assert_eq!(rows[1], "┃..#..┃");
    assert_eq!(rows[3], "┃..#..┃");
}

#[test]
fn ascii_theme() {
    let output = asciiplot(
        &["-w", "2", "-l", "0", "--border", "ascii", "--empty", " ", "--marker", "*"],
        "0 0\n2 0\n",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "+---+\n|* *|\n+---+\n");
}

#[test]
fn help_exits_0_and_shows_example() {
    let output = asciiplot(&["--help"], "");
    assert_eq!(output.status.code(), Some(0));
    let help = String::from_utf8(output.stdout).unwrap();
    assert!(help.contains("coordinates from stdin"));
    assert!(help.contains("5.1 -3"));
    assert!(help.contains("-w"));
    assert!(help.contains("-l"));
}

#[test]
fn unknown_flag_fails() {
    let output = asciiplot(&["--bogus"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn bad_width_fails() {
    let output = asciiplot(&["-w", "wide"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("wide"));
}

#[test]
fn invalid_utf8_reports_its_line() {
    let output = asciiplot_bytes(&[], b"1 2\n3 4\n\xff 2\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3: invalid x-coordinate"));
    assert_eq!(stderr.lines().count(), 1);
}

#[cfg(unix)]
#[test]
fn unreadable_stdin_prints_one_diagnostic() {
    // reading a directory fails with EISDIR
    let dir = std::fs::File::open("/").unwrap();
    let output = command(&[])
        .stdin(Stdio::from(dir))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert_eq!(stderr.matches("I/O error").count(), 1);
    assert!(stderr.starts_with("error: I/O error: "));
}

#[test]
fn oversized_dimensions_rejected() {
    let output = asciiplot(&["-w", "65535", "-l", "65535"], "0 0\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("65535"));
}

#[test]
fn largest_dimensions_accepted() {
    let output = asciiplot(&["-w", "10000", "-l", "2"], "0 0\n1 1\n");
    assert!(output.status.success());

    let rows = stdout_lines(&output);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1].chars().count(), 10_003);
    assert!(rows[1].ends_with("#┃"));
}
