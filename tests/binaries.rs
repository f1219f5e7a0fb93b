use std::process::{Command, Output};

use similar_asserts::assert_eq;

const SVG2PNG: &str = env!("CARGO_BIN_EXE_svg2png");
const SVG2PDF: &str = env!("CARGO_BIN_EXE_svg2pdf");

fn run(exe: &str, args: &[&str]) -> Output {
    Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    for exe in [SVG2PNG, SVG2PDF] {
        let output = run(exe, &[]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!("usage: {} <file.svg>\n", exe)
        );
    }
}

#[test]
fn no_arguments_never_runs_the_renderer() {
    let output = run(SVG2PNG, &["--renderer", "svgexport-no-such-renderer"]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_renderer_fails() {
    let output = run(
        SVG2PDF,
        &["--renderer", "svgexport-no-such-renderer", "drawing.svg"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("svgexport-no-such-renderer"));
}

#[cfg(unix)]
#[test]
fn renderer_exit_code_becomes_ours() {
    for exe in [SVG2PNG, SVG2PDF] {
        let ok = run(exe, &["--renderer", "true", "drawing.svg"]);
        assert_eq!(ok.status.code(), Some(0));
        assert!(ok.stdout.is_empty());

        let failed = run(exe, &["--renderer", "false", "drawing.svg"]);
        assert_eq!(failed.status.code(), Some(1));
    }
}

#[cfg(unix)]
#[test]
fn trailing_arguments_are_ignored() {
    for exe in [SVG2PNG, SVG2PDF] {
        let output = run(
            exe,
            &["--renderer", "true", "drawing.svg", "--foo", "-x", "more.svg"],
        );

        assert_eq!(output.status.code(), Some(0));
    }
}

#[cfg(unix)]
#[test]
fn png_size_flags_are_accepted() {
    let output = run(
        SVG2PNG,
        &["--width", "64", "--height", "32", "--renderer", "true", "a.svg"],
    );

    assert_eq!(output.status.code(), Some(0));
}
