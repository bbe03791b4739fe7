use argsift_cli::cli_args::Args;
use argsift_cli::render::{render, Options};
use argsift_cli::setup::Provider;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

fn run(argv: &[&str]) -> String {
    let args = Args::parse_from(argv);
    let parser = args.get_parser().unwrap();
    let store = parser.parse(&args.tokens);
    let options = Options {
        format: args.format,
        explain: args.explain,
        styled: false,
    };
    render(&store, &args.queries, options).unwrap()
}

fn profile_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{contents}").unwrap();
    temp_file
}

#[test]
fn test_unregistered_option_is_a_flag() {
    let profile = profile_file("{}");
    let path = profile.path().to_str().unwrap();

    let output = run(&["asift", "-c", path, "--", "prog", "-j", "4"]);
    assert_eq!(output, "Flags:\n\tj\nParams:\nPositionals:\n\t[0] 4\n");
}

#[test]
fn test_registered_option_takes_value() {
    let profile = profile_file("{}");
    let path = profile.path().to_str().unwrap();

    let output = run(&["asift", "-c", path, "-r", "-j", "--", "prog", "-j", "4"]);
    assert_eq!(output, "Flags:\nParams:\n\tj = \"4\"\nPositionals:\n");
}

#[test]
fn test_profile_registration_and_get() {
    let profile = profile_file("registered: [threads]\n");
    let path = profile.path().to_str().unwrap();

    let output = run(&[
        "asift", "-c", path, "-g", "threads", "--", "prog", "--threads", "8", "--threads", "2",
    ]);
    assert_eq!(output, "8\n2\n");
}

#[test]
fn test_command_line_switches_override_profile() {
    let profile = profile_file("split_on_equals: true\n");
    let path = profile.path().to_str().unwrap();

    let output = run(&[
        "asift",
        "-c",
        path,
        "--no-split-on-equals",
        "--multiflag",
        "--",
        "prog",
        "--out=x",
        "-ab",
    ]);
    assert_eq!(output, "Flags:\n\tout=x\n\ta\n\tb\nParams:\nPositionals:\n");
}

#[test]
fn test_explain_yaml() {
    let profile = profile_file("{}");
    let path = profile.path().to_str().unwrap();

    let output = run(&[
        "asift", "-c", path, "-e", "-f", "yaml", "--", "prog", "--verbose", "file",
    ]);
    assert!(output.contains("flags:\n- verbose\n"));
    assert!(output.contains("kind: positional"));
}

#[test]
fn test_missing_explicit_profile_is_an_error() {
    let args = Args::parse_from(["asift", "-c", "/nonexistent/argsift/profile.yml"]);
    assert!(args.get_parser().is_err());
}
