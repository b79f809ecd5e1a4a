//! Integration tests for CLI argument handling
//!
//! Tests the snapshot flags and time validation from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skycard"))
        .args(args)
        .output()
        .expect("Failed to execute skycard")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycard"), "Help should mention skycard");
    assert!(
        stdout.contains("snapshot"),
        "Help should mention --snapshot flag"
    );
    assert!(
        stdout.contains("expanded"),
        "Help should mention --expanded flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_invalid_sunrise_prints_error_and_exits() {
    let output = run_cli(&["--sunrise", "sometime"]);
    assert!(
        !output.status.success(),
        "Expected invalid sunrise to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid time"),
        "Should print error message about the invalid time: {}",
        stderr
    );
}

#[test]
fn test_missing_snapshot_file_prints_error_and_exits() {
    let output = run_cli(&["--snapshot", "/nonexistent/snapshot.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("snapshot"),
        "Should mention the snapshot file: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use skycard::cli::{parse_time_arg, Cli, StartupConfig};

    #[test]
    fn test_cli_no_args_uses_no_snapshot_file() {
        let cli = Cli::parse_from(["skycard"]);
        assert!(cli.snapshot.is_none());
    }

    #[test]
    fn test_cli_override_flags_parse() {
        let cli = Cli::parse_from(["skycard", "--sunrise", "05:01", "--low", "-3.5"]);
        assert_eq!(cli.sunrise.as_deref(), Some("05:01"));
        assert_eq!(cli.low, Some(-3.5));
    }

    #[test]
    fn test_cli_negative_value_with_equals_syntax() {
        let cli = Cli::parse_from(["skycard", "--low=-3.5"]);
        assert_eq!(cli.low, Some(-3.5));
    }

    #[test]
    fn test_parse_time_arg_accepts_valid_time() {
        assert!(parse_time_arg("06:12").is_ok());
    }

    #[test]
    fn test_parse_time_arg_rejects_invalid_time() {
        assert!(parse_time_arg("25:99").is_err());
    }

    #[test]
    fn test_startup_config_from_cli_expanded() {
        let cli = Cli::parse_from(["skycard", "--expanded"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.start_expanded);
    }

    #[test]
    fn test_startup_config_from_cli_invalid_time() {
        let cli = Cli::parse_from(["skycard", "--sunset", "dusk"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
