//! CLI integration tests.
//!
//! Tests for argument parsing and command handling.

use crate::mocks::*;
use clap::Parser;
use msds_check::cli::args::{Cli, Command, OutputFormat};
use msds_check::commands::{self, parse_products};
use msds_check::MsdsError;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["msds-check"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_version_command() {
    assert_eq!(parse(&["version"]).command, Command::Version);
}

#[test]
fn test_rules_command_with_field() {
    assert_eq!(
        parse(&["rules", "--field", "cas_number"]).command,
        Command::Rules {
            field: Some("cas_number".to_string())
        }
    );
}

#[test]
fn test_check_with_baseline() {
    let cli = parse(&["check", "now.json", "--baseline", "before.json", "--format", "junit"]);
    assert_eq!(cli.format, OutputFormat::Junit);
    assert_eq!(
        cli.command,
        Command::Check {
            file: PathBuf::from("now.json"),
            strict: false,
            baseline: Some(PathBuf::from("before.json")),
        }
    );
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = parse(&["--verbose", "--no-color", "--config", "limits.toml", "lookup", "64-17-5"]);
    assert!(cli.verbose);
    assert!(!cli.color_enabled());
    assert_eq!(cli.config, Some(PathBuf::from("limits.toml")));
}

#[test]
fn test_check_missing_file_argument() {
    assert!(Cli::try_parse_from(["msds-check", "check"]).is_err());
}

#[test]
fn test_check_exit_codes() {
    let clean = write_products(&[clean_product()]);
    let warned = write_products(&[hazardous_product()]);
    let failed = write_products(&[clean_product(), overfilled_product()]);
    let cli = parse(&["--no-color", "rules"]);

    let run = |file: &tempfile::NamedTempFile, strict: bool| {
        commands::check::run(&cli, file.path(), strict, None).unwrap().exit_code
    };
    assert_eq!(run(&clean, false), 0);
    assert_eq!(run(&warned, false), 2);
    assert_eq!(run(&warned, true), 1);
    assert_eq!(run(&failed, false), 1);
}

#[test]
fn test_check_with_config_file() {
    // Raising the limit turns the toluene finding off
    let config = write_temp(
        "[[hazards]]\ncas = \"108-88-3\"\nmax_safe_percentage = 80.0\nwarning_text = \"톨루엔\"\n",
        ".toml",
    );
    let input = write_products(&[hazardous_product()]);
    let cli = parse(&["--format", "json", "--config", config.path().to_str().unwrap(), "rules"]);

    let out = commands::check::run(&cli, input.path(), false, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    let issues = value["products"][0]["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["id"], "2-hazard-threshold");
}

#[test]
fn test_invalid_config_is_a_runtime_error() {
    let config = write_temp("[limits]\nhigh_concentration = 150.0\n", ".toml");
    let input = write_products(&[clean_product()]);
    let cli = parse(&["--config", config.path().to_str().unwrap(), "rules"]);

    let err = commands::check::run(&cli, input.path(), false, None).unwrap_err();
    assert!(matches!(err, MsdsError::Config(_)));
}

#[test]
fn test_malformed_input_is_a_runtime_error() {
    let input = write_temp("{\"ingredients\": []}", ".json");
    let cli = parse(&["rules"]);
    let err = commands::check::run(&cli, input.path(), false, None).unwrap_err();
    assert!(matches!(err, MsdsError::Json { .. }));
}

#[test]
fn test_fix_command_round_trip() {
    let input = write_products(&[fixable_product()]);
    let cli = parse(&["rules"]);

    let out = commands::fix::run(&cli, input.path(), None).unwrap();
    let fixed = parse_products(&out.text, "stdout").unwrap();
    assert_eq!(fixed.len(), 1);
    assert_eq!(fixed[0].ingredients[0].name, "정제수");

    let again = write_temp(&out.text, ".json");
    let out = commands::check::run(&cli, again.path(), true, None).unwrap();
    assert_eq!(out.exit_code, 0);
}

#[test]
fn test_lookup_command() {
    let cli = parse(&["--format", "json", "rules"]);
    let out = commands::lookup::run(&cli, "108-88-3").unwrap();
    assert_eq!(out.exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
    assert_eq!(value["name"], "톨루엔");
    assert_eq!(value["hazard"]["max_safe_percentage"], 10.0);

    let out = commands::lookup::run(&cli, "108-88-4").unwrap();
    assert_eq!(out.exit_code, 1);
}

fn run_binary(args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_msds-check"))
        .args(args)
        .env_remove("MSDS_CHECK_FORMAT")
        .env_remove("MSDS_CHECK_CONFIG")
        .output()
        .unwrap()
}

#[test]
fn test_usage_error_exits_with_runtime_code() {
    let input = write_products(&[clean_product()]);
    let out = run_binary(&["check", "--bogus", input.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--bogus"));

    assert_eq!(run_binary(&["explode"]).status.code(), Some(3));
}

#[test]
fn test_help_and_version_flags_exit_cleanly() {
    let out = run_binary(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("check"));

    assert_eq!(run_binary(&["--version"]).status.code(), Some(0));
}

#[test]
fn test_binary_exit_codes_stay_distinct() {
    let warned = write_products(&[hazardous_product()]);
    let out = run_binary(&["--no-color", "check", warned.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));

    let missing = run_binary(&["check", "no-such-file.json"]);
    assert_eq!(missing.status.code(), Some(3));
}
