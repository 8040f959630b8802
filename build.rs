//! Build script for msds-check.
//!
//! Stamps version information from git and the toolchain into the binary.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    if let Some(hash) = command_output("git", &["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=MSDS_CHECK_GIT_HASH={}", hash);
    }

    if let Some(date) = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) {
        println!("cargo:rustc-env=MSDS_CHECK_BUILD_DATE={}", date);
    }

    // "rustc 1.75.0 (..." -> "1.75.0"
    if let Some(version) = command_output("rustc", &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
    {
        println!("cargo:rustc-env=MSDS_CHECK_RUSTC_VERSION={}", version);
    }
}

/// Trimmed stdout of a command, if it ran successfully
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
