//! Captures build metadata for the footer.
//!
//! Exposes BUILD_HOST, BUILD_COMMIT, and BUILD_TIMESTAMP as compile-time
//! environment variables.

use std::process::Command;

fn run(cmd: &str, args: &[&str]) -> String {
    Command::new(cmd)
        .args(args)
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=BUILD_HOST={}", run("hostname", &["-s"]));
    println!(
        "cargo:rustc-env=BUILD_COMMIT={}",
        run("git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        run("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
    );

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
