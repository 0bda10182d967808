//! Build script for pathcanon-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathcanon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize paths, including ones that do not exist yet")
        .long_about(
            "Convert paths to canonical absolute form. When only a prefix of a path exists, \
             that prefix is resolved through the filesystem and the rest is collapsed syntactically.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from FILE instead of ~/.pathcanon/config.yaml")
                .value_name("FILE")
                .global(true)
                .env("PATHCANON_CONFIG"),
        )
        .subcommands(vec![
            Command::new("canonicalize")
                .about("Print the canonical absolute form of each path")
                .long_about(
                    "Resolve each path through the filesystem, falling back to the longest \
                     existing prefix when the path does not exist in full",
                ),
            Command::new("collapse")
                .about("Collapse paths syntactically without touching the filesystem")
                .long_about("Remove duplicate separators, '.' and cancellable '..' names"),
            Command::new("limits")
                .about("Show the length limits in effect for a directory")
                .long_about("Display the overall path limit and the component limit"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathcanon configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathcanon.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
