//! vosh CLI entry point.
//!
//! Usage:
//!   vosh              # Interactive console
//!   vosh --help       # Usage
//!   vosh --version    # Version

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            vosh_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("vosh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'vosh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"vosh v{}, an in-memory multi-user shell

Usage:
  vosh              Interactive console
  vosh -h, --help   Show this help
  vosh -V, --version  Show version

Log in as one of the seeded users (admin/admin123, user/user123), then type
'help' for the commands your account may run. Files created with 'notepad'
live in memory until written out with 'save'."#,
        env!("CARGO_PKG_VERSION")
    );
}
