//! Readable CLI
//!
//! Commands:
//! - bps: parse and convert a bit rate
//! - time: parse, validate and convert a duration
//! - serve: JSON line protocol over stdin/stdout
//!
//! Logs go to stderr; `RUST_LOG` controls the level (default `warn`).

mod args;
mod request;
mod serve;

use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};
use request::{handle, Domain, Request};
use serve::{serve, Response};

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_once(request: Request, json: bool) -> ExitCode {
    let result = handle(&request);
    let failed = result.is_err();

    if json {
        match Response::from(result).to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        match result {
            Ok(conversion) => println!("{}", conversion.render()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Bps(args) => run_once(args.to_request(Domain::Bps), args.json),
        Command::Time(args) => run_once(args.to_request(), args.convert.json),
        Command::Serve => match serve(io::stdin().lock(), io::stdout().lock()) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
