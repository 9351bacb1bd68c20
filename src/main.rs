/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for slater-rs

use clap::Parser;
use slater_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over -v
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = cli::run(&args)?;
    print!("{}", output);

    Ok(())
}
