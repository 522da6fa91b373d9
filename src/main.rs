// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use anyhow::Result;

fn run() -> Result<()> {
    let config = range_sums::cli::load_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    range_sums::app::run(&config, &mut out)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
