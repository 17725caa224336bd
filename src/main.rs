// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use count_loc::args::Args;
use count_loc::config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match count_loc::app::run(&config) {
        Ok(report) => {
            for (path, err) in &report.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            if let Err(err) = count_loc::output::emit(&report, &config) {
                eprintln!("Output Error: {err:#}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Application Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
