//! Validate a sizes dataset file. Exits 0 when valid, 2 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use sizes_scraper::config::{resolve_path, DEFAULT_OUTPUT_PATH};
use sizes_scraper::error::EXIT_VALIDATION;
use sizes_scraper::validate_file;

#[derive(Debug, Parser)]
#[command(name = "validate_sizes", about = "Check a sizes.json dataset before committing it")]
struct Args {
    /// Dataset file, relative to the repository root unless absolute
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    path: PathBuf,

    /// Repository root
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let path = resolve_path(&args.repo_root, &args.path);
    match validate_file(&path) {
        Ok(count) => {
            info!("Validation passed: {} items", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(EXIT_VALIDATION as u8)
        }
    }
}
