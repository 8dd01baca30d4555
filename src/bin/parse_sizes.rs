//! Fetch the sizes page, write `pages/sizes.json`, validate it and commit.
//!
//! Exit codes: 0 on success (git failures included), 1 when the run
//! could not produce a file, 2 when the written file failed validation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use sizes_scraper::{pipeline, vcs, Config, ScrapeError};

#[derive(Debug, Parser)]
#[command(name = "parse_sizes", about = "Scrape the product sizes table into JSON")]
struct Args {
    /// Repository root; output paths and git commands are relative to it
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Config file [default: <REPO_ROOT>/config.json]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source page URL, overrides SIZES_URL from the config file
    #[arg(long, env = "SIZES_URL")]
    url: Option<String>,

    /// Output file, overrides output_path from the config file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write and validate only
    #[arg(long)]
    no_commit: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ScrapeError::Validation(_)) => {
            error!("{}; not committing", e);
            ExitCode::from(e.exit_code() as u8)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(args: &Args) -> Result<(), ScrapeError> {
    let mut config = Config::load(&args.repo_root, args.config.as_deref(), args.url.clone())?;
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }

    let summary = pipeline::run(&config)?;

    if args.no_commit {
        info!("Skipping commit for {}", summary.output_file.display());
    } else {
        vcs::publish_or_warn(&config, &summary.output_file);
    }
    Ok(())
}
