//! Batch run: fetch, extract, write, validate
//!
//! Committing is left to the caller so it can be skipped, and so that a git
//! failure cannot turn a good run into a failed one.

use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::extractors::extract_items_with;
use crate::fetch::fetch_html;
use crate::store::write_dataset;
use crate::validator::validate_file;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_file: PathBuf,
    pub item_count: usize,
}

/// Fetch the configured page and process it.
///
/// A fetch failure returns before anything is written.
pub fn run(config: &Config) -> Result<RunSummary, ScrapeError> {
    let html = fetch_html(config)?;
    process_html(config, &html)
}

/// Extract items from `html`, replace the dataset file, then validate the
/// file as written.
pub fn process_html(config: &Config, html: &str) -> Result<RunSummary, ScrapeError> {
    let items = extract_items_with(html, &config.table_selector)?;

    let output_file = config.output_file();
    write_dataset(&output_file, &items)?;

    info!("Running validation");
    let item_count = validate_file(&output_file)?;
    info!("Validation passed: {} items", item_count);

    Ok(RunSummary {
        output_file,
        item_count,
    })
}
