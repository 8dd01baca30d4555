//! Product sizes scraper
//!
//! Fetches a page holding a table of product dimensions and weights and
//! turns it into a JSON dataset:
//! - Table extraction from the marker table (scraper)
//! - Tolerant `W x H x D` dimension parsing
//! - Structural validation of the written file, used as a commit gate
//! - Optional git commit/push of the result

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod pipeline;
pub mod store;
pub mod validator;
pub mod vcs;

pub use config::Config;
pub use error::{ScrapeError, ValidationError};
pub use extractors::*;
pub use pipeline::{process_html, run, RunSummary};
pub use validator::{validate, validate_file, ValidationReport};
