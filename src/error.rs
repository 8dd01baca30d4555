//! Error types for the scrape pipeline
//!
//! Row-level problems never show up here: malformed rows and dimension
//! strings are absorbed by the extractors. Everything in [`ScrapeError`]
//! terminates the run.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for configuration, fetch, structure and write failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the persisted dataset does not pass validation.
pub const EXIT_VALIDATION: i32 = 2;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The marker table is gone, so the page layout has drifted.
    #[error("could not find table matching `{selector}`")]
    Structure { selector: String },

    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl ScrapeError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::Validation(_) => EXIT_VALIDATION,
            _ => EXIT_FAILURE,
        }
    }
}

/// Reasons a persisted dataset file is rejected
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{reason}")]
    Schema {
        index: Option<usize>,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let structure = ScrapeError::Structure {
            selector: "table.mce-item-table".to_string(),
        };
        assert_eq!(structure.exit_code(), EXIT_FAILURE);
        assert_eq!(ScrapeError::Config("missing".into()).exit_code(), EXIT_FAILURE);

        let invalid = ScrapeError::from(ValidationError::Schema {
            index: Some(0),
            reason: "item 0 has invalid name".to_string(),
        });
        assert_eq!(invalid.exit_code(), EXIT_VALIDATION);
        assert_eq!(
            invalid.to_string(),
            "validation failed: item 0 has invalid name"
        );
    }
}
