//! Run configuration
//!
//! Read from `config.json` in the repository root. The source URL lives
//! under `SIZES_URL`; every other key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScrapeError;
use crate::extractors::DEFAULT_TABLE_SELECTOR;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_OUTPUT_PATH: &str = "pages/sizes.json";
pub const DEFAULT_USER_AGENT: &str = "github-action-parser/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COMMIT_MESSAGE: &str = "chore: update sizes.json (generated)";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page holding the sizes table
    #[serde(rename = "SIZES_URL", alias = "sizes_url")]
    pub sizes_url: String,
    /// Where the dataset is written, relative to `repo_root` unless absolute
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub table_selector: String,
    pub commit_message: String,
    pub git_user_name: String,
    pub git_user_email: String,
    /// Working tree for output paths and git; never read from the file
    #[serde(skip)]
    pub repo_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes_url: String::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            git_user_name: "github-actions[bot]".to_string(),
            git_user_email: "action@github.com".to_string(),
            repo_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Config with defaults for everything but the URL.
    pub fn new(sizes_url: impl Into<String>, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            sizes_url: sizes_url.into(),
            repo_root: repo_root.into(),
            ..Self::default()
        }
    }

    /// Load the configuration for `repo_root`.
    ///
    /// `config_path` defaults to `config.json` under the root. Only that
    /// implicit file may be missing, and only when `url_override` supplies
    /// the URL; a path passed explicitly must exist. The override always
    /// wins over the file.
    pub fn load(
        repo_root: &Path,
        config_path: Option<&Path>,
        url_override: Option<String>,
    ) -> Result<Self, ScrapeError> {
        let explicit = config_path.is_some();
        let config_path = config_path
            .map(|p| resolve_path(repo_root, p))
            .unwrap_or_else(|| repo_root.join(CONFIG_FILE));

        let mut config = if config_path.exists() {
            let text = fs::read_to_string(&config_path).map_err(|e| {
                ScrapeError::Config(format!("failed to read {}: {}", config_path.display(), e))
            })?;
            serde_json::from_str::<Config>(&text).map_err(|e| {
                ScrapeError::Config(format!("failed to parse {}: {}", config_path.display(), e))
            })?
        } else if url_override.is_some() && !explicit {
            Config::default()
        } else {
            let file_name = if explicit { "config file" } else { CONFIG_FILE };
            return Err(ScrapeError::Config(format!(
                "{} not found at {}",
                file_name,
                config_path.display()
            )));
        };

        config.repo_root = repo_root.to_path_buf();
        if let Some(url) = url_override {
            config.sizes_url = url;
        }

        config.check()?;
        Ok(config)
    }

    /// Reject a missing or unparsable URL and an empty selector.
    pub fn check(&self) -> Result<(), ScrapeError> {
        let url = self.sizes_url.trim();
        if url.is_empty() {
            return Err(ScrapeError::Config(format!(
                "SIZES_URL missing from {}",
                CONFIG_FILE
            )));
        }
        url::Url::parse(url)
            .map_err(|e| ScrapeError::Config(format!("invalid SIZES_URL `{}`: {}", url, e)))?;

        if self.table_selector.trim().is_empty() {
            return Err(ScrapeError::Config("table_selector is empty".to_string()));
        }
        Ok(())
    }

    /// Absolute-or-root-relative location of the dataset file.
    pub fn output_file(&self) -> PathBuf {
        resolve_path(&self.repo_root, &self.output_path)
    }
}

/// Join a relative `path` onto `repo_root`; absolute paths pass through.
pub fn resolve_path(repo_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}
