//! Dataset persistence
//!
//! The file is rewritten from scratch on every run: serialized to a temp
//! file in the same directory first, then persisted over the old one. A
//! temp file that never gets persisted is removed when it is dropped.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::ScrapeError;
use crate::extractors::SizeItem;

/// Pretty-printed JSON for the dataset, 2-space indent, no trailing newline
pub fn render_dataset(items: &[SizeItem]) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Write `items` to `path`, creating parent directories as needed.
pub fn write_dataset(path: &Path, items: &[SizeItem]) -> Result<(), ScrapeError> {
    let json = render_dataset(items)?;
    let write_error = |source: std::io::Error| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(json.as_bytes()).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    info!("Wrote {} ({} items)", path.display(), items.len());
    Ok(())
}
