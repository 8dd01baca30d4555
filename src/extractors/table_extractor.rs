//! Sizes table extraction
//!
//! Uses the scraper crate to locate the marker table and read its rows.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::{parse_dimensions, SizeItem};
use crate::error::ScrapeError;

/// Marker class the source site's editor puts on the sizes table
pub const DEFAULT_TABLE_SELECTOR: &str = "table.mce-item-table, table.bluetable.mce-item-table";

/// Rows with fewer cells are headers or decoration
const MIN_CELLS: usize = 4;

/// Extract size items from the first marker table in `html`.
pub fn extract_items(html: &str) -> Result<Vec<SizeItem>, ScrapeError> {
    extract_items_with(html, DEFAULT_TABLE_SELECTOR)
}

/// Extract size items from the first table matching `table_selector`.
///
/// Fails with [`ScrapeError::Structure`] when no element matches. Rows
/// with fewer than four `td` cells are skipped; every other row becomes
/// one item, in document order.
pub fn extract_items_with(html: &str, table_selector: &str) -> Result<Vec<SizeItem>, ScrapeError> {
    let table_sel = parse_selector(table_selector)?;
    let row_sel = parse_selector("tr")?;
    let cell_sel = parse_selector("td")?;

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| ScrapeError::Structure {
            selector: table_selector.to_string(),
        })?;

    let mut items = Vec::new();
    for (index, row) in table.select(&row_sel).enumerate() {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() < MIN_CELLS {
            debug!("skipping row {}: {} cells", index, cells.len());
            continue;
        }

        let external = cell_text(&cells[1]);
        let internal = cell_text(&cells[2]);

        items.push(SizeItem {
            name: collapse_whitespace(&cell_text(&cells[0])),
            external: parse_dimensions(Some(external.as_str())),
            internal: parse_dimensions(Some(internal.as_str())),
            weight: parse_weight(&cell_text(&cells[3])),
        });
    }

    debug!("extracted {} items", items.len());
    Ok(items)
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Config(format!("invalid selector `{}`: {}", selector, e)))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .trim_matches(is_name_whitespace)
        .to_string()
}

/// Unicode whitespace plus the byte-order mark, which editors leave in cells
pub fn is_name_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Collapse every whitespace run (including non-breaking spaces) to one space
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_name_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a weight cell.
///
/// Everything except digits and `-` is dropped, then the leading integer
/// is read: an optional `-` followed by the first run of digits. `"12-3"`
/// gives 12 and a bare `"-"` gives `None`. Unlike dimensions, the sign
/// is kept.
pub fn parse_weight(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
