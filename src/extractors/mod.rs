//! HTML extraction modules
//!
//! The table extractor walks the marker table row by row and hands the
//! dimension cells to the dimension extractor.

mod dimension_extractor;
mod table_extractor;

pub use dimension_extractor::*;
pub use table_extractor::*;

use serde::{Deserialize, Serialize};

/// Width/height/depth measurement; any axis may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub depth: Option<i64>,
}

/// One product row of the sizes table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeItem {
    /// Whitespace-collapsed product name
    pub name: String,
    /// Outer dimensions, `None` when the cell held no usable triple
    pub external: Option<Dimensions>,
    /// Inner dimensions, `None` when the cell held no usable triple
    pub internal: Option<Dimensions>,
    pub weight: Option<i64>,
}
