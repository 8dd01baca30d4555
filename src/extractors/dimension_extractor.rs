//! Dimension string parsing
//!
//! Turns free text such as `30x20x10 cm` or `W30 × H20 × D10` into a
//! [`Dimensions`] triple.

use super::Dimensions;

/// Separators between the three axes (`x` in either case, or `×`)
fn is_axis_separator(c: char) -> bool {
    matches!(c, 'x' | 'X' | '×')
}

/// Parse a dimension string into a width/height/depth triple.
///
/// Returns `None` for missing input, an empty string, a lone `-`, or
/// anything that does not split into exactly three segments. Inside a
/// segment every non-digit is discarded, so units and axis letters are
/// ignored; a segment with no digits left becomes a `None` axis.
pub fn parse_dimensions(raw: Option<&str>) -> Option<Dimensions> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "-" {
        return None;
    }

    let axes: Vec<Option<i64>> = raw.split(is_axis_separator).map(parse_axis).collect();

    match axes.as_slice() {
        &[width, height, depth] => Some(Dimensions {
            width,
            height,
            depth,
        }),
        _ => None,
    }
}

// Minus signs are stripped along with everything else, so no axis is negative.
fn parse_axis(segment: &str) -> Option<i64> {
    let digits: String = segment.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
