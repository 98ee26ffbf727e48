// src/table/format.rs

use crate::table::sort_key::NOT_AVAILABLE;

/// Marker the upstream feed uses for an unknown land size.
const ABSENT_MARKER: &str = "None";

const AREA_UNIT: &str = "m²";

/// Presentation form of a raw land-size value.
///
/// Keeps only digits and `.`, reads the leading decimal magnitude and rounds it
/// up to whole square metres. A value with no readable magnitude is returned as
/// is; an absent, empty or `"None"` value becomes `"n/a"`.
pub fn format_land_size(raw: Option<&str>) -> String {
    let raw = match raw {
        None | Some("") | Some(ABSENT_MARKER) => return NOT_AVAILABLE.to_string(),
        Some(raw) => raw,
    };

    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match leading_magnitude(&digits) {
        Some(magnitude) => format!("{} {AREA_UNIT}", magnitude.ceil()),
        None => raw.to_string(),
    }
}

/// Longest prefix made of digits and at most one decimal point, parsed.
fn leading_magnitude(digits: &str) -> Option<f64> {
    let mut seen_point = false;
    let end = digits
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_point {
                    return true;
                }
                seen_point = true;
            }
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    let prefix = &digits[..end];
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<f64>().ok()
}
