//! Human-readable memory sizes.

use crate::error::{EstimateError, Result};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;

/// Render a byte count at the largest binary unit it reaches, with two
/// fraction digits: `format_memory(14_000_000_000.0) == "13.04 GB"`.
pub fn format_memory(bytes: f64) -> String {
    match bytes {
        b if b >= PB => format!("{:.2} PB", b / PB),
        b if b >= TB => format!("{:.2} TB", b / TB),
        b if b >= GB => format!("{:.2} GB", b / GB),
        b if b >= MB => format!("{:.2} MB", b / MB),
        b if b >= KB => format!("{:.2} KB", b / KB),
        b => format!("{b:.2} B"),
    }
}

/// Parse a `"<number> <unit>"` string back into bytes.
///
/// Unrecognized unit tokens are treated as plain bytes. Two-digit rounding
/// in [`format_memory`] makes this a lossy inverse: accurate to the
/// displayed precision, not bit-exact against the original value.
pub fn parse_memory(s: &str) -> Result<f64> {
    let mut parts = s.split_whitespace();
    let (Some(value), Some(unit)) = (parts.next(), parts.next()) else {
        return Err(EstimateError::MalformedMemoryString(s.to_string()));
    };
    let value: f64 = value
        .parse()
        .map_err(|_| EstimateError::MalformedMemoryString(s.to_string()))?;
    let multiplier = match unit {
        "PB" => PB,
        "TB" => TB,
        "GB" => GB,
        "MB" => MB,
        "KB" => KB,
        _ => 1.0,
    };
    Ok(value * multiplier)
}
