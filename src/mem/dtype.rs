//! Data-type catalog: bytes per element for each supported precision.

use crate::error::{EstimateError, Result};

/// Supported precision names and their per-element sizes in bytes.
///
/// Process-wide read-only table. int4 packs two elements per byte, hence the
/// fractional size.
pub const DATA_TYPE_SIZES: &[(&str, f64)] = &[
    ("float32", 4.0),
    ("float16", 2.0),
    ("bfloat16", 2.0),
    ("int8", 1.0),
    ("int4", 0.5),
];

/// Non-failing catalog lookup, used by the formulas.
pub fn lookup(precision: &str) -> Option<f64> {
    DATA_TYPE_SIZES
        .iter()
        .find(|(name, _)| *name == precision)
        .map(|&(_, size)| size)
}

/// Bytes per element for `precision`.
///
/// Fails with [`EstimateError::UnknownPrecision`] for names outside the
/// catalog. Validation checks membership before any formula runs, so a
/// failure here on a validated request is a defect.
pub fn bytes_per_element(precision: &str) -> Result<f64> {
    lookup(precision).ok_or_else(|| EstimateError::UnknownPrecision(precision.to_string()))
}

/// All supported precision names, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    DATA_TYPE_SIZES.iter().map(|&(name, _)| name)
}
