//! Centralized validation and helper functions.

use std::path::Path;

use crate::core::hit::Hit;

/// Reasons a parsed hit is rejected before classification
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("query_id is empty")]
    EmptyQueryId,
    #[error("hit_id is empty")]
    EmptyHitId,
    #[error("e-value must be a non-negative number, found {0}")]
    InvalidEValue(f64),
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
    #[error("start ({start}) is after end ({end})")]
    StartAfterEnd { start: u64, end: u64 },
}

/// Check that a hit is well formed.
///
/// Coordinates are 1-based, so zero is rejected for `start` and `end` as well
/// as for both lengths.
///
/// # Examples
///
/// ```
/// use contig_origin::Hit;
/// use contig_origin::utils::validation::{validate_hit, ValidationError};
///
/// let hit = Hit::new("k141_5989", "GCF_002148255.1", 8.4e-160, 306, 306, 1, 306);
/// assert!(validate_hit(&hit).is_ok());
///
/// let reversed = Hit::new("k141_5989", "GCF_002148255.1", 0.0, 306, 10, 20, 11);
/// assert_eq!(
///     validate_hit(&reversed),
///     Err(ValidationError::StartAfterEnd { start: 20, end: 11 })
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_hit(hit: &Hit) -> Result<(), ValidationError> {
    if hit.query_id.trim().is_empty() {
        return Err(ValidationError::EmptyQueryId);
    }
    if hit.hit_id.trim().is_empty() {
        return Err(ValidationError::EmptyHitId);
    }
    if hit.e_val.is_nan() || hit.e_val < 0.0 {
        return Err(ValidationError::InvalidEValue(hit.e_val));
    }

    for (field, value) in [
        ("query_length", hit.query_length),
        ("alignment_length", hit.alignment_length),
        ("start", hit.start),
        ("end", hit.end),
    ] {
        if value == 0 {
            return Err(ValidationError::ZeroValue(field));
        }
    }

    if hit.start > hit.end {
        return Err(ValidationError::StartAfterEnd {
            start: hit.start,
            end: hit.end,
        });
    }

    Ok(())
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}
