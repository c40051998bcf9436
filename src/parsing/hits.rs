use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::hit::Hit;
use crate::parsing::{open_input, ParseError};
use crate::utils::validation::validate_hit;

/// Columns every hit table must provide
pub const HIT_COLUMNS: [&str; 7] = [
    "query_id",
    "hit_id",
    "e_val",
    "query_length",
    "alignment_length",
    "start",
    "end",
];

/// Parse a hit table file (optionally gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`read_hits`] if the content is invalid.
pub fn read_hits_file(path: &Path) -> Result<Vec<Hit>, ParseError> {
    let hits = read_hits(open_input(path)?)?;
    debug!("Read {} hit(s) from {}", hits.len(), path.display());
    Ok(hits)
}

/// Parse a comma-separated hit table with a header line.
///
/// Columns may appear in any order; extra columns are ignored. Every row is
/// validated, and all rows of a contig must agree on `query_length`.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if a required column is absent,
/// `ParseError::Csv` for rows that cannot be decoded (e.g. a non-numeric
/// e-value), `ParseError::InvalidHit` for rows failing validation, or
/// `ParseError::InconsistentQueryLength` if a contig's length changes.
/// A header naming both `alignment_length` and `align_length` is rejected
/// with `ParseError::InvalidRecord`.
pub fn read_hits<R: Read>(reader: R) -> Result<Vec<Hit>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| ParseError::csv(e, 1))?.clone();
    for column in HIT_COLUMNS {
        let present = headers
            .iter()
            .any(|h| h == column || (column == "alignment_length" && h == "align_length"));
        if !present {
            return Err(ParseError::MissingColumn(column.to_string()));
        }
    }
    if headers.iter().any(|h| h == "alignment_length")
        && headers.iter().any(|h| h == "align_length")
    {
        return Err(ParseError::InvalidRecord {
            line: 1,
            reason: "both alignment_length and align_length columns are present".to_string(),
        });
    }

    let mut hits = Vec::new();
    let mut query_lengths: HashMap<String, u64> = HashMap::new();

    for (i, result) in rdr.records().enumerate() {
        // Line numbers in errors are 1-based, the header is line 1
        let fallback_line = i as u64 + 2;
        let record = result.map_err(|e| ParseError::csv(e, fallback_line))?;
        let line = record.position().map_or(fallback_line, csv::Position::line);

        let hit: Hit = record
            .deserialize(Some(&headers))
            .map_err(|e| ParseError::csv(e, line))?;

        validate_hit(&hit).map_err(|source| ParseError::InvalidHit { line, source })?;

        match query_lengths.get(&hit.query_id) {
            Some(&expected) if expected != hit.query_length => {
                return Err(ParseError::InconsistentQueryLength {
                    query_id: hit.query_id,
                    expected,
                    found: hit.query_length,
                    line,
                });
            }
            Some(_) => {}
            None => {
                query_lengths.insert(hit.query_id.clone(), hit.query_length);
            }
        }

        hits.push(hit);
    }

    if hits.is_empty() {
        warn!("Hit table contains no rows");
    }

    Ok(hits)
}
