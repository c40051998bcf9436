//! Writers for classified and taxonomy-assigned hit tables.
//!
//! Tables are written with the hit columns first, then `origin`, then (for
//! assigned hits) every taxonomy column in taxonomy-file order.

use std::io::Write;

use crate::core::hit::{ClassifiedHit, Hit};
use crate::taxonomy::AssignedHit;

/// Columns of a classified hit table
pub const CLASSIFIED_COLUMNS: [&str; 8] = [
    "query_id",
    "hit_id",
    "e_val",
    "query_length",
    "alignment_length",
    "start",
    "end",
    "origin",
];

/// Format an e-value the way BLAST reports do: `0` for zero, scientific
/// notation for very small or very large values.
pub fn format_evalue(e_val: f64) -> String {
    if e_val == 0.0 {
        "0".to_string()
    } else if e_val.abs() < 1e-4 || e_val.abs() >= 1e6 {
        format!("{e_val:e}")
    } else {
        format!("{e_val}")
    }
}

fn classified_fields(row: &ClassifiedHit) -> Vec<String> {
    let Hit {
        query_id,
        hit_id,
        e_val,
        query_length,
        alignment_length,
        start,
        end,
    } = &row.hit;

    vec![
        query_id.clone(),
        hit_id.clone(),
        format_evalue(*e_val),
        query_length.to_string(),
        alignment_length.to_string(),
        start.to_string(),
        end.to_string(),
        row.origin.to_string(),
    ]
}

/// Write classified hits as a delimited table with a header line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_classified<W: Write>(
    rows: &[ClassifiedHit],
    writer: W,
    delimiter: u8,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(CLASSIFIED_COLUMNS)?;
    for row in rows {
        wtr.write_record(classified_fields(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write taxonomy-assigned hits as a delimited table with a header line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_assigned<W: Write>(
    rows: &[AssignedHit<'_>],
    taxonomy_columns: &[String],
    writer: W,
    delimiter: u8,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let header: Vec<&str> = CLASSIFIED_COLUMNS
        .iter()
        .copied()
        .chain(taxonomy_columns.iter().map(String::as_str))
        .collect();
    wtr.write_record(&header)?;

    for row in rows {
        let mut fields = classified_fields(&row.classified);
        fields.extend(row.taxonomy.values.iter().cloned());
        wtr.write_record(&fields)?;
    }
    wtr.flush()?;
    Ok(())
}
