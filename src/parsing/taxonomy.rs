use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::parsing::{open_input, ParseError};
use crate::taxonomy::TaxonomyTable;

/// Parse a taxonomy table file (optionally gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`read_taxonomy`] if the content is invalid.
pub fn read_taxonomy_file(path: &Path) -> Result<TaxonomyTable, ParseError> {
    let table = read_taxonomy(open_input(path)?)?;
    debug!(
        "Read {} taxonomy record(s) with {} column(s) from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Parse a comma-separated taxonomy table with a header line.
///
/// The header must contain `accession` and `taxid`; all other columns are
/// kept as descriptive fields.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if a required column is absent, or
/// `ParseError::Csv` if a row cannot be read (e.g. it has the wrong width).
pub fn read_taxonomy<R: Read>(reader: R) -> Result<TaxonomyTable, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|e| ParseError::csv(e, 1))?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = rdr
        .records()
        .enumerate()
        .map(|(i, result)| {
            result
                .map(|record| record.iter().map(str::to_string).collect::<Vec<_>>())
                .map_err(|e| ParseError::csv(e, i as u64 + 2))
        })
        .collect::<Result<Vec<_>, _>>()?;

    TaxonomyTable::from_rows(columns, rows)
}
