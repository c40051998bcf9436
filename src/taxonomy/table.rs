use std::collections::HashMap;

use crate::parsing::ParseError;

/// Column holding the reference accession joined against `hit_id`
pub const ACCESSION_COLUMN: &str = "accession";

/// Column holding the taxonomy identifier
pub const TAXID_COLUMN: &str = "taxid";

/// One row of the taxonomy table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRecord {
    /// Reference accession, e.g. `GCF_000005845.2`
    pub accession: String,

    /// Taxonomy identifier
    pub taxid: String,

    /// All values of the row, in table column order
    pub values: Vec<String>,
}

/// Taxonomy lookup keyed by accession
#[derive(Debug, Clone, Default)]
pub struct TaxonomyTable {
    columns: Vec<String>,
    records: Vec<TaxonomyRecord>,
    by_accession: HashMap<String, Vec<usize>>,
}

impl TaxonomyTable {
    /// Build a table from its header and rows.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingColumn` if the header lacks `accession` or
    /// `taxid`, or `ParseError::InvalidRecord` if a row has the wrong width.
    pub fn from_rows<I>(columns: Vec<String>, rows: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let accession_col = column_index(&columns, ACCESSION_COLUMN)?;
        let taxid_col = column_index(&columns, TAXID_COLUMN)?;

        let mut table = Self {
            columns,
            ..Self::default()
        };

        for (i, values) in rows.into_iter().enumerate() {
            if values.len() != table.columns.len() {
                return Err(ParseError::InvalidRecord {
                    // Header is line 1
                    line: i as u64 + 2,
                    reason: format!(
                        "expected {} taxonomy fields, found {}",
                        table.columns.len(),
                        values.len()
                    ),
                });
            }

            table.push(TaxonomyRecord {
                accession: values[accession_col].clone(),
                taxid: values[taxid_col].clone(),
                values,
            });
        }

        Ok(table)
    }

    fn push(&mut self, record: TaxonomyRecord) {
        self.by_accession
            .entry(record.accession.clone())
            .or_default()
            .push(self.records.len());
        self.records.push(record);
    }

    /// Header of the table
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records whose accession equals `accession`, in table order
    pub fn lookup<'a>(&'a self, accession: &str) -> impl Iterator<Item = &'a TaxonomyRecord> + 'a {
        self.by_accession
            .get(accession)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.records[idx])
    }

    pub fn contains(&self, accession: &str) -> bool {
        self.by_accession.contains_key(accession)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn column_index(columns: &[String], name: &str) -> Result<usize, ParseError> {
    columns
        .iter()
        .position(|c| c.trim() == name)
        .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
}
