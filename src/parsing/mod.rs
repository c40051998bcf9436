//! Readers for the tables consumed by the classifier.
//!
//! This module provides readers for:
//!
//! - **Parsed hit tables**: one alignment per row, produced from BLAST output
//! - **Taxonomy tables**: reference accessions with their taxonomy identifiers
//!
//! Both are comma-separated with a header line and may be gzip-compressed
//! (`.gz` extension).
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_origin::parsing::hits::read_hits_file;
//! use contig_origin::parsing::taxonomy::read_taxonomy_file;
//! use std::path::Path;
//!
//! let hits = read_hits_file(Path::new("sample_parsed_blast.csv")).unwrap();
//! let taxonomy = read_taxonomy_file(Path::new("taxonomy.csv")).unwrap();
//! ```
//!
//! ## Hit Table Columns
//!
//! | Column | Description | Type |
//! |--------|-------------|------|
//! | query_id | Contig identifier | text |
//! | hit_id | Reference accession | text |
//! | e_val | Alignment e-value | float, `>= 0` |
//! | query_length | Contig length | integer, `> 0` |
//! | alignment_length | Alignment length | integer, `> 0` |
//! | start | First aligned contig position | integer, 1-based |
//! | end | Last aligned contig position | integer, `>= start` |

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::utils::validation::{is_gzipped, ValidationError};

pub mod hits;
pub mod taxonomy;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Invalid hit on line {line}: {source}")]
    InvalidHit {
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error(
        "Contig '{query_id}' has query_length {found} on line {line}, but {expected} on an earlier line"
    )]
    InconsistentQueryLength {
        query_id: String,
        expected: u64,
        found: u64,
        line: u64,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl ParseError {
    pub(crate) fn csv(source: csv::Error, fallback_line: u64) -> Self {
        let line = source
            .position()
            .map_or(fallback_line, csv::Position::line);
        Self::Csv { line, source }
    }
}

/// Open a file for reading, decompressing it if it is gzipped
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
