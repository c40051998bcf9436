//! Taxonomy lookup and enrichment of classified hits.
//!
//! - [`TaxonomyTable`]: Reference accessions mapped to taxonomy identifiers and
//!   descriptive columns (kingdom, genus, species, ...)
//! - [`join`]: Inner join of classified hits against the table, and
//!   deduplication of the joined rows
//!
//! Hits whose reference accession is missing from the table are dropped by the
//! join. This is not an error.

pub mod join;
pub mod table;

pub use join::{deduplicate, join_taxonomy, AssignedHit};
pub use table::{TaxonomyRecord, TaxonomyTable};
