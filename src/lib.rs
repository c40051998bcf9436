//! # contig-origin
//!
//! A library for deciding whether assembled contigs originate from a single
//! reference genome or are chimeric assemblies of several references.
//!
//! Metagenome assemblers sometimes join reads from different organisms into one
//! contig. Aligning contigs against a set of reference genomes (e.g. with BLAST)
//! shows which references support which parts of each contig, but a contig
//! usually has many hits, partly redundant and partly conflicting.
//!
//! `contig-origin` reduces the hits of every contig to the minimal set of best
//! supporting hits and labels the contig `single` or `chimera`.
//!
//! ## Features
//!
//! - **Full-length detection**: A hit spanning the whole contig decides immediately
//! - **Coverage regions**: Overlapping hits are merged into disjoint regions
//! - **Evidence ranking**: Lowest e-value first, longest alignment on ties
//! - **Adjacent merging**: Neighbouring regions on the same reference are joined
//! - **Parallel dispatch**: Contigs are classified independently on a worker pool
//! - **Taxonomy assignment**: Selected hits are joined to taxonomy identifiers
//!
//! ## Example
//!
//! ```rust
//! use contig_origin::{ClassifyConfig, Hit, Origin, ParallelDispatcher};
//!
//! let hits = vec![
//!     Hit::new("k141_1", "GCF_001", 0.0, 1000, 500, 1, 500),
//!     Hit::new("k141_1", "GCF_002", 0.0, 1000, 300, 601, 900),
//!     Hit::new("k141_2", "GCF_001", 0.0, 306, 306, 1, 306),
//! ];
//!
//! let dispatcher = ParallelDispatcher::new(&ClassifyConfig::default()).unwrap();
//! let rows = dispatcher.classify_all(hits).unwrap();
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].origin, Origin::Chimera);
//! assert_eq!(rows[2].origin, Origin::Single);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for hits, classified hits and coverage regions
//! - [`classify`]: Decision rules and parallel dispatch
//! - [`taxonomy`]: Taxonomy lookup, join and deduplication
//! - [`parsing`]: Readers for hit and taxonomy tables
//! - [`output`]: Writers for result tables
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod taxonomy;
pub mod utils;

// Re-export commonly used types for convenience
pub use classify::dispatch::{ClassifyConfig, ParallelDispatcher};
pub use classify::origin::classify_contig;
pub use classify::ClassifyError;
pub use core::hit::{ClassifiedHit, Hit};
pub use core::types::*;
pub use taxonomy::{AssignedHit, TaxonomyTable};
