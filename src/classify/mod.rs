//! Contig origin classification.
//!
//! This module decides, for every contig, whether a single reference genome
//! explains it or whether it is a chimeric assembly of several references:
//!
//! - [`coverage`]: Merges alignment spans into disjoint coverage regions
//! - [`ranking`]: Orders hits by strength of evidence
//! - [`origin`]: The per-contig decision procedure
//! - [`adjacent`]: Merges neighbouring chimera regions that map to the same reference
//! - [`dispatch`]: Classifies every contig of a hit table on a worker pool
//!
//! ## Decision Rules
//!
//! Rules are tried in order and the first one that applies decides:
//!
//! 1. **Singleton**: the contig has exactly one hit
//! 2. **Full length**: the strongest hit whose alignment length equals the contig length
//! 3. **Over length**: the strongest hit whose alignment is longer than the contig
//! 4. **Overlapping**: all hits fall into one coverage region; the best hit overall wins
//! 5. **Disjoint**: one best hit per coverage region, labelled chimera, then
//!    adjacent regions on the same reference are merged
//!
//! ## Example
//!
//! ```rust
//! use contig_origin::{classify_contig, Hit, Origin};
//!
//! let hits = vec![
//!     Hit::new("k141_1", "GCF_001", 1.16e-28, 535, 535, 1, 535),
//!     Hit::new("k141_1", "GCF_002", 0.0, 535, 535, 1, 535),
//! ];
//!
//! let classified = classify_contig(&hits).unwrap();
//! assert_eq!(classified.len(), 1);
//! assert_eq!(classified[0].hit.hit_id, "GCF_002");
//! assert_eq!(classified[0].origin, Origin::Single);
//! ```

use thiserror::Error;

pub mod adjacent;
pub mod coverage;
pub mod dispatch;
pub mod origin;
pub mod ranking;
pub mod summary;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("No hits supplied for classification")]
    EmptyGroup,

    #[error("Classification of contig '{query_id}' panicked: {message}")]
    WorkerPanic { query_id: String, message: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
