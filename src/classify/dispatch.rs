//! Classification of a whole hit table on a worker pool.
//!
//! The table is partitioned by contig and every partition is classified
//! independently on a dedicated rayon pool. Results are gathered in partition
//! order, then joined against the taxonomy and deduplicated.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::classify::origin::classify_contig;
use crate::classify::summary::ClassificationSummary;
use crate::classify::ClassifyError;
use crate::core::hit::{ClassifiedHit, Hit};
use crate::taxonomy::{deduplicate, join_taxonomy, AssignedHit, TaxonomyTable};

/// Configuration for the dispatcher
#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    /// Worker threads; 0 uses every available CPU
    pub threads: usize,
}

impl ClassifyConfig {
    /// Thread count with 0 resolved to the number of CPUs
    pub fn resolved_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}

/// All hits of one contig, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGroup {
    pub query_id: String,
    pub hits: Vec<Hit>,
}

/// Split a hit table into one group per contig.
///
/// Groups appear in order of each contig's first hit; hits keep their input
/// order within a group.
pub fn partition_by_query(hits: Vec<Hit>) -> Vec<QueryGroup> {
    let mut groups: Vec<QueryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for hit in hits {
        match index.get(&hit.query_id) {
            Some(&i) => groups[i].hits.push(hit),
            None => {
                index.insert(hit.query_id.clone(), groups.len());
                groups.push(QueryGroup {
                    query_id: hit.query_id.clone(),
                    hits: vec![hit],
                });
            }
        }
    }

    groups
}

/// Result of the full pipeline
#[derive(Debug, Clone)]
pub struct Assignment<'t> {
    pub rows: Vec<AssignedHit<'t>>,
    pub summary: ClassificationSummary,
}

/// Classifies contigs in parallel
pub struct ParallelDispatcher {
    pool: rayon::ThreadPool,
}

impl ParallelDispatcher {
    /// Build a dispatcher with its own worker pool
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::ThreadPool` if the pool cannot be created.
    pub fn new(config: &ClassifyConfig) -> Result<Self, ClassifyError> {
        let threads = config.resolved_threads();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("classify-{i}"))
            .build()?;

        debug!("Built classification pool with {threads} thread(s)");

        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Classify every contig of a hit table.
    ///
    /// Rows of one contig are contiguous in the result. The first failing
    /// contig aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns the first `ClassifyError` raised by any contig, including
    /// `ClassifyError::WorkerPanic` if a classification panicked.
    pub fn classify_all(&self, hits: Vec<Hit>) -> Result<Vec<ClassifiedHit>, ClassifyError> {
        self.classify_with(hits, classify_contig)
    }

    /// Classify every contig with `classifier`, gathering rows in contig order.
    pub(crate) fn classify_with<F>(
        &self,
        hits: Vec<Hit>,
        classifier: F,
    ) -> Result<Vec<ClassifiedHit>, ClassifyError>
    where
        F: Fn(&[Hit]) -> Result<Vec<ClassifiedHit>, ClassifyError> + Sync,
    {
        let n_hits = hits.len();
        let groups = partition_by_query(hits);
        info!(
            "Classifying {} contig(s) from {n_hits} hit(s) on {} thread(s)",
            groups.len(),
            self.threads()
        );

        let per_contig: Vec<Vec<ClassifiedHit>> = self.pool.install(|| {
            groups
                .par_iter()
                .map(|group| classify_group(group, &classifier))
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(per_contig.into_iter().flatten().collect())
    }

    /// Classify every contig, join against the taxonomy and deduplicate.
    ///
    /// # Errors
    ///
    /// Returns the first `ClassifyError` raised during classification.
    pub fn assign<'t>(
        &self,
        hits: Vec<Hit>,
        taxonomy: &'t TaxonomyTable,
    ) -> Result<Assignment<'t>, ClassifyError> {
        let classified = self.classify_all(hits)?;
        let mut summary = ClassificationSummary::from_classified(&classified);

        summary.unmatched_rows = classified
            .iter()
            .filter(|r| !taxonomy.contains(r.hit_id()))
            .count();

        let joined = join_taxonomy(classified, taxonomy);
        let n_joined = joined.len();

        let rows = deduplicate(joined);
        summary.duplicate_rows = n_joined - rows.len();
        summary.output_rows = rows.len();

        info!(
            "Assigned {} contig(s): {} single, {} chimera; {} row(s) written, {} without taxonomy, {} duplicate(s)",
            summary.contigs,
            summary.single,
            summary.chimera,
            summary.output_rows,
            summary.unmatched_rows,
            summary.duplicate_rows
        );

        Ok(Assignment { rows, summary })
    }
}

fn classify_group<F>(group: &QueryGroup, classifier: &F) -> Result<Vec<ClassifiedHit>, ClassifyError>
where
    F: Fn(&[Hit]) -> Result<Vec<ClassifiedHit>, ClassifyError>,
{
    panic::catch_unwind(AssertUnwindSafe(|| classifier(&group.hits))).unwrap_or_else(
        |payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(ClassifyError::WorkerPanic {
                query_id: group.query_id.clone(),
                message,
            })
        },
    )
}
