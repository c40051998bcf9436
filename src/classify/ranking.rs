//! Ordering hits by strength of evidence.

use std::cmp::Ordering;

use crate::core::hit::Hit;

/// Ascending e-value, as a total order (NaN sorts after every number)
pub fn by_evalue(a: &Hit, b: &Hit) -> Ordering {
    a.e_val.total_cmp(&b.e_val)
}

/// Ascending e-value, then descending alignment length
pub fn by_evidence(a: &Hit, b: &Hit) -> Ordering {
    by_evalue(a, b).then_with(|| b.alignment_length.cmp(&a.alignment_length))
}

/// Hits in ascending e-value order; equal e-values keep input order
pub fn sorted_by_evalue(hits: &[Hit]) -> Vec<&Hit> {
    let mut sorted: Vec<&Hit> = hits.iter().collect();
    sorted.sort_by(|a, b| by_evalue(a, b));
    sorted
}

/// The strongest hit: lowest e-value, longest alignment among equal e-values,
/// earliest in input order among remaining ties.
pub fn best_hit<'a, I>(hits: I) -> Option<&'a Hit>
where
    I: IntoIterator<Item = &'a Hit>,
{
    // min_by keeps the first of several equal minima
    hits.into_iter().min_by(|a, b| by_evidence(a, b))
}
