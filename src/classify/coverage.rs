//! Coverage regions from alignment spans.
//!
//! A span joins an existing region only if its *start* lies inside that region,
//! and only the first such region is extended. Spans must be sorted by start
//! for the result to be a set of disjoint regions.

use crate::core::hit::Hit;
use crate::core::types::CoverageRegion;

/// Merge `(start, end)` spans into coverage regions.
///
/// For each span in input order: if its start falls within an existing region,
/// that region's end is extended to cover the span's end; otherwise the span
/// opens a new region.
pub fn merge_spans<I>(spans: I) -> Vec<CoverageRegion>
where
    I: IntoIterator<Item = (u64, u64)>,
{
    let mut regions: Vec<CoverageRegion> = Vec::new();

    for (start, end) in spans {
        match regions.iter_mut().find(|r| r.contains_position(start)) {
            Some(region) => region.end = region.end.max(end),
            None => regions.push(CoverageRegion::new(start, end)),
        }
    }

    regions
}

/// Coverage regions of a contig's hits, ordered by start.
///
/// Hits are sorted by start (stable) before merging.
pub fn coverage_regions(hits: &[Hit]) -> Vec<CoverageRegion> {
    let mut spans: Vec<(u64, u64)> = hits.iter().map(|h| (h.start, h.end)).collect();
    spans.sort_by_key(|&(start, _)| start);
    merge_spans(spans)
}
