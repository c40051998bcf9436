use std::collections::HashSet;

use tracing::debug;

use crate::core::hit::ClassifiedHit;
use crate::taxonomy::table::{TaxonomyRecord, TaxonomyTable};

/// A classified hit enriched with the taxonomy of its reference
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedHit<'t> {
    pub classified: ClassifiedHit,
    pub taxonomy: &'t TaxonomyRecord,
}

impl AssignedHit<'_> {
    /// Key that identifies duplicate output rows
    pub fn dedup_key(&self) -> (&str, &str, &str, u64, u64) {
        let hit = &self.classified.hit;
        (
            hit.query_id.as_str(),
            hit.hit_id.as_str(),
            self.taxonomy.taxid.as_str(),
            hit.start,
            hit.end,
        )
    }
}

/// Inner join of classified hits against the taxonomy on `hit_id == accession`.
///
/// Rows without a taxonomy entry are dropped; rows matching several entries
/// are repeated once per entry.
pub fn join_taxonomy(classified: Vec<ClassifiedHit>, table: &TaxonomyTable) -> Vec<AssignedHit<'_>> {
    let mut joined = Vec::with_capacity(classified.len());
    let mut unmatched = 0usize;

    for row in classified {
        let mut records = table.lookup(row.hit_id()).peekable();
        if records.peek().is_none() {
            unmatched += 1;
            continue;
        }
        for taxonomy in records {
            joined.push(AssignedHit {
                classified: row.clone(),
                taxonomy,
            });
        }
    }

    if unmatched > 0 {
        debug!("{unmatched} classified row(s) have no taxonomy entry and were dropped");
    }

    joined
}

/// Remove rows repeating an earlier `(query_id, hit_id, taxid, start, end)`.
///
/// The first occurrence is kept and row order is preserved.
pub fn deduplicate(rows: Vec<AssignedHit<'_>>) -> Vec<AssignedHit<'_>> {
    let mut seen: HashSet<(String, String, String, u64, u64)> = HashSet::with_capacity(rows.len());

    rows.into_iter()
        .filter(|row| {
            let (query_id, hit_id, taxid, start, end) = row.dedup_key();
            seen.insert((
                query_id.to_string(),
                hit_id.to_string(),
                taxid.to_string(),
                start,
                end,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::Hit;
    use crate::core::types::Origin;

    fn table() -> TaxonomyTable {
        let columns = vec!["accession".to_string(), "taxid".to_string()];
        let rows = vec![
            vec!["GCF_001".to_string(), "562".to_string()],
            vec!["GCF_002".to_string(), "10665".to_string()],
        ];
        TaxonomyTable::from_rows(columns, rows).unwrap()
    }

    fn row(query_id: &str, hit_id: &str, start: u64, end: u64) -> ClassifiedHit {
        Hit::new(query_id, hit_id, 0.0, 1000, end - start + 1, start, end).classify(Origin::Single)
    }

    #[test]
    fn test_inner_join_drops_unknown_references() {
        let table = table();
        let joined = join_taxonomy(
            vec![
                row("k1_1", "GCF_001", 1, 1000),
                row("k1_2", "GCF_404", 1, 1000),
                row("k1_3", "GCF_002", 1, 1000),
            ],
            &table,
        );

        let ids: Vec<(&str, &str)> = joined
            .iter()
            .map(|r| (r.classified.query_id(), r.taxonomy.taxid.as_str()))
            .collect();
        assert_eq!(ids, vec![("k1_1", "562"), ("k1_3", "10665")]);
    }

    #[test]
    fn test_deduplicate_keeps_first() {
        let table = table();
        let joined = join_taxonomy(
            vec![
                row("k1_1", "GCF_001", 1, 1000),
                row("k1_1", "GCF_001", 1, 1000),
                row("k1_1", "GCF_001", 1, 999),
            ],
            &table,
        );

        let deduped = deduplicate(joined);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].classified.hit.end, 1000);
        assert_eq!(deduped[1].classified.hit.end, 999);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let table = table();
        let joined = join_taxonomy(
            vec![
                row("k1_1", "GCF_001", 1, 1000),
                row("k1_2", "GCF_002", 5, 50),
                row("k1_1", "GCF_001", 1, 1000),
                row("k1_2", "GCF_002", 5, 50),
            ],
            &table,
        );

        let once = deduplicate(joined);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }
}
