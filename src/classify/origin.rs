use tracing::debug;

use crate::classify::adjacent::merge_adjacent;
use crate::classify::coverage::coverage_regions;
use crate::classify::ranking::{best_hit, sorted_by_evalue};
use crate::classify::ClassifyError;
use crate::core::hit::{ClassifiedHit, Hit};
use crate::core::types::Origin;

/// Rule that decided a contig's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The contig has a single hit
    Singleton,
    /// An alignment covers exactly the contig length
    FullLength,
    /// An alignment is longer than the contig
    OverLength,
    /// All hits overlap into one coverage region
    Overlapping,
    /// Hits fall into several disjoint coverage regions
    Disjoint,
}

/// Outcome of the decision rules, before adjacent regions are merged
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<'a> {
    /// One hit explains the contig
    Single { rule: Rule, hit: &'a Hit },
    /// Best hit of each coverage region, ordered by region start
    Chimera { hits: Vec<&'a Hit> },
}

impl Decision<'_> {
    pub fn rule(&self) -> Rule {
        match self {
            Self::Single { rule, .. } => *rule,
            Self::Chimera { .. } => Rule::Disjoint,
        }
    }
}

/// Apply the decision rules to one contig's hits.
///
/// # Errors
///
/// Returns `ClassifyError::EmptyGroup` if `hits` is empty.
pub fn decide(hits: &[Hit]) -> Result<Decision<'_>, ClassifyError> {
    if let [hit] = hits {
        return Ok(Decision::Single {
            rule: Rule::Singleton,
            hit,
        });
    }
    if hits.is_empty() {
        return Err(ClassifyError::EmptyGroup);
    }

    let by_evalue = sorted_by_evalue(hits);

    if let Some(hit) = by_evalue.iter().copied().find(|h| h.is_full_length()) {
        return Ok(Decision::Single {
            rule: Rule::FullLength,
            hit,
        });
    }

    if let Some(hit) = by_evalue.iter().copied().find(|h| h.is_over_length()) {
        return Ok(Decision::Single {
            rule: Rule::OverLength,
            hit,
        });
    }

    let regions = coverage_regions(hits);

    if regions.len() == 1 {
        let hit = best_hit(hits).ok_or(ClassifyError::EmptyGroup)?;
        return Ok(Decision::Single {
            rule: Rule::Overlapping,
            hit,
        });
    }

    // Every region contains the hit that last set its end, so none is skipped
    let best_per_region: Vec<&Hit> = regions
        .iter()
        .filter_map(|region| best_hit(hits.iter().filter(|h| region.contains_span(h.start, h.end))))
        .collect();

    Ok(Decision::Chimera {
        hits: best_per_region,
    })
}

/// Classify one contig from all of its hits.
///
/// Every hit must belong to the same contig. The result holds one row with
/// [`Origin::Single`], or several rows with [`Origin::Chimera`].
///
/// # Errors
///
/// Returns `ClassifyError::EmptyGroup` if `hits` is empty.
pub fn classify_contig(hits: &[Hit]) -> Result<Vec<ClassifiedHit>, ClassifyError> {
    let decision = decide(hits)?;
    let rule = decision.rule();

    let classified = match decision {
        Decision::Single { hit, .. } => vec![hit.clone().classify(Origin::Single)],
        Decision::Chimera { hits: best } => merge_adjacent(
            best.into_iter()
                .map(|h| h.clone().classify(Origin::Chimera))
                .collect(),
        ),
    };

    debug!(
        "Contig {}: {} hits, {:?} rule, {} row(s) as {}",
        hits[0].query_id,
        hits.len(),
        rule,
        classified.len(),
        classified[0].origin
    );

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(hit_id: &str, e_val: f64, qlen: u64, alen: u64, start: u64, end: u64) -> Hit {
        Hit::new("k1_1", hit_id, e_val, qlen, alen, start, end)
    }

    fn summary(rows: &[ClassifiedHit]) -> Vec<(&str, f64, u64, u64, u64, Origin)> {
        rows.iter()
            .map(|r| {
                (
                    r.hit.hit_id.as_str(),
                    r.hit.e_val,
                    r.hit.alignment_length,
                    r.hit.start,
                    r.hit.end,
                    r.origin,
                )
            })
            .collect()
    }

    #[test]
    fn test_single_hit() {
        let hits = vec![hit("GCF_001", 0.0, 535, 535, 1, 535)];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(rows, vec![hits[0].clone().classify(Origin::Single)]);
        assert_eq!(decide(&hits).unwrap().rule(), Rule::Singleton);
    }

    #[test]
    fn test_perfect_full_hits_keep_first() {
        let hits = vec![
            hit("GCF_001", 0.0, 535, 535, 1, 535),
            hit("GCF_002", 0.0, 535, 535, 1, 535),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![("GCF_001", 0.0, 535, 1, 535, Origin::Single)]
        );
    }

    #[test]
    fn test_full_hits_with_varying_evalue() {
        let hits = vec![
            hit("GCF_001", 1.16e-28, 535, 535, 1, 535),
            hit("GCF_002", 0.0, 535, 535, 1, 535),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![("GCF_002", 0.0, 535, 1, 535, Origin::Single)]
        );
        assert_eq!(decide(&hits).unwrap().rule(), Rule::FullLength);
    }

    #[test]
    fn test_full_length_beats_stronger_partial() {
        let hits = vec![
            hit("GCF_001", 0.0, 535, 400, 1, 400),
            hit("GCF_002", 1e-50, 535, 535, 1, 535),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(rows[0].hit.hit_id, "GCF_002");
    }

    #[test]
    fn test_longer_than_query() {
        let hits = vec![
            hit("GCF_001", 0.0, 570, 417, 1, 416),
            hit("GCF_002", 0.0, 570, 571, 1, 570),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![("GCF_002", 0.0, 571, 1, 570, Origin::Single)]
        );
        assert_eq!(decide(&hits).unwrap().rule(), Rule::OverLength);
    }

    #[test]
    fn test_full_length_checked_before_over_length() {
        let hits = vec![
            hit("GCF_001", 0.0, 570, 575, 1, 570),
            hit("GCF_002", 1e-5, 570, 570, 1, 570),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(rows[0].hit.hit_id, "GCF_002");
    }

    #[test]
    fn test_no_full_hits_all_overlapping() {
        let hits = vec![
            hit("GCF_001", 0.0, 570, 417, 1, 416),
            hit("GCF_002", 0.0, 570, 405, 1, 404),
            hit("GCF_003", 0.05, 570, 500, 1, 499),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![("GCF_001", 0.0, 417, 1, 416, Origin::Single)]
        );
        assert_eq!(decide(&hits).unwrap().rule(), Rule::Overlapping);
    }

    #[test]
    fn test_single_but_separate() {
        let hits = vec![
            hit("GCF_001", 0.0, 500, 200, 1, 199),
            hit("GCF_001", 0.0, 500, 200, 3, 201),
            hit("GCF_001", 0.0, 500, 200, 301, 500),
            hit("GCF_001", 0.05, 500, 250, 251, 500),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![("GCF_001", 0.0, 500, 1, 500, Origin::Single)]
        );
        assert_eq!(decide(&hits).unwrap().rule(), Rule::Disjoint);
    }

    #[test]
    fn test_chimera() {
        let hits = vec![
            hit("GCF_001", 0.0, 500, 200, 1, 199),
            hit("GCF_002", 0.0, 500, 200, 3, 201),
            hit("GCF_003", 0.0, 500, 200, 301, 500),
            hit("GCF_004", 0.05, 500, 250, 251, 500),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![
                ("GCF_001", 0.0, 200, 1, 199, Origin::Chimera),
                ("GCF_003", 0.0, 200, 301, 500, Origin::Chimera),
            ]
        );
    }

    #[test]
    fn test_separate_and_chimera() {
        let hits = vec![
            hit("GCF_001", 0.0, 1000, 200, 1, 199),
            hit("GCF_001", 0.0, 1000, 200, 3, 201),
            hit("GCF_001", 0.0, 1000, 200, 301, 500),
            hit("GCF_001", 0.05, 1000, 250, 251, 500),
            hit("GCF_002", 0.0, 1000, 100, 701, 800),
            hit("GCF_001", 0.0, 1000, 100, 901, 1000),
        ];
        let rows = classify_contig(&hits).unwrap();
        assert_eq!(
            summary(&rows),
            vec![
                ("GCF_001", 0.0, 500, 1, 500, Origin::Chimera),
                ("GCF_002", 0.0, 100, 701, 800, Origin::Chimera),
                ("GCF_001", 0.0, 100, 901, 1000, Origin::Chimera),
            ]
        );
    }

    #[test]
    fn test_region_best_uses_only_contained_hits() {
        // The weaker hit spanning 251-500 is inside region two but loses to 301-500
        let hits = vec![
            hit("GCF_001", 1e-20, 600, 100, 1, 100),
            hit("GCF_002", 0.05, 600, 250, 251, 500),
            hit("GCF_003", 1e-30, 600, 200, 301, 500),
        ];
        match decide(&hits).unwrap() {
            Decision::Chimera { hits: best } => {
                let ids: Vec<&str> = best.iter().map(|h| h.hit_id.as_str()).collect();
                assert_eq!(ids, vec!["GCF_001", "GCF_003"]);
            }
            other => panic!("expected chimera, got {other:?}"),
        }
    }

    #[test]
    fn test_every_region_yields_a_hit() {
        // Region one is extended by a later span; its end still belongs to a hit
        let hits = vec![
            hit("GCF_001", 1e-5, 1000, 100, 1, 100),
            hit("GCF_002", 1e-5, 1000, 251, 50, 300),
            hit("GCF_003", 0.0, 1000, 61, 60, 120),
            hit("GCF_004", 0.0, 1000, 101, 500, 600),
        ];
        let regions = coverage_regions(&hits);
        assert_eq!(regions.len(), 2);

        match decide(&hits).unwrap() {
            Decision::Chimera { hits: best } => {
                assert_eq!(best.len(), regions.len());
                let ids: Vec<&str> = best.iter().map(|h| h.hit_id.as_str()).collect();
                assert_eq!(ids, vec!["GCF_003", "GCF_004"]);
            }
            other => panic!("expected chimera, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_group_is_error() {
        assert!(matches!(
            classify_contig(&[]),
            Err(ClassifyError::EmptyGroup)
        ));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let hits = vec![
            hit("GCF_001", 0.0, 1000, 200, 1, 199),
            hit("GCF_002", 0.0, 1000, 200, 3, 201),
            hit("GCF_003", 1e-3, 1000, 100, 701, 800),
        ];
        let first = classify_contig(&hits).unwrap();
        let second = classify_contig(&hits).unwrap();
        assert_eq!(first, second);
    }
}
