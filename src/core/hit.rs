use serde::{Deserialize, Serialize};

use crate::core::types::Origin;

/// A single local alignment of a contig (the query) against a reference genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Contig identifier
    pub query_id: String,

    /// Reference identifier (genome accession)
    pub hit_id: String,

    /// Alignment e-value; lower is stronger
    pub e_val: f64,

    /// Length of the contig, identical for every hit of the same query
    pub query_length: u64,

    /// Length of the alignment, gaps included, so it may exceed `query_length`
    #[serde(alias = "align_length")]
    pub alignment_length: u64,

    /// First aligned query position (1-based, inclusive)
    pub start: u64,

    /// Last aligned query position (1-based, inclusive)
    pub end: u64,
}

impl Hit {
    pub fn new(
        query_id: impl Into<String>,
        hit_id: impl Into<String>,
        e_val: f64,
        query_length: u64,
        alignment_length: u64,
        start: u64,
        end: u64,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            hit_id: hit_id.into(),
            e_val,
            query_length,
            alignment_length,
            start,
            end,
        }
    }

    /// True if the alignment spans exactly the whole contig length
    #[must_use]
    pub fn is_full_length(&self) -> bool {
        self.alignment_length == self.query_length
    }

    /// True if the alignment is longer than the contig (gapped overhang)
    #[must_use]
    pub fn is_over_length(&self) -> bool {
        self.alignment_length > self.query_length
    }

    /// Attach an origin label
    #[must_use]
    pub fn classify(self, origin: Origin) -> ClassifiedHit {
        ClassifiedHit { hit: self, origin }
    }
}

/// A hit selected as evidence for its contig's origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedHit {
    #[serde(flatten)]
    pub hit: Hit,

    pub origin: Origin,
}

impl ClassifiedHit {
    pub fn query_id(&self) -> &str {
        &self.hit.query_id
    }

    pub fn hit_id(&self) -> &str {
        &self.hit.hit_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_and_over_length() {
        let full = Hit::new("k1_1", "GCF_001", 0.0, 535, 535, 1, 535);
        assert!(full.is_full_length());
        assert!(!full.is_over_length());

        let over = Hit::new("k1_1", "GCF_002", 0.0, 570, 571, 1, 570);
        assert!(!over.is_full_length());
        assert!(over.is_over_length());

        let partial = Hit::new("k1_1", "GCF_003", 0.0, 570, 417, 1, 416);
        assert!(!partial.is_full_length());
        assert!(!partial.is_over_length());
    }

    #[test]
    fn test_classified_hit_json_is_flat() {
        let classified = Hit::new("k1_1", "GCF_001", 0.0, 535, 535, 1, 535).classify(Origin::Single);
        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["query_id"], "k1_1");
        assert_eq!(value["end"], 535);
        assert_eq!(value["origin"], "single");
    }
}
