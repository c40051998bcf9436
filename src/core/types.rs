use serde::{Deserialize, Serialize};

/// Origin assigned to a contig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// One reference plausibly explains the whole contig
    Single,
    /// Disjoint regions of the contig best match different references
    Chimera,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Chimera => write!(f, "chimera"),
        }
    }
}

/// A contiguous span of a contig covered by one or more overlapping alignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRegion {
    /// First covered position (1-based, inclusive)
    pub start: u64,
    /// Last covered position (1-based, inclusive)
    pub end: u64,
}

impl CoverageRegion {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// True if `pos` lies within the region bounds
    #[must_use]
    pub fn contains_position(&self, pos: u64) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// True if the span `[start, end]` lies entirely within the region
    #[must_use]
    pub fn contains_span(&self, start: u64, end: u64) -> bool {
        start >= self.start && end <= self.end
    }
}
