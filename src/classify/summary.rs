use serde::Serialize;

use crate::core::hit::ClassifiedHit;
use crate::core::types::Origin;

/// Counts describing one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    /// Contigs classified
    pub contigs: usize,
    /// Contigs explained by one reference
    pub single: usize,
    /// Contigs assembled from several references
    pub chimera: usize,
    /// Classified rows before the taxonomy join
    pub classified_rows: usize,
    /// Rows whose reference has no taxonomy entry
    pub unmatched_rows: usize,
    /// Rows removed as duplicates after the join
    pub duplicate_rows: usize,
    /// Rows in the final table
    pub output_rows: usize,
}

impl ClassificationSummary {
    /// Tally contigs and rows of a classified table.
    ///
    /// Rows of one contig must be contiguous. A contig's rows share one
    /// origin, so it is counted from its first row.
    pub fn from_classified(rows: &[ClassifiedHit]) -> Self {
        let mut summary = Self {
            classified_rows: rows.len(),
            output_rows: rows.len(),
            ..Self::default()
        };

        let mut previous: Option<&str> = None;
        for row in rows {
            if previous == Some(row.query_id()) {
                continue;
            }
            previous = Some(row.query_id());
            summary.contigs += 1;
            match row.origin {
                Origin::Single => summary.single += 1,
                Origin::Chimera => summary.chimera += 1,
            }
        }

        summary
    }

    /// Fraction of contigs classified as chimeric
    #[must_use]
    pub fn chimera_fraction(&self) -> f64 {
        if self.contigs == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.chimera as f64 / self.contigs as f64;
        fraction
    }
}
