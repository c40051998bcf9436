//! Merging of neighbouring chimera regions that map to the same reference.
//!
//! Consecutive rows sharing a `hit_id` are folded into one row spanning both.

use crate::core::hit::ClassifiedHit;
use crate::core::types::Origin;

/// Fold `next` into `open`: the span runs from `open.start` to `next.end`
/// and the e-value is the weaker of the two.
fn absorb(open: &mut ClassifiedHit, next: ClassifiedHit) {
    let merged = &mut open.hit;
    merged.end = next.hit.end;
    merged.alignment_length = merged.end - merged.start + 1;
    merged.e_val = merged.e_val.max(next.hit.e_val);
    merged.query_length = next.hit.query_length;
}

/// Merge runs of consecutive rows with the same `hit_id`.
///
/// `rows` must be ordered by region start. If a single row remains it is
/// relabelled [`Origin::Single`]; otherwise origins are left untouched.
pub fn merge_adjacent(rows: Vec<ClassifiedHit>) -> Vec<ClassifiedHit> {
    let mut merged: Vec<ClassifiedHit> = Vec::with_capacity(rows.len());
    let mut open: Option<ClassifiedHit> = None;

    for row in rows {
        open = match open.take() {
            Some(mut current) if current.hit_id() == row.hit_id() => {
                absorb(&mut current, row);
                Some(current)
            }
            Some(current) => {
                merged.push(current);
                Some(row)
            }
            None => Some(row),
        };
    }
    merged.extend(open);

    if let [only] = merged.as_mut_slice() {
        only.origin = Origin::Single;
    }

    merged
}
