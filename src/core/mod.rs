//! Core data types for contig origin assignment.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Hit`](hit::Hit): A single alignment of a contig against a reference genome
//! - [`ClassifiedHit`](hit::ClassifiedHit): A hit selected as evidence for a contig, labelled with its [`Origin`](types::Origin)
//! - [`CoverageRegion`](types::CoverageRegion): A merged span of the contig covered by overlapping alignments
//!
//! ## Coordinates
//!
//! All coordinates are 1-based and inclusive, as reported by BLAST (`qstart`/`qend`).
//! A hit covering the first 100 bases of a contig has `start = 1`, `end = 100`.

pub mod hit;
pub mod types;
