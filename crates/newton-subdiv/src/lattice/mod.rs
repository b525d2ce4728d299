//! Segment Normalizer: raw polylines to a minimal, deduplicated lattice segment set.
//!
//! Purpose
//! - Snap drawing coordinates onto a shared integer lattice (translate + floor-divide).
//! - Split every segment at interior lattice points so the resulting graph has
//!   no accidental intersections at lattice points other than declared vertices.
//! - Canonicalize orientation and drop duplicates.
//!
//! Code cross-refs: `planar::extract` consumes the output of `normalize`.

mod normalize;
mod types;

pub use normalize::{
    canonicalize_dedup, extract_segments, normalize, rescale, split_segment, RawSegment,
    DEFAULT_UNIT,
};
pub use types::{gcd, orient, Point, Polyline, Segment};
