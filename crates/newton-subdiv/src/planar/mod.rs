//! Planar Face Extractor: rotation system, outer boundary, interior maximal cells.
//!
//! Purpose
//! - Order the segments around every vertex by angle (rotation system).
//! - Trace the outer face from the lexicographically smallest vertex, then
//!   trace and consume interior faces until no segment is left.
//! - Report cells as index cycles into a first-seen point list.
//!
//! Model
//! - A walk that always turns to the neighbouring segment in the rotation
//!   follows exactly one face; no geometry is needed beyond the angle sort.
//! - The boundary walk steps counter-clockwise, interior walks clockwise.
//! - Segments are marked on first use and removed on second use, so the
//!   smallest remaining vertex always lies on an untraced face.
//! - Walks alone cannot tell a crossing from a vertex; a finished extraction
//!   is rejected if any two segments meet away from a shared endpoint.
//!
//! Code cross-refs: `lattice::normalize` produces the input; `api::subdivide`
//! chains both stages.

mod crossing;
mod rotation;
mod trace;
mod types;

pub use trace::extract;
pub use types::Subdivision;

#[cfg(test)]
mod tests;
