//! Pipeline entry point and curated re-exports.
//!
//! `subdivide` chains the two stages: raw polylines are normalized onto the
//! lattice, then traced into faces. Each call owns its working state.

pub use crate::error::{Result, SubdivError};
pub use crate::lattice::{normalize, Point, Polyline, Segment, DEFAULT_UNIT};
pub use crate::planar::{extract, Subdivision};

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubdivCfg {
    /// Raw coordinate distance between adjacent lattice points; must be positive.
    pub unit: i64,
}

impl Default for SubdivCfg {
    fn default() -> Self {
        Self { unit: DEFAULT_UNIT }
    }
}

/// Normalize `polylines` and extract the planar subdivision they bound.
///
/// Pre: polylines are raw integer paths; `cfg.unit > 0`.
/// Post: empty or fully degenerate input gives an empty `Subdivision`.
pub fn subdivide(polylines: &[Polyline], cfg: SubdivCfg) -> Result<Subdivision> {
    let segments = normalize(polylines, cfg.unit)?;
    extract(&segments)
}
