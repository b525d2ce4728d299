//! Lattice polygonal subdivisions from segment soups.
//!
//! Pipeline
//! - `lattice`: snap raw polylines onto an integer lattice, split segments into
//!   primitive pieces, canonicalize and deduplicate.
//! - `planar`: build the rotation system, trace the outer boundary, then trace
//!   and consume interior faces into maximal cells.
//! - `api::subdivide` chains both stages and returns `{points, maximal_cells}`,
//!   the input format of a `SubdivisionOfPoints`.
//!
//! The crate performs no I/O; reading drawings and rendering scripts belong to
//! callers (see the `cli` crate).

pub mod api;
pub mod error;
pub mod gen;
pub mod lattice;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{subdivide, SubdivCfg};
pub use error::SubdivError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{subdivide, SubdivCfg};
    pub use crate::error::SubdivError;
    pub use crate::gen::{draw_grid, GridCfg, GridDraw, ReplayToken};
    pub use crate::lattice::{normalize, Point, Polyline, Segment, DEFAULT_UNIT};
    pub use crate::planar::{extract, Subdivision};
}
