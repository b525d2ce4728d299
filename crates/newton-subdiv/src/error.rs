//! Error type shared by the normalizer and the face extractor.

use thiserror::Error;

use crate::lattice::{Point, Segment};

/// Failures reported by [`crate::api::subdivide`] and its stages.
///
/// Empty input is not an error: it yields an empty [`crate::planar::Subdivision`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubdivError {
    /// Rescale unit must be strictly positive.
    #[error("invalid rescale unit {unit}: must be positive")]
    InvalidUnit { unit: i64 },

    /// Both endpoints of a raw segment land on the same lattice point.
    #[error("degenerate segment in polyline {polyline}: both endpoints rescale to {point}")]
    DegenerateSegment { polyline: usize, point: Point },

    /// A coordinate or coordinate difference leaves the `i64` range.
    #[error("coordinate overflow in polyline {polyline} at {point}")]
    CoordinateOverflow { polyline: usize, point: Point },

    /// A vertex with fewer than two incident segments (dangling edge).
    #[error("vertex {point} has degree {degree}, expected at least 2")]
    DanglingVertex { point: Point, degree: usize },

    /// A vertex not reachable from the outer boundary's start vertex.
    #[error("vertex {point} is not connected to the outer boundary")]
    Disconnected { point: Point },

    /// A vertex expected in the incidence structure is missing.
    #[error("inconsistent graph: no incidence entry for vertex {point}")]
    InconsistentGraph { point: Point },

    /// The outer boundary walk repeats a segment or falls off the rotation system.
    #[error("malformed boundary at {point} via segment {segment}")]
    MalformedBoundary { point: Point, segment: Segment },

    /// An interior walk revisits a point or falls off the rotation system.
    #[error("malformed cell at {point} via segment {segment}")]
    MalformedCell { point: Point, segment: Segment },
}

/// Result type for subdivision operations.
pub type Result<T> = std::result::Result<T, SubdivError>;
