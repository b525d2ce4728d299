//! Segment normalization: extract → rescale → split → canonicalize + dedup.
//!
//! The output is a sorted set of primitive lattice segments: no segment has a
//! lattice point strictly between its endpoints, and no two segments coincide.

use tracing::debug;

use super::types::{gcd, Point, Polyline, Segment};
use crate::error::{Result, SubdivError};

/// Default lattice unit (raw coordinate distance between adjacent lattice points).
pub const DEFAULT_UNIT: i64 = 16;

/// Directed raw segment, remembering which polyline it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSegment {
    pub polyline: usize,
    pub from: Point,
    pub to: Point,
}

/// One raw segment per consecutive pair of points in each polyline.
///
/// Repeated consecutive points are collapsed first, so a polyline made of a
/// single (possibly repeated) point contributes nothing.
pub fn extract_segments(polylines: &[Polyline]) -> Vec<RawSegment> {
    let mut out = Vec::new();
    for (k, line) in polylines.iter().enumerate() {
        let mut pts = line.points.clone();
        pts.dedup();
        out.extend(pts.windows(2).map(|w| RawSegment {
            polyline: k,
            from: w[0],
            to: w[1],
        }));
    }
    out
}

/// Translate by `(-minX, -minY)` and floor-divide by `unit`.
pub fn rescale(segments: &[RawSegment], unit: i64) -> Result<Vec<RawSegment>> {
    if unit <= 0 {
        return Err(SubdivError::InvalidUnit { unit });
    }
    let Some(first) = segments.first() else {
        return Ok(Vec::new());
    };
    let (mut min_x, mut min_y) = (first.from.x, first.from.y);
    for s in segments {
        for p in [s.from, s.to] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }
    }
    // Offsets are non-negative but may exceed `i64::MAX` before division.
    let snap = |v: i64, min: i64| {
        i64::try_from((v as i128 - min as i128).div_euclid(unit as i128))
    };
    let map = |polyline: usize, p: Point| -> Result<Point> {
        match (snap(p.x, min_x), snap(p.y, min_y)) {
            (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
            _ => Err(SubdivError::CoordinateOverflow { polyline, point: p }),
        }
    };
    segments
        .iter()
        .map(|s| {
            Ok(RawSegment {
                polyline: s.polyline,
                from: map(s.polyline, s.from)?,
                to: map(s.polyline, s.to)?,
            })
        })
        .collect()
}

/// Split a rescaled segment into `gcd(|dx|, |dy|)` primitive sub-segments.
///
/// Sub-segments are returned in walk order from `from` to `to`, already in
/// canonical orientation.
pub fn split_segment(s: &RawSegment) -> Result<Vec<Segment>> {
    let overflow = SubdivError::CoordinateOverflow {
        polyline: s.polyline,
        point: s.from,
    };
    let (Some(dx), Some(dy)) = (
        s.to.x.checked_sub(s.from.x),
        s.to.y.checked_sub(s.from.y),
    ) else {
        return Err(overflow);
    };
    let g = gcd(dx, dy);
    if g == 0 {
        return Err(SubdivError::DegenerateSegment {
            polyline: s.polyline,
            point: s.from,
        });
    }
    let g = i64::try_from(g).map_err(|_| overflow)?;
    let (sx, sy) = (dx / g, dy / g);
    let at = |i: i64| Point::new(s.from.x + sx * i, s.from.y + sy * i);
    (0..g)
        .map(|i| {
            // Consecutive points differ by a non-zero step, so this never fails.
            Segment::new(at(i), at(i + 1)).ok_or(SubdivError::DegenerateSegment {
                polyline: s.polyline,
                point: at(i),
            })
        })
        .collect()
}

/// Sort by `(x1, y1, x2, y2)` and drop repeats.
pub fn canonicalize_dedup(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_unstable();
    segments.dedup();
    segments
}

/// Full normalization pipeline.
pub fn normalize(polylines: &[Polyline], unit: i64) -> Result<Vec<Segment>> {
    let raw = extract_segments(polylines);
    let scaled = rescale(&raw, unit)?;
    let mut split = Vec::with_capacity(scaled.len());
    for s in &scaled {
        split.extend(split_segment(s)?);
    }
    let n_split = split.len();
    let out = canonicalize_dedup(split);
    debug!(
        polylines = polylines.len(),
        raw = raw.len(),
        split = n_split,
        unique = out.len(),
        "normalized segments"
    );
    Ok(out)
}
