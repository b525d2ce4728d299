//! Face tracing over a rotation system.
//!
//! - Boundary pass: walk the outer face once, marking every segment on it.
//! - Interior passes: repeatedly walk a face from the smallest remaining
//!   vertex, toggling each traversed segment; a segment seen for the second
//!   time is removed, so every segment is consumed by exactly two walks.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::crossing::first_crossing;
use super::rotation::{Miss, Rotation, Turn};
use super::types::Subdivision;
use crate::error::{Result, SubdivError};
use crate::lattice::{Point, Segment};

/// Build the subdivision of a normalized segment set.
///
/// Empty input yields an empty `Subdivision`. Segments that meet away from a
/// shared endpoint are rejected with `MalformedCell`, even when every walk
/// closes. Working state lives only for the duration of the call.
pub fn extract(segments: &[Segment]) -> Result<Subdivision> {
    if segments.is_empty() {
        return Ok(Subdivision::default());
    }
    let mut index: HashMap<Point, usize> = HashMap::with_capacity(segments.len() + 1);
    let mut points: Vec<Point> = Vec::with_capacity(segments.len() + 1);
    for s in segments {
        for p in s.endpoints() {
            index.entry(p).or_insert_with(|| {
                points.push(p);
                points.len() - 1
            });
        }
    }

    let mut rotation = Rotation::build(segments);
    rotation.check_degrees()?;
    rotation.check_connected()?;

    // Each walk consumes at least one fresh segment use, and there are at most
    // two uses per segment.
    let cap = 2 * segments.len();
    let mut marked: HashSet<Segment> = HashSet::with_capacity(segments.len());

    let boundary = trace_boundary(&rotation, &mut marked, cap)?;
    debug!(len = boundary.len(), "boundary traced");

    let mut cells = Vec::new();
    while let Some((start, first)) = rotation.start() {
        let cell = trace_cell(&mut rotation, &mut marked, start, first, cap)?;
        trace!(start = %start, len = cell.len(), "cell traced");
        cells.push(cell);
    }
    if let Some((s, t)) = first_crossing(segments) {
        debug!(segment = %s, other = %t, "segments cross");
        return Err(SubdivError::MalformedCell {
            point: s.a(),
            segment: s,
        });
    }
    debug!(
        points = points.len(),
        segments = segments.len(),
        cells = cells.len(),
        "faces extracted"
    );

    let to_index = |walk: Vec<Point>| -> Result<Vec<usize>> {
        walk.into_iter()
            .map(|p| {
                index
                    .get(&p)
                    .copied()
                    .ok_or(SubdivError::InconsistentGraph { point: p })
            })
            .collect()
    };
    let boundary = to_index(boundary)?;
    let maximal_cells = cells
        .into_iter()
        .map(to_index)
        .collect::<Result<Vec<_>>>()?;
    Ok(Subdivision {
        points,
        maximal_cells,
        boundary,
    })
}

/// Walk the outer face from the extremal vertex, marking its segments.
pub(super) fn trace_boundary(
    rotation: &Rotation,
    marked: &mut HashSet<Segment>,
    cap: usize,
) -> Result<Vec<Point>> {
    let Some((start, mut seg)) = rotation.start() else {
        return Ok(Vec::new());
    };
    let mut cur = start;
    let mut walk = Vec::new();
    for _ in 0..cap {
        walk.push(cur);
        if !marked.insert(seg) {
            return Err(SubdivError::MalformedBoundary {
                point: cur,
                segment: seg,
            });
        }
        cur = seg.other(cur);
        if cur == start {
            return Ok(walk);
        }
        seg = rotation
            .turn(cur, seg, Turn::Ccw)
            .map_err(move |miss| match miss {
                Miss::Vertex => SubdivError::InconsistentGraph { point: cur },
                Miss::Segment => SubdivError::MalformedBoundary {
                    point: cur,
                    segment: seg,
                },
            })?;
    }
    Err(SubdivError::MalformedBoundary {
        point: cur,
        segment: seg,
    })
}

/// Walk one interior face, toggling segment marks as it goes.
///
/// The next segment is looked up before the current one is toggled, so a
/// segment removed on its second use is never needed by the same step.
pub(super) fn trace_cell(
    rotation: &mut Rotation,
    marked: &mut HashSet<Segment>,
    start: Point,
    first: Segment,
    cap: usize,
) -> Result<Vec<Point>> {
    let mut cell = Vec::new();
    let mut seen: HashSet<Point> = HashSet::new();
    let (mut cur, mut seg) = (start, first);
    for _ in 0..cap {
        cell.push(cur);
        seen.insert(cur);
        let next = seg.other(cur);
        let closed = next == start;
        let next_seg = if closed {
            None
        } else {
            if seen.contains(&next) {
                return Err(SubdivError::MalformedCell {
                    point: next,
                    segment: seg,
                });
            }
            let found = rotation
                .turn(next, seg, Turn::Cw)
                .map_err(move |miss| match miss {
                    Miss::Vertex => SubdivError::InconsistentGraph { point: next },
                    Miss::Segment => SubdivError::MalformedCell {
                        point: next,
                        segment: seg,
                    },
                })?;
            Some(found)
        };
        if !marked.insert(seg) {
            marked.remove(&seg);
            rotation.remove(seg);
        }
        cur = next;
        match next_seg {
            None => return Ok(cell),
            Some(s) => seg = s,
        }
    }
    Err(SubdivError::MalformedCell {
        point: cur,
        segment: seg,
    })
}
