//! Rotation system: per-vertex incident segments ordered by angle.
//!
//! Segments around a vertex are ordered by outgoing direction,
//! counter-clockwise starting from straight down (the direction turned a
//! quarter turn, read as an angle in `[0, 2π)`). Every vertex uses the same
//! convention. At the lexicographically smallest vertex the first entry is
//! therefore a lower hull edge.
//!
//! The order is decided with integer half-plane and cross-product tests, so
//! it is exact for any coordinates.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, SubdivError};
use crate::lattice::{orient, Point, Segment};

/// Direction of the circular step taken from the arriving segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Turn {
    /// Next entry counter-clockwise.
    Ccw,
    /// Next entry clockwise.
    Cw,
}

/// Reason a rotation lookup failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Miss {
    Vertex,
    Segment,
}

/// `0` for directions in `[down, up)` counter-clockwise (the right half-plane
/// plus straight down), `1` for `[up, down)`.
#[inline]
fn half(v: Point, w: Point) -> u8 {
    if w.x > v.x || (w.x == v.x && w.y < v.y) {
        0
    } else {
        1
    }
}

/// Counter-clockwise order from straight down of the segments `s`, `t` at `v`.
pub(crate) fn cmp_around(v: Point, s: &Segment, t: &Segment) -> Ordering {
    let (p, q) = (s.other(v), t.other(v));
    half(v, p)
        .cmp(&half(v, q))
        .then_with(|| orient(v, q, p))
}

/// Incidence map keyed by vertex; `BTreeMap` order makes the first key the
/// lexicographically smallest vertex with remaining segments.
#[derive(Clone, Debug, Default)]
pub(crate) struct Rotation {
    incident: BTreeMap<Point, Vec<Segment>>,
}

impl Rotation {
    /// Build incidence lists and sort each one by angle.
    pub fn build(segments: &[Segment]) -> Self {
        let mut incident: BTreeMap<Point, Vec<Segment>> = BTreeMap::new();
        for s in segments {
            for p in s.endpoints() {
                incident.entry(p).or_default().push(*s);
            }
        }
        for (v, list) in incident.iter_mut() {
            list.sort_by(|s, t| cmp_around(*v, s, t));
        }
        Self { incident }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    #[inline]
    pub fn degree(&self, v: Point) -> usize {
        self.incident.get(&v).map_or(0, Vec::len)
    }

    /// Incident segments of `v` in rotation order.
    #[inline]
    pub fn around(&self, v: Point) -> Option<&[Segment]> {
        self.incident.get(&v).map(Vec::as_slice)
    }

    /// Smallest remaining vertex and its smallest-angle segment.
    pub fn start(&self) -> Option<(Point, Segment)> {
        self.incident
            .iter()
            .find_map(|(v, list)| list.first().map(|s| (*v, *s)))
    }

    /// Every vertex must close at least one face on each side.
    pub fn check_degrees(&self) -> Result<()> {
        match self.incident.iter().find(|(_, list)| list.len() < 2) {
            Some((v, list)) => Err(SubdivError::DanglingVertex {
                point: *v,
                degree: list.len(),
            }),
            None => Ok(()),
        }
    }

    /// Every vertex must be reachable from the smallest one.
    pub fn check_connected(&self) -> Result<()> {
        let Some((&root, _)) = self.incident.first_key_value() else {
            return Ok(());
        };
        let mut seen: HashSet<Point> = HashSet::with_capacity(self.incident.len());
        seen.insert(root);
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for s in self.incident.get(&v).into_iter().flatten() {
                let w = s.other(v);
                if seen.insert(w) {
                    stack.push(w);
                }
            }
        }
        match self.incident.keys().find(|v| !seen.contains(v)) {
            Some(v) => Err(SubdivError::Disconnected { point: *v }),
            None => Ok(()),
        }
    }

    /// Circular neighbour of `arriving` in the rotation at `v`.
    pub(crate) fn turn(
        &self,
        v: Point,
        arriving: Segment,
        dir: Turn,
    ) -> std::result::Result<Segment, Miss> {
        let list = self.incident.get(&v).ok_or(Miss::Vertex)?;
        let pos = list
            .iter()
            .position(|s| *s == arriving)
            .ok_or(Miss::Segment)?;
        let n = list.len();
        let k = match dir {
            Turn::Ccw => (pos + 1) % n,
            Turn::Cw => (pos + n - 1) % n,
        };
        Ok(list[k])
    }

    /// Drop `s` from both endpoints; vertices left without segments disappear.
    pub fn remove(&mut self, s: Segment) {
        for p in s.endpoints() {
            if let Some(list) = self.incident.get_mut(&p) {
                if let Some(pos) = list.iter().position(|t| *t == s) {
                    list.remove(pos);
                }
                if list.is_empty() {
                    self.incident.remove(&p);
                }
            }
        }
    }
}
