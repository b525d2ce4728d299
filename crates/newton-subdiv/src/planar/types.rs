//! Result type of face extraction.

use crate::lattice::Point;

/// Planar subdivision in `SubdivisionOfPoints` form.
///
/// Invariants:
/// - `points` is in first-seen order over the normalized segment set; each
///   segment endpoint appears exactly once.
/// - Every index in `maximal_cells` and `boundary` is `< points.len()`.
/// - Each cell is a simple cycle; the closing edge back to its first point is implicit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subdivision {
    pub points: Vec<Point>,
    pub maximal_cells: Vec<Vec<usize>>,
    /// Outer boundary walk, same index space as the cells.
    pub boundary: Vec<usize>,
}

impl Subdivision {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of cell `k` in walk order.
    pub fn cell_points(&self, k: usize) -> Option<Vec<Point>> {
        let cell = self.maximal_cells.get(k)?;
        cell.iter().map(|&i| self.points.get(i).copied()).collect()
    }

    /// Undirected index edges of a cycle, including the wraparound edge.
    pub fn cycle_edges(cycle: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..cycle.len()).map(move |k| {
            let (i, j) = (cycle[k], cycle[(k + 1) % cycle.len()]);
            (i.min(j), i.max(j))
        })
    }
}
