//! Exact segment crossing test.
//!
//! Two segments cross when they meet anywhere other than at a shared
//! endpoint: a proper crossing, an endpoint lying inside the other segment, or
//! a collinear overlap.

use std::cmp::Ordering;

use crate::lattice::{orient, Point, Segment};

/// `p` lies on the closed box of `a..b` but is neither endpoint. Callers
/// guarantee `p` is collinear with `a`, `b`.
#[inline]
fn strictly_inside(a: Point, b: Point, p: Point) -> bool {
    p != a
        && p != b
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}

pub(crate) fn crosses(s: &Segment, t: &Segment) -> bool {
    let (a, b, c, d) = (s.a(), s.b(), t.a(), t.b());
    let (d1, d2) = (orient(a, b, c), orient(a, b, d));
    let (d3, d4) = (orient(c, d, a), orient(c, d, b));
    let strict = |x: Ordering, y: Ordering| {
        x != Ordering::Equal && y != Ordering::Equal && x != y
    };
    if strict(d1, d2) && strict(d3, d4) {
        return true;
    }
    (d1 == Ordering::Equal && strictly_inside(a, b, c))
        || (d2 == Ordering::Equal && strictly_inside(a, b, d))
        || (d3 == Ordering::Equal && strictly_inside(c, d, a))
        || (d4 == Ordering::Equal && strictly_inside(c, d, b))
}

/// First crossing pair in segment order, or `None` for a plane embedding.
///
/// Sweeps over segments sorted by their smaller endpoint; a later segment can
/// only meet `s` while its left end is not right of `s.b()`.
pub(crate) fn first_crossing(segments: &[Segment]) -> Option<(Segment, Segment)> {
    let mut order = segments.to_vec();
    order.sort_unstable();
    for (i, s) in order.iter().enumerate() {
        for t in &order[i + 1..] {
            if t.a().x > s.b().x {
                break;
            }
            if crosses(s, t) {
                return Some((*s, *t));
            }
        }
    }
    None
}
