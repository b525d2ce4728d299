//! Lattice value types: `Point`, `Segment`, `Polyline`.
//!
//! - `Point`: integer lattice point, ordered lexicographically (x, then y).
//! - `Segment`: unordered pair of distinct points, stored smaller endpoint first.
//! - `Polyline`: raw input path before rescaling.

use std::cmp::Ordering;
use std::fmt;

/// Integer lattice point. Field order makes the derived `Ord` lexicographic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Undirected segment in canonical orientation (`a < b`).
///
/// Fields are private so the orientation invariant cannot be broken; equality
/// and ordering are then plain structural comparisons on `(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Canonical segment between two points; `None` if they coincide.
    #[inline]
    pub fn new(p: Point, q: Point) -> Option<Self> {
        match p.cmp(&q) {
            Ordering::Less => Some(Self { a: p, b: q }),
            Ordering::Greater => Some(Self { a: q, b: p }),
            Ordering::Equal => None,
        }
    }

    /// Lexicographically smaller endpoint.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Lexicographically larger endpoint.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }

    /// Endpoint opposite to `p`. Callers pass one of the two endpoints.
    #[inline]
    pub fn other(&self, p: Point) -> Point {
        if self.a == p {
            self.b
        } else {
            self.a
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.a, self.b)
    }
}

/// Raw input path: consecutive integer coordinate pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<P: Into<Point>> FromIterator<P> for Polyline {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, n) = |n|`, `gcd(0, 0) = 0`.
///
/// Unsigned so that `gcd(i64::MIN, 0) = 2^63` is representable.
#[inline]
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Sign of the cross product `(p - o) × (q - o)`, exact for all `i64` points.
///
/// `Greater` means `q` lies counter-clockwise of `p` as seen from `o`.
pub fn orient(o: Point, p: Point, q: Point) -> Ordering {
    // Differences fit in 65 bits; their magnitudes multiply within u128.
    let (ax, ay) = (p.x as i128 - o.x as i128, p.y as i128 - o.y as i128);
    let (bx, by) = (q.x as i128 - o.x as i128, q.y as i128 - o.y as i128);
    cmp_products(mul_signed(ax, by), mul_signed(ay, bx))
}

/// `a * b` as (is negative, magnitude).
#[inline]
fn mul_signed(a: i128, b: i128) -> (bool, u128) {
    let mag = a.unsigned_abs() * b.unsigned_abs();
    (mag != 0 && (a < 0) != (b < 0), mag)
}

#[inline]
fn cmp_products(l: (bool, u128), r: (bool, u128)) -> Ordering {
    match (l.0, r.0) {
        (false, false) => l.1.cmp(&r.1),
        (true, true) => r.1.cmp(&l.1),
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
    }
}
