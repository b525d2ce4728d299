use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::crossing::{crosses, first_crossing};
use super::rotation::{cmp_around, Rotation, Turn};
use super::trace::{trace_boundary, trace_cell};
use super::*;
use crate::error::SubdivError;
use crate::gen::{draw_grid, GridCfg, ReplayToken};
use crate::lattice::{normalize, Point, Polyline, Segment};

fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(a.into(), b.into()).unwrap()
}

fn lines(paths: &[&[(i64, i64)]]) -> Vec<Polyline> {
    paths.iter().map(|l| l.iter().copied().collect()).collect()
}

fn subdivision_of(paths: &[&[(i64, i64)]]) -> Result<Subdivision, SubdivError> {
    extract(&normalize(&lines(paths), 1)?)
}

const SQUARE: &[(i64, i64)] = &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)];

#[test]
fn rotation_is_ccw_from_down() {
    let spokes = [(1, 0), (2, 1), (1, 2), (0, 1), (2, 0), (0, 0)];
    let segments: Vec<Segment> = spokes.iter().map(|&q| seg((1, 1), q)).collect();
    let rot = Rotation::build(&segments);
    let order: Vec<Point> = rot
        .around(p(1, 1))
        .unwrap()
        .iter()
        .map(|s| s.other(p(1, 1)))
        .collect();
    assert_eq!(
        order,
        vec![p(1, 0), p(2, 0), p(2, 1), p(1, 2), p(0, 1), p(0, 0)]
    );
    assert_eq!(rot.degree(p(1, 1)), 6);
    assert_eq!(rot.degree(p(2, 0)), 1);
    assert_eq!(rot.start(), Some((p(0, 0), seg((0, 0), (1, 1)))));
}

#[test]
fn turn_wraps_around() {
    let segments = [seg((1, 1), (1, 0)), seg((1, 1), (2, 1)), seg((1, 1), (0, 0))];
    let rot = Rotation::build(&segments);
    let c = p(1, 1);
    assert_eq!(rot.turn(c, segments[0], Turn::Ccw), Ok(segments[1]));
    assert_eq!(rot.turn(c, segments[2], Turn::Ccw), Ok(segments[0]));
    assert_eq!(rot.turn(c, segments[0], Turn::Cw), Ok(segments[2]));
    assert!(rot.turn(p(5, 5), segments[0], Turn::Cw).is_err());
    assert!(rot.turn(c, seg((1, 1), (1, 2)), Turn::Cw).is_err());
}

#[test]
fn rotation_order_is_exact_for_large_coordinates() {
    let o = p(0, 0);
    let near_right = seg((0, 0), (100_000_000_000_000_001, 1));
    let less_right = seg((0, 0), (100_000_000_000_000_000, 1));
    let down = seg((0, 0), (0, -3));
    assert_eq!(cmp_around(o, &near_right, &less_right), Ordering::Less);
    let rot = Rotation::build(&[less_right, down, near_right]);
    assert_eq!(rot.around(o).unwrap(), &[down, near_right, less_right]);
}

#[test]
fn remove_drops_isolated_vertices() {
    let segments = [seg((0, 0), (1, 0)), seg((1, 0), (1, 1))];
    let mut rot = Rotation::build(&segments);
    rot.remove(segments[0]);
    assert!(rot.around(p(0, 0)).is_none());
    assert_eq!(rot.degree(p(1, 0)), 1);
    rot.remove(segments[1]);
    assert!(rot.is_empty());
    assert_eq!(rot.start(), None);
}

#[test]
fn empty_segment_set_gives_empty_subdivision() {
    assert_eq!(extract(&[]).unwrap(), Subdivision::default());
}

#[test]
fn unit_square() {
    let sub = subdivision_of(&[SQUARE]).unwrap();
    assert_eq!(sub.points, vec![p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);
    assert_eq!(sub.maximal_cells, vec![vec![0, 2, 3, 1]]);
    assert_eq!(sub.boundary, vec![0, 2, 3, 1]);
    assert_eq!(
        sub.cell_points(0).unwrap(),
        vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)]
    );
}

#[test]
fn square_with_diagonal() {
    let sub = subdivision_of(&[SQUARE, &[(0, 0), (1, 1)]]).unwrap();
    assert_eq!(sub.maximal_cells, vec![vec![0, 2, 3], vec![0, 3, 1]]);
}

#[test]
fn hexagon_fan_has_six_triangles() {
    let hex: &[(i64, i64)] = &[(0, 0), (1, 0), (2, 1), (2, 2), (1, 2), (0, 1), (0, 0)];
    let mut paths: Vec<&[(i64, i64)]> = vec![hex];
    let spokes: Vec<[(i64, i64); 2]> = hex[..6].iter().map(|&q| [(1, 1), q]).collect();
    paths.extend(spokes.iter().map(|s| &s[..]));
    let sub = subdivision_of(&paths).unwrap();
    assert_eq!(
        sub.maximal_cells,
        vec![
            vec![0, 2, 3],
            vec![0, 3, 1],
            vec![1, 3, 4],
            vec![2, 5, 3],
            vec![3, 5, 6],
            vec![3, 6, 4]
        ]
    );
    assert_eq!(sub.boundary.len(), 6);
}

#[test]
fn non_convex_outline_is_one_cell() {
    let l_shape: &[(i64, i64)] = &[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2), (0, 0)];
    let sub = subdivision_of(&[l_shape]).unwrap();
    assert_eq!(sub.maximal_cells, vec![vec![0, 2, 5, 7, 6, 4, 3, 1]]);
}

#[test]
fn squares_touching_at_a_corner() {
    let upper: &[(i64, i64)] = &[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)];
    let sub = subdivision_of(&[SQUARE, upper]).unwrap();
    assert_eq!(sub.maximal_cells, vec![vec![0, 2, 3, 1], vec![3, 5, 6, 4]]);
    // The pinch vertex is walked twice by the boundary.
    assert_eq!(sub.boundary.len(), 8);
}

#[test]
fn dangling_edge_is_rejected() {
    let err = subdivision_of(&[SQUARE, &[(1, 1), (2, 2)]]).unwrap_err();
    assert_eq!(
        err,
        SubdivError::DanglingVertex {
            point: p(2, 2),
            degree: 1
        }
    );
}

#[test]
fn separate_components_are_rejected() {
    let far: &[(i64, i64)] = &[(3, 0), (4, 0), (4, 1), (3, 1), (3, 0)];
    let err = subdivision_of(&[SQUARE, far]).unwrap_err();
    assert_eq!(err, SubdivError::Disconnected { point: p(3, 0) });

    let outer: &[(i64, i64)] = &[(0, 0), (3, 0), (3, 3), (0, 3), (0, 0)];
    let inner: &[(i64, i64)] = &[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)];
    let err = subdivision_of(&[outer, inner]).unwrap_err();
    assert_eq!(err, SubdivError::Disconnected { point: p(1, 1) });
}

#[test]
fn unsplit_crossing_fails_in_cell_trace() {
    let err = subdivision_of(&[SQUARE, &[(0, 0), (1, 1)], &[(0, 1), (1, 0)]]).unwrap_err();
    assert!(
        matches!(err, SubdivError::MalformedCell { point, .. } if point == p(1, 1)),
        "unexpected error: {err}"
    );
}

#[test]
fn unsplit_crossing_fails_in_boundary_trace() {
    let segments = [
        seg((0, 1), (1, 0)),
        seg((0, 1), (1, 1)),
        seg((0, 2), (1, 0)),
        seg((0, 2), (1, 2)),
        seg((1, 0), (2, 1)),
        seg((1, 1), (2, 1)),
        seg((1, 2), (2, 2)),
        seg((2, 1), (2, 2)),
    ];
    let err = extract(&segments).unwrap_err();
    assert!(
        matches!(err, SubdivError::MalformedBoundary { segment, .. } if segment == segments[0]),
        "unexpected error: {err}"
    );
}

#[test]
fn crossing_kinds() {
    let diag = seg((0, 0), (2, 2));
    assert!(crosses(&diag, &seg((0, 2), (2, 0))));
    // Endpoint in the interior of the other segment.
    assert!(crosses(&diag, &seg((1, 1), (3, 0))));
    // Collinear overlap.
    assert!(crosses(&diag, &seg((1, 1), (3, 3))));
    assert!(!crosses(&diag, &seg((2, 2), (3, 3))));
    assert!(!crosses(&diag, &seg((0, 0), (2, 0))));
    assert!(!crosses(&diag, &seg((1, 0), (3, 1))));
    assert_eq!(first_crossing(&[diag, seg((3, 0), (4, 4))]), None);
}

#[test]
fn traceable_crossing_is_rejected() {
    // Both walks close, but (2,1)-(3,2) crosses (2,3)-(3,1) at (8/3, 5/3) and
    // (0,0)-(3,2) crosses (2,3)-(3,1) at (21/8, 7/4).
    let segments = [
        seg((0, 0), (2, 1)),
        seg((0, 0), (3, 2)),
        seg((2, 1), (3, 1)),
        seg((2, 1), (3, 2)),
        seg((2, 3), (3, 1)),
        seg((2, 3), (3, 2)),
    ];
    assert_eq!(
        extract(&segments).unwrap_err(),
        SubdivError::MalformedCell {
            point: p(0, 0),
            segment: seg((0, 0), (3, 2))
        }
    );
}

#[test]
fn boundary_trace_stops_at_step_limit() {
    let segments = normalize(&lines(&[SQUARE]), 1).unwrap();
    let rot = Rotation::build(&segments);
    let mut marked = HashSet::new();
    assert_eq!(
        trace_boundary(&rot, &mut marked, 2).unwrap_err(),
        SubdivError::MalformedBoundary {
            point: p(1, 1),
            segment: seg((0, 1), (1, 1))
        }
    );
    let mut marked = HashSet::new();
    assert_eq!(trace_boundary(&rot, &mut marked, 4).unwrap().len(), 4);
}

#[test]
fn cell_trace_stops_at_step_limit() {
    let segments = normalize(&lines(&[SQUARE]), 1).unwrap();
    let mut rot = Rotation::build(&segments);
    let mut marked = HashSet::new();
    let err = trace_cell(&mut rot, &mut marked, p(0, 0), seg((0, 0), (1, 0)), 2).unwrap_err();
    assert_eq!(
        err,
        SubdivError::MalformedCell {
            point: p(1, 1),
            segment: seg((0, 1), (1, 1))
        }
    );
    // Segments walked before the limit were marked, none removed.
    assert_eq!(marked.len(), 2);
    assert_eq!(rot.degree(p(1, 0)), 2);
}

/// Checks edge use, closure and index consistency of a finished subdivision.
fn assert_well_formed(sub: &Subdivision, segments: &[Segment]) {
    let n = sub.points.len();
    let index: HashMap<Point, usize> = sub.points.iter().enumerate().map(|(i, q)| (*q, i)).collect();
    assert_eq!(index.len(), n, "points must be distinct");

    let mut referenced = vec![false; n];
    let mut uses: HashMap<(usize, usize), usize> = HashMap::new();
    for cell in &sub.maximal_cells {
        assert!(cell.len() >= 3);
        let mut sorted = cell.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), cell.len(), "cell revisits a point");
        for &i in cell {
            assert!(i < n);
            referenced[i] = true;
        }
        for e in Subdivision::cycle_edges(cell) {
            *uses.entry(e).or_default() += 1;
        }
    }
    let boundary: Vec<(usize, usize)> = Subdivision::cycle_edges(&sub.boundary).collect();
    for &i in &sub.boundary {
        referenced[i] = true;
    }
    assert!(referenced.iter().all(|r| *r));

    for s in segments {
        let (i, j) = (index[&s.a()], index[&s.b()]);
        let key = (i.min(j), i.max(j));
        let on_boundary = boundary.iter().filter(|e| **e == key).count();
        let in_cells = uses.get(&key).copied().unwrap_or(0);
        assert!(on_boundary <= 1);
        assert_eq!(on_boundary + in_cells, 2, "segment {s} used wrongly");
    }
    let total: usize = uses.values().sum::<usize>() + boundary.len();
    assert_eq!(total, 2 * segments.len(), "cells use a non-segment edge");
}

#[test]
fn random_grids_are_well_formed() {
    for index in 0..64 {
        let tok = ReplayToken { seed: 2024, index };
        let cfg = GridCfg {
            width: 1 + (index as usize % 5),
            height: 1 + (index as usize / 5 % 4),
            origin: Point::new(-37 * index as i64, 11 * index as i64),
            ..GridCfg::default()
        };
        let draw = draw_grid(cfg, tok);
        let segments = normalize(&draw.polylines, cfg.unit).unwrap();
        assert_eq!(segments.len(), draw.expected_segments);
        let sub = extract(&segments).unwrap();
        assert_eq!(sub.maximal_cells.len(), draw.expected_cells);
        assert_well_formed(&sub, &segments);
    }
}

#[test]
fn fan_shapes_are_well_formed() {
    let tri: &[(i64, i64)] = &[(0, 0), (3, 0), (0, 3), (0, 0)];
    let paths: &[&[(i64, i64)]] = &[tri, &[(0, 0), (1, 1)], &[(3, 0), (1, 1)], &[(0, 3), (1, 1)]];
    let segments = normalize(&lines(paths), 1).unwrap();
    let sub = extract(&segments).unwrap();
    assert_eq!(sub.maximal_cells.len(), 3);
    assert_well_formed(&sub, &segments);
}
