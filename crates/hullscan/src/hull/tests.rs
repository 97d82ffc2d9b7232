use super::*;
use crate::cloud::{draw_cloud, CloudCfg, CountDist, ReplayToken};
use crate::error::Degeneracy;
use std::collections::HashSet;

fn pts(xy: &[(i32, i32)]) -> Vec<Point> {
    xy.iter().copied().map(Point::from).collect()
}

/// Checks every documented property of a hull against its input.
fn assert_valid_hull(input: &[Point], hull: &Hull) {
    let v = hull.vertices();
    assert!(v.len() >= 4, "hull too short: {v:?}");
    assert_eq!(v.first(), v.last());
    assert_eq!(hull.pivot(), v[0]);
    let lowest = input.iter().min_by_key(|p| (p.y, p.x)).unwrap();
    assert_eq!(hull.pivot(), *lowest);

    // no clockwise turn, including the wrap-around at the pivot
    let open = hull.open_vertices();
    let m = open.len();
    for k in 0..m {
        let (a, b, c) = (open[k], open[(k + 1) % m], open[(k + 2) % m]);
        assert_ne!(classify_turn(a, b, c), Turn::Clockwise, "{a} {b} {c} in {v:?}");
    }
    // simple: every vertex distinct
    let uniq: HashSet<Point> = open.iter().copied().collect();
    assert_eq!(uniq.len(), m, "repeated vertex in {v:?}");
    assert!(hull.twice_area() > 0);

    let input_set: HashSet<Point> = input.iter().copied().collect();
    assert!(uniq.is_subset(&input_set));
    for &p in input {
        match hull.locate(p) {
            Containment::Outside => panic!("{p} outside {v:?}"),
            // collinear boundary points are kept as vertices
            Containment::Boundary => assert!(uniq.contains(&p), "{p} on boundary but dropped"),
            Containment::Inside => assert!(!uniq.contains(&p)),
        }
    }
}

#[test]
fn square_with_interior_point() {
    let input = pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]).as_slice());
    assert_eq!(hull.locate(Point::new(2, 2)), Containment::Inside);
    assert_eq!(hull.twice_area(), 32);
    assert!((hull.perimeter() - 16.0).abs() < 1e-12);
    assert_valid_hull(&input, &hull);
}

#[test]
fn collinear_base_points_are_retained() {
    let input = pts(&[(0, 0), (2, 0), (4, 0), (2, 4)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (2, 0), (4, 0), (2, 4), (0, 0)]).as_slice());
    assert_valid_hull(&input, &hull);
}

#[test]
fn collinear_points_on_the_closing_edge_are_retained() {
    let input = pts(&[(0, 3), (0, 0), (4, 0), (4, 4), (0, 4), (0, 1), (2, 2)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(
        hull.vertices(),
        pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 3), (0, 1), (0, 0)]).as_slice()
    );
    assert_valid_hull(&input, &hull);
}

#[test]
fn collinear_points_on_every_edge() {
    let input = pts(&[(0, 0), (1, 0), (2, 0), (1, 1), (0, 2), (0, 1)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(
        hull.vertices(),
        pts(&[(0, 0), (1, 0), (2, 0), (1, 1), (0, 2), (0, 1), (0, 0)]).as_slice()
    );
    assert_valid_hull(&input, &hull);
}

#[test]
fn duplicates_collapse() {
    let input = pts(&[(0, 0), (0, 0), (4, 0), (4, 4), (0, 4), (4, 4)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]).as_slice());
    assert_eq!(compute_hull(&input[1..5]).unwrap().vertices(), hull.vertices());
}

#[test]
fn backtracking_pops_interior_candidates() {
    // (3,1) and (2,2) are accepted first and later proven interior
    let input = pts(&[(0, 0), (4, 0), (3, 1), (2, 2), (4, 4), (0, 4), (1, 3)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]).as_slice());
    let stats = hull.stats();
    assert!(stats.pops >= 2, "{stats:?}");
    // every push is either popped or part of the closed result
    assert_eq!(stats.pushes - stats.pops, hull.vertices().len());
    assert_valid_hull(&input, &hull);
}

#[test]
fn backtracking_unwinds_to_the_seed() {
    // each concave head is popped until only `pivot, (4,0)` remain below it
    let input = pts(&[(0, 0), (4, 0), (2, 1), (1, 2), (0, 4)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (4, 0), (0, 4), (0, 0)]).as_slice());
    assert_eq!(hull.stats(), ScanStats { pushes: 6, pops: 2 });
    assert_valid_hull(&input, &hull);

    // interior points on x*y = 64 bow toward the pivot; every one is pushed then popped
    let mut fan = pts(&[(0, 0), (64, 0), (0, 64)]);
    fan.extend(pts(&[(32, 2), (16, 4), (8, 8), (4, 16), (2, 32)]));
    let hull = compute_hull(&fan).unwrap();
    assert_eq!(hull.open_vertices(), pts(&[(0, 0), (64, 0), (0, 64)]).as_slice());
    assert_eq!(hull.stats().pops, 5);
    assert_eq!(hull.stats().pushes - hull.stats().pops, 4);
    assert_valid_hull(&fan, &hull);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert_eq!(compute_hull(&[]), Err(HullError::InvalidInput));
    assert_eq!(
        compute_hull(&pts(&[(5, 5)])),
        Err(HullError::DegenerateInput(Degeneracy::TooFewPoints { unique: 1 }))
    );
    assert_eq!(
        compute_hull(&pts(&[(5, 5), (1, 2), (5, 5)])),
        Err(HullError::DegenerateInput(Degeneracy::TooFewPoints { unique: 2 }))
    );
    assert_eq!(
        compute_hull(&pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])),
        Err(HullError::DegenerateInput(Degeneracy::AllCollinear))
    );
    assert_eq!(
        compute_hull(&pts(&[(3, 3), (0, 0), (3, 3), (-6, -6)])),
        Err(HullError::DegenerateInput(Degeneracy::AllCollinear))
    );
}

#[test]
fn tuple_wrapper_matches() {
    let out = compute_hull_xy(&[(2, 2), (0, 0), (4, 0), (0, 4), (4, 4)]).unwrap();
    assert_eq!(out, vec![(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]);
    assert_eq!(compute_hull_xy(&[]), Err(HullError::InvalidInput));
}

#[test]
fn extreme_coordinates() {
    let (lo, hi) = (i32::MIN, i32::MAX);
    let input = pts(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi), (0, 0), (hi, 0)]);
    let hull = compute_hull(&input).unwrap();
    assert_eq!(
        hull.vertices(),
        pts(&[(lo, lo), (hi, lo), (hi, 0), (hi, hi), (lo, hi), (lo, lo)]).as_slice()
    );
    assert_valid_hull(&input, &hull);
}

#[test]
fn locate_classifies_points() {
    let hull = compute_hull(&pts(&[(0, 0), (6, 0), (0, 6)])).unwrap();
    assert_eq!(hull.locate(Point::new(1, 1)), Containment::Inside);
    assert_eq!(hull.locate(Point::new(3, 3)), Containment::Boundary);
    assert_eq!(hull.locate(Point::new(0, 0)), Containment::Boundary);
    assert_eq!(hull.locate(Point::new(4, 4)), Containment::Outside);
    // on the line of an edge, past its end
    assert_eq!(hull.locate(Point::new(8, 0)), Containment::Outside);
    assert_eq!(hull.edges().count(), 3);
}

#[test]
fn hull_is_idempotent() {
    let input = pts(&[(1, 0), (5, 1), (6, 5), (3, 7), (0, 4), (3, 3), (2, 2), (4, 4)]);
    let hull = compute_hull(&input).unwrap();
    let again = compute_hull(hull.open_vertices()).unwrap();
    assert_eq!(again.vertices(), hull.vertices());
}

#[test]
fn randomized_small_grids() {
    // small extents force many duplicates and collinear triples
    for half_extent in [2, 3, 5, 50] {
        let cfg = CloudCfg {
            count: CountDist::Uniform { min: 3, max: 80 },
            half_extent,
            ring_share: 0.3,
        };
        for index in 0..200 {
            let input = draw_cloud(cfg, ReplayToken::new(42, index));
            match compute_hull(&input) {
                Ok(hull) => {
                    assert_valid_hull(&input, &hull);
                    let again = compute_hull(hull.open_vertices()).unwrap();
                    assert_eq!(again.vertices(), hull.vertices());
                }
                Err(HullError::DegenerateInput(_)) => {
                    assert!(crate::normalize::all_collinear(&input) || {
                        let uniq: HashSet<Point> = input.iter().copied().collect();
                        uniq.len() < 3
                    });
                }
                Err(e) => panic!("unexpected {e}"),
            }
        }
    }
}
