use super::*;
use crate::error::Error;
use crate::geom2::{pt, q, qr, signed_area, Pt2, Q};
use num_traits::{Signed, Zero};

fn p(x: i64, y: i64) -> Pt2 {
    pt(q(x), q(y))
}

fn ring_segments(ring: &[Pt2]) -> Vec<(Pt2, Pt2)> {
    (0..ring.len())
        .map(|i| (ring[i].clone(), ring[(i + 1) % ring.len()].clone()))
        .collect()
}

fn unit_square() -> Vec<Pt2> {
    vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)]
}

fn interior_area(sk: &Skeleton) -> Q {
    sk.facets
        .iter()
        .fold(Q::zero(), |acc, &f| acc + &sk.facet(f).area)
}

fn find_point(sk: &Skeleton, xy: &Pt2) -> PointId {
    PointId(sk.points.iter().position(|pt| &pt.xy == xy).unwrap())
}

#[test]
fn unit_square_has_one_interior_facet() {
    let square = unit_square();
    let sk = build_skeleton(&[square.clone()], &ring_segments(&square)).unwrap();
    assert_eq!(sk.points.len(), 4);
    assert_eq!(sk.edges.len(), 8);
    assert_eq!(sk.all_facets.len(), 2);
    assert_eq!(sk.facets.len(), 1);
    assert_eq!(sk.facet(sk.facets[0]).area, q(1));
    assert!(sk.edges.iter().all(|e| e.length == Some(q(1))));
    // the unbounded face runs clockwise
    let outer = sk.all_facets.iter().find(|f| !f.interior).unwrap();
    assert_eq!(outer.area, q(-1));
}

#[test]
fn every_half_edge_has_one_left_facet_and_a_twin() {
    let square = unit_square();
    let mut segs = ring_segments(&square);
    segs.push((p(0, 0), p(1, 1)));
    segs.push((p(1, 0), p(0, 1)));
    let sk = build_skeleton(&[square], &segs).unwrap();

    assert_eq!(sk.left.len(), sk.edges.len());
    let traced: usize = sk.all_facets.iter().map(|f| f.boundary.len()).sum();
    assert_eq!(traced, sk.edges.len());
    for (k, f) in sk.all_facets.iter().enumerate() {
        for &e in &f.boundary {
            assert_eq!(sk.left_of(e), FacetId(k));
        }
    }
    for e in sk.edge_ids() {
        let t = sk.twin(e);
        assert_ne!(t, e);
        assert_eq!(sk.twin(t), e);
        assert_eq!(sk.near_xy(e), sk.far_xy(t));
        assert_eq!(sk.edge(e).length_sq, sk.edge(t).length_sq);
    }
}

#[test]
fn crossing_diagonals_split_square_into_four_triangles() {
    let square = unit_square();
    let mut segs = ring_segments(&square);
    segs.push((p(0, 0), p(1, 1)));
    segs.push((p(1, 0), p(0, 1)));
    let sk = build_skeleton(&[square], &segs).unwrap();

    assert_eq!(sk.points.len(), 5);
    assert_eq!(sk.edges.len(), 16);
    assert_eq!(sk.facets.len(), 4);
    for &f in &sk.facets {
        assert_eq!(sk.facet(f).area, qr(1, 4));
        assert_eq!(sk.facet(f).boundary.len(), 3);
    }
    assert_eq!(interior_area(&sk), q(1));

    // half-diagonals have length √2/2
    let centre = find_point(&sk, &pt(qr(1, 2), qr(1, 2)));
    let around = &sk.point(centre).edges;
    assert_eq!(around.len(), 4);
    assert!(around.iter().all(|&e| !sk.edge(e).is_rational()));
    assert_eq!(sk.edge(around[0]).length_sq, qr(1, 2));
}

#[test]
fn half_edges_are_sorted_counter_clockwise() {
    let square = unit_square();
    let mut segs = ring_segments(&square);
    segs.push((p(0, 0), p(1, 1)));
    segs.push((p(1, 0), p(0, 1)));
    let sk = build_skeleton(&[square], &segs).unwrap();

    let centre = find_point(&sk, &pt(qr(1, 2), qr(1, 2)));
    let far: Vec<&Pt2> = sk
        .point(centre)
        .edges
        .iter()
        .map(|&e| sk.far_xy(e))
        .collect();
    assert_eq!(far, vec![&p(1, 1), &p(0, 1), &p(0, 0), &p(1, 0)]);
    for (k, &e) in sk.point(centre).edges.iter().enumerate() {
        assert_eq!(sk.edge(e).near, (centre, k));
    }
}

#[test]
fn non_convex_polygon_interior_matches_its_area() {
    let l_shape = vec![p(0, 0), p(2, 0), p(2, 1), p(1, 1), p(1, 2), p(0, 2)];
    let sk = build_skeleton(&[l_shape.clone()], &ring_segments(&l_shape)).unwrap();
    assert_eq!(sk.facets.len(), 1);
    assert_eq!(interior_area(&sk), signed_area(&l_shape).abs());
    assert_eq!(interior_area(&sk), q(3));
}

#[test]
fn clockwise_target_is_still_interior() {
    let cw: Vec<Pt2> = unit_square().into_iter().rev().collect();
    let sk = build_skeleton(&[cw.clone()], &ring_segments(&cw)).unwrap();
    assert_eq!(sk.facets.len(), 1);
    assert_eq!(interior_area(&sk), signed_area(&cw).abs());
}

#[test]
fn hole_facet_is_exterior() {
    let outer = vec![p(0, 0), p(3, 0), p(3, 3), p(0, 3)];
    let hole = vec![p(1, 1), p(1, 2), p(2, 2), p(2, 1)];
    let mut segs = ring_segments(&outer);
    segs.extend(ring_segments(&hole));
    // bridge so the ring between outer boundary and hole is a single face
    segs.push((p(0, 0), p(1, 1)));
    let sk = build_skeleton(&[outer, hole], &segs).unwrap();
    assert_eq!(sk.all_facets.len(), 3);
    assert_eq!(sk.facets.len(), 1);
    assert_eq!(interior_area(&sk), q(8));
    let hole_face = sk.all_facets.iter().find(|f| f.area == q(1)).unwrap();
    assert!(!hole_face.interior);
}

#[test]
fn t_junction_splits_the_crossed_segment() {
    // A vertical crease ending on the bottom and top sides.
    let square = vec![p(0, 0), p(2, 0), p(2, 2), p(0, 2)];
    let mut segs = ring_segments(&square);
    segs.push((p(1, 0), p(1, 2)));
    let sk = build_skeleton(&[square], &segs).unwrap();
    assert_eq!(sk.points.len(), 6);
    assert_eq!(sk.facets.len(), 2);
    let bottom_mid = find_point(&sk, &p(1, 0));
    assert_eq!(sk.point(bottom_mid).edges.len(), 3);
}

#[test]
fn pythagorean_edges_are_rational() {
    let tri = vec![p(0, 0), p(4, 0), p(4, 3)];
    let sk = build_skeleton(&[tri.clone()], &ring_segments(&tri)).unwrap();
    let mut lengths: Vec<Q> = sk.edges.iter().filter_map(|e| e.length.clone()).collect();
    lengths.sort();
    lengths.dedup();
    assert_eq!(lengths, vec![q(3), q(4), q(5)]);
}

#[test]
fn base_places_left_facet_above_the_axis() {
    let square = unit_square();
    let sk = build_skeleton(&[square.clone()], &ring_segments(&square)).unwrap();
    let inner = sk.facets[0];
    for e in sk.edge_ids().filter(|&e| sk.left_of(e) == inner) {
        for t in [sk.base(e).unwrap(), sk.base_flipped(e).unwrap()] {
            for xy in sk.facet_points(inner) {
                let m = t.map(xy);
                assert!(!m.y.is_negative());
                assert!(m.x >= Q::zero() && m.x <= q(1));
            }
        }
    }
}

#[test]
fn degenerate_input_is_rejected() {
    let square = unit_square();
    assert!(matches!(
        build_skeleton(&[square.clone()], &[]),
        Err(Error::InvalidArrangement(_))
    ));
    assert!(matches!(
        build_skeleton(&[square], &[(p(1, 1), p(1, 1))]),
        Err(Error::InvalidArrangement(_))
    ));
}

#[test]
fn stats_count_undirected_edges() {
    let square = unit_square();
    let mut segs = ring_segments(&square);
    segs.push((p(0, 0), p(1, 1)));
    let sk = build_skeleton(&[square], &segs).unwrap();
    let stats = skeleton_stats(&sk, &q(1));
    assert_eq!(stats.points, 4);
    assert_eq!(stats.edges, 5);
    assert_eq!(stats.rational_edges, 4);
    assert_eq!(stats.total_rational_length, "4");
    assert_eq!(stats.rational_lengths, vec![("1".to_string(), 4)]);
    assert_eq!(stats.interior_facets, 2);
    assert_eq!(stats.exterior_facets, 1);
    assert_eq!(stats.facet_areas, vec!["1/2".to_string(), "1/2".to_string()]);
}
