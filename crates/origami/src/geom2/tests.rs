use super::*;
use num_traits::Zero;
use proptest::prelude::*;

fn p(x: i64, y: i64) -> Pt2 {
    pt(q(x), q(y))
}

/// Rigid motions with Pythagorean rotations `((m²-n²)/h, 2mn/h)`, `h = m²+n²`.
fn transform_strategy() -> impl Strategy<Value = Transform> {
    (
        -12i64..12,
        -12i64..12,
        -40i64..40,
        1i64..8,
        -40i64..40,
        1i64..8,
        any::<bool>(),
    )
        .prop_filter("rotation direction must be non-zero", |t| {
            t.0 != 0 || t.1 != 0
        })
        .prop_map(|(m, n, ax, ad, bx, bd, flip)| {
            let h = m * m + n * n;
            Transform::new(
                qr(m * m - n * n, h),
                qr(2 * m * n, h),
                qr(ax, ad),
                qr(bx, bd),
                flip,
            )
        })
}

fn point_strategy() -> impl Strategy<Value = Pt2> {
    (-30i64..30, 1i64..6, -30i64..30, 1i64..6).prop_map(|(a, b, c, d)| pt(qr(a, b), qr(c, d)))
}

proptest! {
    #[test]
    fn compose_with_inverse_is_identity(t in transform_strategy(), x in point_strategy()) {
        prop_assert_eq!(t.compose(&t.inverse()).map(&x), x.clone());
        prop_assert_eq!(t.inverse().compose(&t).map(&x), x);
    }

    #[test]
    fn compose_matches_sequential_map(
        t1 in transform_strategy(),
        t2 in transform_strategy(),
        x in point_strategy(),
    ) {
        prop_assert_eq!(t1.compose(&t2).map(&x), t2.map(&t1.map(&x)));
        prop_assert_eq!(t1.compose(&t2).flip, t1.flip ^ t2.flip);
    }

    #[test]
    fn compose_is_associative(
        t1 in transform_strategy(),
        t2 in transform_strategy(),
        t3 in transform_strategy(),
        x in point_strategy(),
    ) {
        let left = t1.compose(&t2).compose(&t3);
        let right = t1.compose(&t2.compose(&t3));
        prop_assert_eq!(left.map(&x), right.map(&x));
    }

    #[test]
    fn rotation_part_stays_on_unit_circle(t1 in transform_strategy(), t2 in transform_strategy()) {
        let t = t1.compose(&t2.inverse());
        prop_assert_eq!(&t.cos * &t.cos + &t.sin * &t.sin, q(1));
    }

    #[test]
    fn flipedge_fixes_its_line_and_is_an_involution(a in point_strategy(), b in point_strategy()) {
        prop_assume!(a != b);
        let f = Transform::flipedge(&a, &b).unwrap();
        prop_assert_eq!(f.map(&a), a.clone());
        prop_assert_eq!(f.map(&b), b.clone());
        let m = midpoint(&a, &b);
        prop_assert_eq!(f.map(&m), m);
        let off = pt(&a.x + q(1), a.y.clone());
        prop_assert_eq!(f.map(&f.map(&off)), off);
    }
}

#[test]
fn identity_maps_points_to_themselves() {
    let x = pt(qr(3, 7), qr(-5, 2));
    assert_eq!(Transform::identity().map(&x), x);
}

#[test]
fn flip_mirrors_in_the_x_axis() {
    let t = Transform::new(q(1), q(0), q(0), q(0), true);
    assert_eq!(t.map(&p(2, 3)), p(2, -3));
}

#[test]
fn base_sends_edge_to_positive_x_axis_with_left_side_up() {
    // Edge (1,1) → (4,5) has length 5; (0,5) lies on its left.
    let near = p(1, 1);
    let far = p(4, 5);
    let t = Transform::base(&near, &far, &q(5)).unwrap();
    assert!(!t.flip);
    assert_eq!(t.map(&near), p(0, 0));
    assert_eq!(t.map(&far), p(5, 0));
    assert!(t.map(&p(0, 5)).y > Q::zero());
}

#[test]
fn baseflipped_anchors_far_end_and_keeps_left_side_up() {
    let near = p(1, 1);
    let far = p(4, 5);
    let t = Transform::baseflipped(&near, &far, &q(5)).unwrap();
    assert!(t.flip);
    assert_eq!(t.map(&far), p(0, 0));
    assert_eq!(t.map(&near), p(5, 0));
    assert!(t.map(&p(0, 5)).y > Q::zero());
}

#[test]
fn degenerate_anchors_are_rejected() {
    assert!(Transform::flipedge(&p(1, 1), &p(1, 1)).is_none());
    assert!(Transform::base(&p(0, 0), &p(0, 0), &q(0)).is_none());
}

#[test]
fn intersect_detects_proper_crossing_only() {
    assert!(intersect(&p(0, 0), &p(1, 1), &p(0, 1), &p(1, 0)));
    // shared endpoint
    assert!(!intersect(&p(0, 0), &p(1, 1), &p(1, 1), &p(2, 0)));
    // T-junction: endpoint touching the interior of the other segment
    assert!(!intersect(&p(0, 0), &p(2, 0), &p(1, 0), &p(1, 1)));
    // parallel
    assert!(!intersect(&p(0, 0), &p(1, 0), &p(0, 1), &p(1, 1)));
    // collinear overlap
    assert!(!intersect(&p(0, 0), &p(2, 0), &p(1, 0), &p(3, 0)));
    // disjoint
    assert!(!intersect(&p(0, 0), &p(1, 1), &p(3, 0), &p(2, 1)));
}

#[test]
fn segment_intersection_includes_endpoints() {
    assert_eq!(
        segment_intersection(&p(0, 0), &p(2, 0), &p(1, 0), &p(1, 1)),
        Some(p(1, 0))
    );
    assert_eq!(
        segment_intersection(&p(0, 0), &p(2, 2), &p(0, 2), &p(2, 0)),
        Some(p(1, 1))
    );
    assert_eq!(
        segment_intersection(&p(0, 0), &p(1, 0), &p(0, 1), &p(1, 1)),
        None
    );
    assert_eq!(
        segment_intersection(&p(0, 0), &p(1, 1), &p(3, 0), &p(2, 1)),
        None
    );
}

#[test]
fn arg_key_orders_counter_clockwise_from_positive_x() {
    let dirs = [
        (1, 0),
        (2, 1),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    let keys: Vec<ArgKey> = dirs.iter().map(|&(x, y)| arg_key(&q(x), &q(y))).collect();
    for w in keys.windows(2) {
        assert!(w[0] < w[1], "{:?} !< {:?}", w[0], w[1]);
    }
    // same direction, nearer first
    assert!(arg_key(&q(1), &q(1)) < arg_key(&q(2), &q(2)));
}

#[test]
fn exact_sqrt_recognises_rational_roots() {
    assert_eq!(exact_sqrt(&qr(9, 4)), Some(qr(3, 2)));
    assert_eq!(exact_sqrt(&q(0)), Some(q(0)));
    assert_eq!(exact_sqrt(&q(2)), None);
    assert_eq!(exact_sqrt(&qr(1, 2)), None);
    // 18/8 reduces to 9/4
    assert_eq!(exact_sqrt(&qr(18, 8)), Some(qr(3, 2)));
    assert_eq!(exact_sqrt(&q(-4)), None);
}

#[test]
fn signed_area_follows_orientation() {
    let ccw = vec![p(0, 0), p(2, 0), p(2, 1), p(0, 1)];
    assert_eq!(signed_area(&ccw), q(2));
    let cw: Vec<Pt2> = ccw.iter().rev().cloned().collect();
    assert_eq!(signed_area(&cw), q(-2));
}

#[test]
fn even_odd_contains_handles_holes() {
    let outer = vec![p(0, 0), p(4, 0), p(4, 4), p(0, 4)];
    let hole = vec![p(1, 1), p(1, 3), p(3, 3), p(3, 1)];
    let rings = vec![outer, hole];
    assert!(even_odd_contains(&rings, &pt(qr(1, 2), qr(5, 3))));
    assert!(!even_odd_contains(&rings, &pt(q(2), qr(5, 3))));
    assert!(!even_odd_contains(&rings, &pt(q(5), qr(5, 3))));
}

#[test]
fn on_segment_is_closed() {
    assert!(on_segment(&p(1, 1), &p(0, 0), &p(2, 2)));
    assert!(on_segment(&p(2, 2), &p(0, 0), &p(2, 2)));
    assert!(!on_segment(&p(3, 3), &p(0, 0), &p(2, 2)));
    assert!(!on_segment(&p(1, 0), &p(0, 0), &p(2, 2)));
}

#[test]
fn coordinate_literals_parse_and_format() {
    let x = parse_pt(" -1/2,3 ").unwrap();
    assert_eq!(x, pt(qr(-1, 2), q(3)));
    assert_eq!(fmt_pt(&x), "-1/2,3");
    assert!(parse_pt("1/0,1").is_none());
    assert!(parse_pt("1;2").is_none());
}
