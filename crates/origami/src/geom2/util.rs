use std::cmp::Ordering;

use num_integer::Roots;
use num_traits::{Signed, Zero};

use super::types::{pt, q, qr, Pt2, Q};

/// Polar sort key of a direction `(dx, dy)`, counter-clockwise from the positive x-axis.
///
/// Buckets: positive x-axis = 0, upper half-plane = 1, negative x-axis = 2,
/// lower half-plane = 3. Within a half-plane `-dx/dy` increases with the angle,
/// so the comparison never leaves the rationals. Equal directions fall back to
/// the squared length.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArgKey {
    bucket: u8,
    slope: Q,
    dist_sq: Q,
}

pub fn arg_key(dx: &Q, dy: &Q) -> ArgKey {
    let dist_sq = dx * dx + dy * dy;
    if dy.is_zero() {
        let bucket = if dx.is_negative() { 2 } else { 0 };
        ArgKey {
            bucket,
            slope: Q::zero(),
            dist_sq,
        }
    } else {
        let bucket = if dy.is_negative() { 3 } else { 1 };
        ArgKey {
            bucket,
            slope: -dx / dy,
            dist_sq,
        }
    }
}

/// Lexicographic order on `(x, y)`; sorts collinear points along their line.
pub fn cmp_xy(a: &Pt2, b: &Pt2) -> Ordering {
    a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y))
}

/// Parameters `(s, t)` of the crossing of lines `a-b` and `c-d`, or `None` if parallel.
/// The crossing is `a + t (b - a)` = `c + s (d - c)`.
fn crossing_params(a: &Pt2, b: &Pt2, c: &Pt2, d: &Pt2) -> Option<(Q, Q)> {
    let dax = &b.x - &a.x;
    let day = &b.y - &a.y;
    let dcx = &d.x - &c.x;
    let dcy = &d.y - &c.y;

    let denom = &dax * &dcy - &day * &dcx;
    if denom.is_zero() {
        return None;
    }
    let acx = &a.x - &c.x;
    let acy = &a.y - &c.y;
    let s = (-&day * &acx + &dax * &acy) / &denom;
    let t = (&dcx * &acy - &dcy * &acx) / &denom;
    Some((s, t))
}

/// Whether the open segments `a-b` and `c-d` properly cross.
///
/// Shared endpoints, touching at an endpoint, and parallel or collinear pairs
/// all return `false`.
pub fn intersect(a: &Pt2, b: &Pt2, c: &Pt2, d: &Pt2) -> bool {
    let Some((s, t)) = crossing_params(a, b, c, d) else {
        return false;
    };
    let zero = Q::zero();
    let one = q(1);
    s > zero && s < one && t > zero && t < one
}

/// Crossing point of the closed segments `a-b` and `c-d` (endpoints included).
/// Parallel pairs, collinear overlaps included, yield `None`.
pub fn segment_intersection(a: &Pt2, b: &Pt2, c: &Pt2, d: &Pt2) -> Option<Pt2> {
    let (s, t) = crossing_params(a, b, c, d)?;
    let zero = Q::zero();
    let one = q(1);
    if s < zero || s > one || t < zero || t > one {
        return None;
    }
    let x = &a.x + &t * (&b.x - &a.x);
    let y = &a.y + &t * (&b.y - &a.y);
    Some(pt(x, y))
}

/// Whether `p` lies on the closed segment `a-b`.
pub fn on_segment(p: &Pt2, a: &Pt2, b: &Pt2) -> bool {
    let cross = (&b.x - &a.x) * (&p.y - &a.y) - (&b.y - &a.y) * (&p.x - &a.x);
    if !cross.is_zero() {
        return false;
    }
    let within = |v: &Q, lo: &Q, hi: &Q| {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        lo <= v && v <= hi
    };
    within(&p.x, &a.x, &b.x) && within(&p.y, &a.y, &b.y)
}

pub fn midpoint(a: &Pt2, b: &Pt2) -> Pt2 {
    let half = qr(1, 2);
    pt((&a.x + &b.x) * &half, (&a.y + &b.y) * &half)
}

/// Shoelace area of a closed ring; positive for counter-clockwise order.
pub fn signed_area(ring: &[Pt2]) -> Q {
    let n = ring.len();
    let mut twice = Q::zero();
    for i in 0..n {
        let p = &ring[i];
        let r = &ring[(i + 1) % n];
        twice += &p.x * &r.y - &p.y * &r.x;
    }
    twice / q(2)
}

/// Even-odd test of `p` against a set of rings (holes come out naturally).
///
/// Only edges that strictly straddle the horizontal through `p` are counted;
/// callers pick sample points that avoid polygon vertices.
pub fn even_odd_contains(rings: &[Vec<Pt2>], p: &Pt2) -> bool {
    let mut inside = false;
    for ring in rings {
        let n = ring.len();
        for i in 0..n {
            let a = &ring[i];
            let b = &ring[(i + 1) % n];
            if ((&a.y - &p.y) * (&b.y - &p.y)).is_negative() {
                let x = &a.x + (&b.x - &a.x) * (&p.y - &a.y) / (&b.y - &a.y);
                if x > p.x {
                    inside = !inside;
                }
            }
        }
    }
    inside
}

/// Exact square root of a non-negative rational, if it is rational.
///
/// Relies on `Q` being kept in lowest terms: the root is rational iff both the
/// numerator and the denominator are perfect squares.
pub fn exact_sqrt(v: &Q) -> Option<Q> {
    if v.is_negative() {
        return None;
    }
    let n = Roots::sqrt(v.numer());
    let d = Roots::sqrt(v.denom());
    if &(&n * &n) == v.numer() && &(&d * &d) == v.denom() {
        Some(Q::new(n, d))
    } else {
        None
    }
}
