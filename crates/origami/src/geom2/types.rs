//! Scalar and point types.
//!
//! - `Q`: arbitrary-precision rational, always in lowest terms.
//! - `Pt2`: a point (or vector) with rational coordinates.

use std::str::FromStr;

use nalgebra::Vector2;
use num_bigint::BigInt;
use num_rational::BigRational;

/// Exact rational scalar.
pub type Q = BigRational;

/// Point in the plane with exact coordinates.
pub type Pt2 = Vector2<Q>;

/// Integer as a rational.
#[inline]
pub fn q(n: i64) -> Q {
    Q::from_integer(BigInt::from(n))
}

/// `n / d` as a rational. Panics if `d == 0`.
#[inline]
pub fn qr(n: i64, d: i64) -> Q {
    Q::new(BigInt::from(n), BigInt::from(d))
}

#[inline]
pub fn pt(x: Q, y: Q) -> Pt2 {
    Vector2::new(x, y)
}

/// Parse an integer or `numerator/denominator` literal.
pub fn parse_q(s: &str) -> Option<Q> {
    Q::from_str(s.trim()).ok()
}

/// Parse an `"x,y"` coordinate pair.
pub fn parse_pt(s: &str) -> Option<Pt2> {
    let (x, y) = s.trim().split_once(',')?;
    Some(pt(parse_q(x)?, parse_q(y)?))
}

/// Format as `"x,y"` (the file formats use this everywhere).
pub fn fmt_pt(p: &Pt2) -> String {
    format!("{},{}", p.x, p.y)
}
