//! Rigid motions of the plane with exact rational coefficients.
//!
//! A `Transform` is a rotation by `(cos, sin)` followed by the translation
//! `(dx, dy)`; when `flip` is set the result is additionally mirrored in the
//! x-axis, i.e. `p ↦ F (R p + d)` with `F = diag(1, -1)`.
//!
//! Keeping the mirror outermost means a composite always has the same shape,
//! so `compose` and `inverse` are closed-form and stay exact. The rotation part
//! always satisfies `cos² + sin² = 1` exactly because every constructor derives
//! it from a rational direction divided by its exact length (or squared length).

use num_traits::{One, Zero};

use super::types::{pt, q, Pt2, Q};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transform {
    pub cos: Q,
    pub sin: Q,
    pub dx: Q,
    pub dy: Q,
    /// Orientation-reversing when set.
    pub flip: bool,
}

impl Transform {
    pub fn new(cos: Q, sin: Q, dx: Q, dy: Q, flip: bool) -> Self {
        Self {
            cos,
            sin,
            dx,
            dy,
            flip,
        }
    }

    pub fn identity() -> Self {
        Self::new(Q::one(), Q::zero(), Q::zero(), Q::zero(), false)
    }

    /// Apply to a point.
    pub fn map(&self, p: &Pt2) -> Pt2 {
        let x = &self.cos * &p.x - &self.sin * &p.y + &self.dx;
        let y = &self.sin * &p.x + &self.cos * &p.y + &self.dy;
        if self.flip {
            pt(x, -y)
        } else {
            pt(x, y)
        }
    }

    /// `T⁻¹` such that `t.compose(&t.inverse())` is the identity map.
    pub fn inverse(&self) -> Self {
        if self.flip {
            // A reflection's rotation part is an involution up to F, so (cos, sin) is kept.
            let dx = &self.cos * -&self.dx - &self.sin * &self.dy;
            let dy = &self.sin * -&self.dx + &self.cos * &self.dy;
            Self::new(self.cos.clone(), self.sin.clone(), dx, dy, true)
        } else {
            let dx = -(&self.cos * &self.dx + &self.sin * &self.dy);
            let dy = -(-&self.sin * &self.dx + &self.cos * &self.dy);
            Self::new(self.cos.clone(), -&self.sin, dx, dy, false)
        }
    }

    /// This transform followed by `other`.
    pub fn compose(&self, other: &Transform) -> Self {
        let (c, s) = (&self.cos, &self.sin);
        let (oc, os) = (&other.cos, &other.sin);
        if self.flip {
            // Pushing F through R' negates the angle of R'.
            let cos = c * oc + s * os;
            let sin = -(c * os) + s * oc;
            let dx = &other.dx + (oc * &self.dx + os * &self.dy);
            let dy = -&other.dy + (-(os * &self.dx) + oc * &self.dy);
            Self::new(cos, sin, dx, dy, !other.flip)
        } else {
            let cos = c * oc - s * os;
            let sin = c * os + s * oc;
            let dx = &other.dx + (oc * &self.dx - os * &self.dy);
            let dy = &other.dy + (os * &self.dx + oc * &self.dy);
            Self::new(cos, sin, dx, dy, other.flip)
        }
    }

    /// Reflection across the line through `p` and `q`. `None` if they coincide.
    pub fn flipedge(p: &Pt2, q_: &Pt2) -> Option<Self> {
        let ex = &p.x - &q_.x;
        let ey = &p.y - &q_.y;
        let l2 = &ex * &ex + &ey * &ey;
        if l2.is_zero() {
            return None;
        }
        let cos = (&ex * &ex - &ey * &ey) / &l2;
        let sin = q(-2) * &ex * &ey / &l2;
        let dx = &p.x - (&cos * &p.x - &sin * &p.y);
        let dy = -&p.y - (&sin * &p.x + &cos * &p.y);
        Some(Self::new(cos, sin, dx, dy, true))
    }

    /// Send segment `near→far` (of exact length `length`) onto `(0,0)→(length,0)`
    /// with the region to its left in the upper half-plane.
    pub fn base(near: &Pt2, far: &Pt2, length: &Q) -> Option<Self> {
        Self::anchor(near, far, length, false)
    }

    /// As `base`, but `far` lands on the origin and the motion is mirrored so
    /// the left region still ends up above the x-axis.
    pub fn baseflipped(near: &Pt2, far: &Pt2, length: &Q) -> Option<Self> {
        Self::anchor(far, near, length, true)
    }

    fn anchor(p: &Pt2, q_: &Pt2, length: &Q, flip: bool) -> Option<Self> {
        if length.is_zero() {
            return None;
        }
        let cos = (&q_.x - &p.x) / length;
        let sin = (&p.y - &q_.y) / length;
        let dx = (&p.x * &p.x + &p.y * &p.y - &p.x * &q_.x - &p.y * &q_.y) / length;
        let dy = (&p.x * &q_.y - &q_.x * &p.y) / length;
        Some(Self::new(cos, sin, dx, dy, flip))
    }
}
