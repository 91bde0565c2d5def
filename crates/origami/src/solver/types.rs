//! Data types for the fold search.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use num_traits::{One, Signed, Zero};

use crate::geom2::{midpoint, q, signed_area, Pt2, Transform, Q};
use crate::skeleton::{FacetId, Skeleton};

/// A skeleton facet placed into the square by `transform`.
#[derive(Clone, Debug)]
pub struct SourceFacet {
    pub target: FacetId,
    pub transform: Transform,
    /// Maps square coordinates back onto the skeleton.
    pub transform_inv: Transform,
    /// Boundary in square coordinates, in the facet's boundary order.
    pub points: Vec<Pt2>,
    pub area: Q,
}

impl SourceFacet {
    pub fn new(sk: &Skeleton, target: FacetId, transform: Transform) -> Self {
        let points: Vec<Pt2> = sk.facet_points(target).map(|p| transform.map(p)).collect();
        let area = signed_area(&points).abs();
        let transform_inv = transform.inverse();
        Self {
            target,
            transform,
            transform_inv,
            points,
            area,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Squared distance from the square's centre, scaled by 4.
pub fn priority(p: &Pt2) -> Q {
    let ex = q(2) * &p.x - q(1);
    let ey = q(2) * &p.y - q(1);
    &ex * &ex + &ey * &ey
}

/// Boundary edge `index` of a placed facet, from `a` to `b`, with the skeleton
/// points (`ta`, `tb`) those endpoints were folded from.
#[derive(Clone, Debug)]
pub struct FoldEdge {
    pub facet: Rc<SourceFacet>,
    pub index: usize,
    pub a: Pt2,
    pub b: Pt2,
    pub ta: Pt2,
    pub tb: Pt2,
    pub midpoint: Pt2,
    pub priority: Q,
}

impl FoldEdge {
    pub fn new(facet: &Rc<SourceFacet>, index: usize) -> Self {
        let a = facet.points[index].clone();
        let b = facet.points[(index + 1) % facet.len()].clone();
        let ta = facet.transform_inv.map(&a);
        let tb = facet.transform_inv.map(&b);
        let midpoint = midpoint(&a, &b);
        let (pa, pb) = (priority(&a), priority(&b));
        let priority = if pa >= pb { pa } else { pb };
        Self {
            facet: Rc::clone(facet),
            index,
            a,
            b,
            ta,
            tb,
            midpoint,
            priority,
        }
    }

    /// Every boundary edge of `facet`, in order.
    pub fn all(facet: &Rc<SourceFacet>) -> Vec<FoldEdge> {
        (0..facet.len()).map(|i| FoldEdge::new(facet, i)).collect()
    }

    /// Lies on a side of the unit square (all placed points are inside it, so
    /// checking the midpoint suffices).
    pub fn on_square_boundary(&self) -> bool {
        let m = &self.midpoint;
        m.x.is_zero() || m.x.is_one() || m.y.is_zero() || m.y.is_one()
    }

    /// Same segment, either direction.
    pub fn spans(&self, other: &FoldEdge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Wherever an endpoint of `self` meets an endpoint of `other`, both must
    /// have been folded from the same skeleton point.
    pub fn consistent_with(&self, other: &FoldEdge) -> bool {
        let ours = [(&self.a, &self.ta), (&self.b, &self.tb)];
        let theirs = [(&other.a, &other.ta), (&other.b, &other.tb)];
        ours.iter().all(|(p, tp)| {
            theirs
                .iter()
                .all(|(r, tr)| p != r || tp == tr)
        })
    }
}

/// Accumulated search state. Cloning is cheap: records are shared.
#[derive(Clone)]
pub struct PartialSolution<'s> {
    pub(super) skeleton: &'s Skeleton,
    /// Edges on the square's boundary; final.
    pub closed_edges: Vec<Rc<FoldEdge>>,
    /// Interior edges still waiting for a neighbor across them.
    pub open_edges: Vec<Rc<FoldEdge>>,
    pub facets: Vec<Rc<SourceFacet>>,
    pub area: Q,
    /// Interior skeleton facets used by at least one placement.
    pub covered: BTreeSet<FacetId>,
}

impl fmt::Debug for PartialSolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSolution")
            .field("facets", &self.facets.len())
            .field("open_edges", &self.open_edges.len())
            .field("closed_edges", &self.closed_edges.len())
            .field("area", &self.area.to_string())
            .finish_non_exhaustive()
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Wall-clock budget, polled whenever a state has more than one branch.
    pub time_limit: Duration,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(5),
        }
    }
}

/// Counters reported when a search ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub popped: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub peak_stack: usize,
}
