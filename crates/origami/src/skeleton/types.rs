//! Arena records for the skeleton.

use crate::geom2::{Pt2, Transform, Q};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetId(pub usize);

/// A distinct point of the arrangement with its outgoing half-edges, sorted
/// counter-clockwise starting from the positive x-axis.
#[derive(Clone, Debug)]
pub struct Point {
    pub xy: Pt2,
    pub edges: Vec<EdgeId>,
}

/// Directed half-edge. `near`/`far` carry the point and the half-edge's local
/// index in that point's `edges` (for `far`: the index of the twin).
#[derive(Clone, Debug)]
pub struct Edge {
    pub near: (PointId, usize),
    pub far: (PointId, usize),
    pub length_sq: Q,
    /// Exact length when it is rational.
    pub length: Option<Q>,
}

impl Edge {
    #[inline]
    pub fn is_rational(&self) -> bool {
        self.length.is_some()
    }
}

/// A face of the arrangement: the half-edges that have it on their left, in
/// boundary order (counter-clockwise for bounded faces).
#[derive(Clone, Debug)]
pub struct Facet {
    pub boundary: Vec<EdgeId>,
    pub area: Q,
    pub interior: bool,
}

#[derive(Clone, Debug)]
pub struct Skeleton {
    pub points: Vec<Point>,
    pub edges: Vec<Edge>,
    /// Every traced face, the unbounded one(s) included.
    pub all_facets: Vec<Facet>,
    /// Interior subset of `all_facets`.
    pub facets: Vec<FacetId>,
    /// Left face of each half-edge, indexed by `EdgeId`.
    pub left: Vec<FacetId>,
}

impl Skeleton {
    #[inline]
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn facet(&self, id: FacetId) -> &Facet {
        &self.all_facets[id.0]
    }

    #[inline]
    pub fn left_of(&self, id: EdgeId) -> FacetId {
        self.left[id.0]
    }

    /// The same undirected edge, traversed the other way.
    #[inline]
    pub fn twin(&self, id: EdgeId) -> EdgeId {
        let (q, j) = self.edge(id).far;
        self.point(q).edges[j]
    }

    #[inline]
    pub fn is_interior(&self, id: FacetId) -> bool {
        self.facet(id).interior
    }

    pub fn near_xy(&self, id: EdgeId) -> &Pt2 {
        &self.point(self.edge(id).near.0).xy
    }

    pub fn far_xy(&self, id: EdgeId) -> &Pt2 {
        &self.point(self.edge(id).far.0).xy
    }

    /// Boundary vertices of a facet, in boundary order.
    pub fn facet_points(&self, id: FacetId) -> impl Iterator<Item = &Pt2> + '_ {
        self.facet(id).boundary.iter().map(move |&e| self.near_xy(e))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Rigid motion placing `edge` on `(0,0)→(L,0)` with its left facet above.
    /// `None` unless the edge length is rational.
    pub fn base(&self, edge: EdgeId) -> Option<Transform> {
        let length = self.edge(edge).length.as_ref()?;
        Transform::base(self.near_xy(edge), self.far_xy(edge), length)
    }

    /// Mirror-image variant of `base` anchoring the far endpoint at the origin.
    pub fn base_flipped(&self, edge: EdgeId) -> Option<Transform> {
        let length = self.edge(edge).length.as_ref()?;
        Transform::baseflipped(self.near_xy(edge), self.far_xy(edge), length)
    }
}
