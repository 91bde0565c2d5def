//! The extension step: try to add one placed facet to a partial solution.

use std::collections::BTreeSet;
use std::rc::Rc;

use num_traits::{One, Zero};
use tracing::debug;

use crate::geom2::{intersect, on_segment, Pt2, Q};
use crate::skeleton::Skeleton;

use super::types::{FoldEdge, PartialSolution, SourceFacet};

impl<'s> PartialSolution<'s> {
    /// Nothing placed yet.
    pub fn empty(skeleton: &'s Skeleton) -> Self {
        Self {
            skeleton,
            closed_edges: Vec::new(),
            open_edges: Vec::new(),
            facets: Vec::new(),
            area: Q::zero(),
            covered: BTreeSet::new(),
        }
    }

    pub fn skeleton(&self) -> &'s Skeleton {
        self.skeleton
    }

    /// The square is covered. Only states that passed the completeness checks
    /// of `extend_if_possible` can reach area one.
    pub fn is_done(&self) -> bool {
        self.area.is_one()
    }

    /// Open edge farthest from the square's centre; the first one on ties.
    pub fn next_edge(&self) -> Option<&Rc<FoldEdge>> {
        let mut best: Option<&Rc<FoldEdge>> = None;
        for e in &self.open_edges {
            match best {
                Some(b) if b.priority >= e.priority => {}
                _ => best = Some(e),
            }
        }
        best
    }

    /// Strictly inside the region bounded by the current edges (even-odd).
    /// Points on an edge are not inside: that is where creases meet.
    pub fn in_interior(&self, p: &Pt2) -> bool {
        let edges = || self.closed_edges.iter().chain(self.open_edges.iter());
        if edges().any(|e| on_segment(p, &e.a, &e.b)) {
            return false;
        }
        let mut inside = false;
        for e in edges() {
            let (a, b) = (&e.a, &e.b);
            if (a.y > p.y) != (b.y > p.y) {
                let x = &a.x + (&b.x - &a.x) * (&p.y - &a.y) / (&b.y - &a.y);
                if x > p.x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Add `facet` if the result is still a consistent fold; `None` otherwise.
    /// Never modifies `self`.
    pub fn extend_if_possible(&self, facet: Rc<SourceFacet>) -> Option<Self> {
        let zero = Q::zero();
        let one = Q::one();
        if facet
            .points
            .iter()
            .any(|p| p.x < zero || p.x > one || p.y < zero || p.y > one)
        {
            return None;
        }

        let (closed, open): (Vec<FoldEdge>, Vec<FoldEdge>) = FoldEdge::all(&facet)
            .into_iter()
            .partition(FoldEdge::on_square_boundary);

        // No overlap with what is already placed.
        if open.iter().any(|e| self.in_interior(&e.midpoint)) {
            return None;
        }
        if open.iter().any(|e| {
            self.open_edges
                .iter()
                .any(|e2| intersect(&e.a, &e.b, &e2.a, &e2.b))
        }) {
            return None;
        }

        // Creases must agree on their pre-images; edges placed on top of an
        // existing open edge resolve it.
        let mut resolved = vec![false; self.open_edges.len()];
        let mut fresh: Vec<Rc<FoldEdge>> = Vec::with_capacity(open.len());
        for e in open {
            let mut matched = false;
            for (k, e2) in self.open_edges.iter().enumerate() {
                if !e.consistent_with(e2) {
                    return None;
                }
                if e.spans(e2) {
                    resolved[k] = true;
                    matched = true;
                }
            }
            if !matched {
                fresh.push(Rc::new(e));
            }
        }

        let area = &self.area + &facet.area;
        if area > one {
            // Local choices can overshoot; harmless dead end.
            debug!(area = %area, "area overshoot");
            return None;
        }

        let mut open_edges: Vec<Rc<FoldEdge>> = self
            .open_edges
            .iter()
            .zip(&resolved)
            .filter(|&(_, &r)| !r)
            .map(|(e, _)| Rc::clone(e))
            .collect();
        open_edges.extend(fresh);

        let mut closed_edges = self.closed_edges.clone();
        closed_edges.extend(closed.into_iter().map(Rc::new));

        let mut covered = self.covered.clone();
        covered.insert(facet.target);

        let mut facets = self.facets.clone();
        facets.push(facet);

        let next = Self {
            skeleton: self.skeleton,
            closed_edges,
            open_edges,
            facets,
            area,
            covered,
        };

        if next.is_done() {
            if !next.open_edges.is_empty() {
                return None;
            }
            if next
                .skeleton
                .facets
                .iter()
                .any(|f| !next.covered.contains(f))
            {
                return None;
            }
        }
        Some(next)
    }
}
