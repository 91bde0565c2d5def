//! Depth-first search over partial solutions with a wall-clock budget.

use std::rc::Rc;
use std::time::Instant;

use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::geom2::Transform;
use crate::problem::Problem;
use crate::skeleton::Skeleton;

use super::types::{PartialSolution, SearchCfg, SearchStats, SourceFacet};

/// Both anchorings of every interior facet along each of its rational edges.
pub fn candidate_starting_facets(sk: &Skeleton) -> Vec<Rc<SourceFacet>> {
    let mut out = Vec::new();
    for e in sk.edge_ids() {
        let left = sk.left_of(e);
        if !sk.is_interior(left) {
            continue;
        }
        // `base` is `None` exactly when the edge length is irrational.
        for t in [sk.base(e), sk.base_flipped(e)].into_iter().flatten() {
            out.push(Rc::new(SourceFacet::new(sk, left, t)));
        }
    }
    out
}

impl<'s> PartialSolution<'s> {
    /// Ways to continue across the highest-priority open edge: the owning
    /// facet folded back over it, and, if the skeleton facet across the
    /// corresponding skeleton edge is interior, that facet left unfolded.
    pub fn candidate_new_facets(&self) -> Vec<Rc<SourceFacet>> {
        let Some(edge) = self.next_edge() else {
            return Vec::new();
        };
        let sk = self.skeleton;
        let placed = &edge.facet;
        let mut out = Vec::with_capacity(2);

        if let Some(mirror) = Transform::flipedge(&edge.a, &edge.b) {
            let t = placed.transform.compose(&mirror);
            out.push(Rc::new(SourceFacet::new(sk, placed.target, t)));
        }

        let skeleton_edge = sk.facet(placed.target).boundary[edge.index];
        let across = sk.left_of(sk.twin(skeleton_edge));
        if sk.is_interior(across) {
            out.push(Rc::new(SourceFacet::new(
                sk,
                across,
                placed.transform.clone(),
            )));
        }
        out
    }
}

/// Search for a complete fold of the interior facets of `sk`.
///
/// Returns `Error::Timeout` if the budget runs out and `Error::NoSolution`
/// once every branch has been rejected.
pub fn solve(sk: &Skeleton, cfg: SearchCfg) -> Result<PartialSolution<'_>> {
    DfsRunner::new(sk, cfg).solve()
}

/// Convenience: search the skeleton owned by `problem`.
pub fn solve_problem(problem: &Problem, cfg: SearchCfg) -> Result<PartialSolution<'_>> {
    solve(&problem.skeleton, cfg)
}

/// DFS runner carrying the work stack and counters.
struct DfsRunner<'s> {
    sk: &'s Skeleton,
    cfg: SearchCfg,
    start: Instant,
    stack: Vec<PartialSolution<'s>>,
    stats: SearchStats,
}

impl<'s> DfsRunner<'s> {
    fn new(sk: &'s Skeleton, cfg: SearchCfg) -> Self {
        Self {
            sk,
            cfg,
            start: Instant::now(),
            stack: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn solve(mut self) -> Result<PartialSolution<'s>> {
        let root = PartialSolution::empty(self.sk);
        let seeds = candidate_starting_facets(self.sk);
        trace!(seeds = seeds.len(), "seeding");
        for facet in seeds {
            self.push_extension(&root, facet);
        }

        let outcome = self.run();
        let elapsed = self.start.elapsed();
        let SearchStats {
            popped,
            accepted,
            rejected,
            peak_stack,
        } = self.stats;
        match &outcome {
            Ok(ps) => info!(
                ?elapsed,
                popped,
                accepted,
                rejected,
                peak_stack,
                facets = ps.facets.len(),
                "fold found"
            ),
            Err(err) => info!(
                ?elapsed,
                popped,
                accepted,
                rejected,
                peak_stack,
                %err,
                "search ended"
            ),
        }
        outcome
    }

    fn run(&mut self) -> Result<PartialSolution<'s>> {
        while let Some(ps) = self.stack.pop() {
            self.stats.popped += 1;
            trace!(
                stack = self.stack.len(),
                area = %ps.area,
                facets = ps.facets.len(),
                open = ps.open_edges.len(),
                "pop"
            );
            if ps.is_done() {
                return Ok(ps);
            }

            let candidates = ps.candidate_new_facets();
            if candidates.len() > 1 {
                let elapsed = self.start.elapsed();
                if elapsed >= self.cfg.time_limit {
                    return Err(Error::Timeout { elapsed });
                }
            }
            for facet in candidates {
                self.push_extension(&ps, facet);
            }
        }
        Err(Error::NoSolution)
    }

    fn push_extension(&mut self, ps: &PartialSolution<'s>, facet: Rc<SourceFacet>) {
        match ps.extend_if_possible(facet) {
            Some(next) => {
                self.stats.accepted += 1;
                self.stack.push(next);
                self.stats.peak_stack = self.stats.peak_stack.max(self.stack.len());
            }
            None => self.stats.rejected += 1,
        }
    }
}
