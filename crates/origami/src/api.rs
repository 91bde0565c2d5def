//! Curated surface for the CLI and benchmarks.
//!
//! Prefer these re-exports over reaching into module internals.

// Exact geometry
pub use crate::geom2::{
    arg_key, exact_sqrt, intersect, segment_intersection, signed_area, Pt2, Transform, Q,
};
// Arrangement
pub use crate::skeleton::{
    build_skeleton, skeleton_stats, Edge, EdgeId, Facet, FacetId, Point, PointId, Skeleton,
    SkeletonStats,
};
// Search
pub use crate::solver::{
    candidate_starting_facets, solve, solve_problem, FoldEdge, PartialSolution, SearchCfg,
    SearchStats, SourceFacet,
};
// Files
pub use crate::problem::Problem;
pub use crate::solution::Solution;
pub use crate::store::{shuffled, Store};
