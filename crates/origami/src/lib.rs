//! Exact folding of a unit square onto a silhouette.
//!
//! Pipeline: parse a `Problem` → build its `Skeleton` (planar arrangement of
//! the crease segments, exact rationals throughout) → search for a fold of the
//! square with `solver::solve` → serialize the accepted state as a `Solution`.
//!
//! API Policy
//! - `api` and `prelude` are the intended import surfaces; module internals may
//!   change without notice.

pub mod api;
pub mod error;
pub mod geom2;
pub mod problem;
pub mod skeleton;
pub mod solution;
pub mod solver;
pub mod store;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom2::{Pt2, Transform, Q};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom2::{pt, q, qr, Pt2, Transform, Q};
    pub use crate::problem::Problem;
    pub use crate::skeleton::{build_skeleton, Skeleton};
    pub use crate::solution::Solution;
    pub use crate::solver::{solve, solve_problem, PartialSolution, SearchCfg};
}
