//! Fold search: assemble skeleton facets into the unit square.
//!
//! Purpose
//! - Place rigidly moved copies of interior facets into `[0,1]²` until they
//!   tile the square exactly, every crease between two placements agrees on
//!   the skeleton point it came from, and every interior facet was used.
//!
//! Layout
//! - `types.rs` (placed facets, boundary edges, search state and config),
//!   `extend.rs` (the pure extension step), `dfs.rs` (seeds, branching and
//!   the time-bounded depth-first driver).
//!
//! Search states are never mutated: extending one yields a fresh state that
//! shares its edge and facet records through `Rc`, so backtracking is just
//! dropping stack entries.

mod dfs;
mod extend;
mod types;

pub use dfs::{candidate_starting_facets, solve, solve_problem};
pub use types::{priority, FoldEdge, PartialSolution, SearchCfg, SearchStats, SourceFacet};
