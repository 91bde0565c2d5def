//! Skeleton: the planar arrangement induced by a set of segments.
//!
//! Purpose
//! - Subdivide the input segments at every mutual intersection, order the
//!   half-edges around each point, trace faces, and classify which faces lie
//!   inside the target silhouette and which edges have rational length.
//!
//! Layout
//! - `types.rs` (arena records and index types), `build.rs` (two-pass
//!   construction), `stats.rs` (summary used by the CLI).
//! - Points, edges and facets live in flat `Vec`s addressed by `PointId`,
//!   `EdgeId` and `FacetId`; nothing is mutated after `build_skeleton` returns.

mod build;
mod stats;
mod types;

pub use build::build_skeleton;
pub use stats::{skeleton_stats, SkeletonStats};
pub use types::{Edge, EdgeId, Facet, FacetId, Point, PointId, Skeleton};

#[cfg(test)]
mod tests;
