//! Exact 2D Geometry (rational coordinates only).
//!
//! Purpose
//! - Provide the exact primitives shared by the skeleton builder and the fold
//!   search: rational scalars and points, rigid motions, segment predicates,
//!   polar ordering, shoelace area, and exact square roots.
//!
//! Why exact-only
//! - Facet adjacency, crease matching and the rational-length test are all
//!   equality tests. They are only meaningful without rounding.
//!
//! Code cross-refs: `Transform`, `intersect`, `segment_intersection`, `arg_key`.

mod transform;
mod types;
mod util;

pub use transform::Transform;
pub use types::{fmt_pt, parse_pt, parse_q, pt, q, qr, Pt2, Q};
pub use util::{
    arg_key, cmp_xy, even_odd_contains, exact_sqrt, intersect, midpoint, on_segment,
    segment_intersection, signed_area, ArgKey,
};

#[cfg(test)]
mod tests;
