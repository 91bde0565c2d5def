//! Summary numbers for a skeleton, as printed by `origami stats`.

use std::collections::HashMap;

use num_traits::Zero;
use serde::Serialize;

use crate::geom2::Q;

use super::types::Skeleton;

/// Exact values are rendered as rational literals (`"3/2"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkeletonStats {
    pub target_area: String,
    pub points: usize,
    pub edges: usize,
    pub rational_edges: usize,
    pub total_rational_length: String,
    /// `(length, count)` over undirected edges, most common first.
    pub rational_lengths: Vec<(String, usize)>,
    pub interior_facets: usize,
    pub exterior_facets: usize,
    pub facet_areas: Vec<String>,
}

pub fn skeleton_stats(sk: &Skeleton, target_area: &Q) -> SkeletonStats {
    let mut counts: HashMap<&Q, usize> = HashMap::new();
    let mut total = Q::zero();
    let mut rational = 0usize;
    // Count each undirected edge once, from its lower-numbered endpoint.
    for e in &sk.edges {
        if e.near.0 > e.far.0 {
            continue;
        }
        if let Some(len) = &e.length {
            *counts.entry(len).or_default() += 1;
            total += len.clone();
            rational += 1;
        }
    }
    let mut lengths: Vec<(&Q, usize)> = counts.into_iter().collect();
    lengths.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    SkeletonStats {
        target_area: target_area.to_string(),
        points: sk.points.len(),
        edges: sk.edges.len() / 2,
        rational_edges: rational,
        total_rational_length: total.to_string(),
        rational_lengths: lengths
            .into_iter()
            .map(|(l, n)| (l.to_string(), n))
            .collect(),
        interior_facets: sk.facets.len(),
        exterior_facets: sk.all_facets.len() - sk.facets.len(),
        facet_areas: sk
            .facets
            .iter()
            .map(|&f| sk.facet(f).area.to_string())
            .collect(),
    }
}
