//! Local clustering coefficient.
//!
//! For a creator with k undirected neighbors:
//!
//! ```text
//! k < 2   → 0
//! k ≥ 2   → connected neighbor pairs / (k * (k - 1) / 2)
//! ```
//!
//! A pair counts as connected when either neighbor lists the other in the
//! undirected view.

use serde::Serialize;
use tracing::instrument;

use lineage_core::Creator;

use crate::graph::build::InfluenceGraph;
use crate::metrics::{rank_descending, ratio};

/// A creator paired with its clustering coefficient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterScore<'a> {
    pub creator: &'a Creator,
    pub coefficient: f64,
}

/// Rank every creator by clustering coefficient, highest first.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn clustering_coefficients<'a>(g: &InfluenceGraph<'a>) -> Vec<ClusterScore<'a>> {
    let mut scores: Vec<ClusterScore<'a>> = (0..g.node_count())
        .map(|i| ClusterScore {
            creator: g.creator(i),
            coefficient: clustering_of(g, i),
        })
        .collect();

    rank_descending(&mut scores, |s| s.coefficient);
    scores
}

/// Clustering coefficient of a single creator, in `[0, 1]`.
#[must_use]
pub fn clustering_of(g: &InfluenceGraph<'_>, idx: usize) -> f64 {
    let neighbors = g.neighbors(idx);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut connected = 0usize;
    for (i, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[i + 1..] {
            if g.has_neighbor(a, b) {
                connected += 1;
            }
        }
    }

    ratio(connected, k * (k - 1) / 2)
}
