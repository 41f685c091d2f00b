//! Normalized degree centrality.
//!
//! centrality = |undirected neighbors| / (N - 1)
//!
//! Defined as 0 when N ≤ 1, where no other node exists to connect to.

use tracing::instrument;

use crate::graph::build::InfluenceGraph;
use crate::metrics::{CreatorScore, rank_descending, ratio};

/// Rank every creator by degree centrality, highest first.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn degree_centrality<'a>(g: &InfluenceGraph<'a>) -> Vec<CreatorScore<'a>> {
    let mut scores: Vec<CreatorScore<'a>> = (0..g.node_count())
        .map(|i| CreatorScore {
            creator: g.creator(i),
            score: centrality_of(g, i),
        })
        .collect();

    rank_descending(&mut scores, |s| s.score);
    scores
}

/// Degree centrality of a single creator.
#[must_use]
pub fn centrality_of(g: &InfluenceGraph<'_>, idx: usize) -> f64 {
    let others = g.node_count().saturating_sub(1);
    ratio(g.neighbors(idx).len(), others)
}
