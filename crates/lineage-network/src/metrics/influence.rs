//! Influence ranking: direct plus discounted transitive reach.
//!
//! score = direct successors + 0.5 × |creators reachable forward|
//!
//! The reachable set is collected by a visited-set BFS seeded with the
//! direct successors, so it includes them and each creator counts once no
//! matter how many routes lead to it. A cycle back to the start counts the
//! start as reached.

use std::collections::VecDeque;

use tracing::instrument;

use crate::graph::build::InfluenceGraph;
use crate::metrics::{CreatorScore, rank_descending};

/// Weight of each transitively reached creator.
pub const INDIRECT_WEIGHT: f64 = 0.5;

/// Rank every creator by influence, highest first.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn influence_scores<'a>(g: &InfluenceGraph<'a>) -> Vec<CreatorScore<'a>> {
    let mut scores: Vec<CreatorScore<'a>> = (0..g.node_count())
        .map(|i| CreatorScore {
            creator: g.creator(i),
            score: influence_score(g, i),
        })
        .collect();

    rank_descending(&mut scores, |s| s.score);
    scores
}

/// Influence score of a single creator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn influence_score(g: &InfluenceGraph<'_>, idx: usize) -> f64 {
    let direct = g.successors(idx).len() as f64;
    let reached = reachable_count(g, idx) as f64;
    INDIRECT_WEIGHT.mul_add(reached, direct)
}

/// Number of distinct creators reachable from `idx` along forward edges.
#[must_use]
pub fn reachable_count(g: &InfluenceGraph<'_>, idx: usize) -> usize {
    let mut visited = vec![false; g.node_count()];
    let mut queue: VecDeque<usize> = g.successors(idx).iter().copied().collect();
    let mut count = 0;

    while let Some(node) = queue.pop_front() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        count += 1;

        queue.extend(g.successors(node).iter().filter(|&&next| !visited[next]));
    }

    count
}
