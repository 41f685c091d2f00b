//! Longest directed influence chains.
//!
//! # Algorithm
//!
//! 1. For every root, depth-first search along forward influence edges.
//!    Cycle safety is *path-local*: a creator already on the current path is
//!    skipped, but the same creator may appear in chains from other roots.
//! 2. At each leaf (no successor outside the current path) compare the path
//!    against the root's best; the first strictly longer path wins.
//! 3. Keep roots whose best chain has at least 2 edges (3 creators).
//! 4. Drop a chain when every one of its creators also appears in another
//!    chain with strictly more edges. Membership is compared as sets, so a
//!    chain visiting the same creators in a different order is dropped too.
//! 5. Sort longest first; equal lengths keep root input order.
//!
//! The DFS enumerates every simple forward path from each root, so cost grows
//! with path multiplicity. Step 4 is quadratic in the number of chains. Both
//! are fine for datasets of a few hundred creators.

use lineage_core::Creator;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::build::InfluenceGraph;

/// Minimum number of edges for a chain to be reported.
pub const MIN_CHAIN_EDGES: usize = 2;

/// A maximal forward influence chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfluenceChain<'a> {
    pub from: &'a Creator,
    pub to: &'a Creator,
    pub path: Vec<&'a Creator>,
    /// Edge count: always `path.len() - 1`.
    pub length: usize,
}

/// Compute the deduplicated longest influence chains.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn longest_chains<'a>(g: &InfluenceGraph<'a>) -> Vec<InfluenceChain<'a>> {
    let candidates: Vec<Vec<usize>> = (0..g.node_count())
        .map(|root| longest_chain_from(g, root))
        .filter(|chain| chain.len() > MIN_CHAIN_EDGES)
        .collect();

    let mut kept = dedup_subchains(candidates);
    kept.sort_by(|a, b| b.len().cmp(&a.len()));

    debug!(chains = kept.len(), "computed longest influence chains");

    kept.into_iter()
        .map(|positions| {
            let path = g.resolve(&positions);
            InfluenceChain {
                from: path[0],
                to: path[path.len() - 1],
                length: path.len() - 1,
                path,
            }
        })
        .collect()
}

/// Longest forward path starting at `root`, as input positions.
///
/// Returns `[root]` when `root` has no forward successors.
#[must_use]
pub fn longest_chain_from(g: &InfluenceGraph<'_>, root: usize) -> Vec<usize> {
    let mut on_path = vec![false; g.node_count()];
    on_path[root] = true;

    let mut search = ChainSearch {
        g,
        path: vec![root],
        on_path,
        best: vec![root],
    };
    search.extend();
    search.best
}

struct ChainSearch<'g, 'a> {
    g: &'g InfluenceGraph<'a>,
    path: Vec<usize>,
    on_path: Vec<bool>,
    best: Vec<usize>,
}

impl ChainSearch<'_, '_> {
    fn extend(&mut self) {
        let Some(&current) = self.path.last() else {
            return;
        };

        let mut is_leaf = true;
        for &next in self.g.successors(current) {
            if self.on_path[next] {
                continue;
            }
            is_leaf = false;

            self.path.push(next);
            self.on_path[next] = true;
            self.extend();
            self.on_path[next] = false;
            self.path.pop();
        }

        if is_leaf && self.path.len() > self.best.len() {
            self.best.clone_from(&self.path);
        }
    }
}

/// Remove every chain whose creators are a subset of a strictly longer chain.
fn dedup_subchains(candidates: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let sorted_members: Vec<Vec<usize>> = candidates
        .iter()
        .map(|chain| {
            let mut members = chain.clone();
            members.sort_unstable();
            members
        })
        .collect();

    candidates
        .into_iter()
        .enumerate()
        .filter(|(i, chain)| {
            !sorted_members.iter().enumerate().any(|(j, other)| {
                j != *i
                    && other.len() > chain.len()
                    && chain.iter().all(|node| other.binary_search(node).is_ok())
            })
        })
        .map(|(_, chain)| chain)
        .collect()
}
