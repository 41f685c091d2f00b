//! Betweenness centrality as a fraction of all shortest paths.
//!
//! # Overview
//!
//! Betweenness measures how often a creator lies on shortest paths between
//! other pairs of creators in the undirected closeness view. High-betweenness
//! creators are "bridges" between otherwise separate influence communities.
//!
//! # Definition
//!
//! For a candidate `c`, over every ordered pair `(s, t)` with `s ≠ t` and
//! neither equal to `c`:
//!
//! ```text
//! betweenness(c) = Σ σ_st(c) / Σ σ_st
//! ```
//!
//! where `σ_st` counts *every* shortest `s`–`t` path (not just one) and
//! `σ_st(c)` counts those passing through `c`. The value is 0 when no pair
//! other than `c` is connected. This is a single fraction over all pairs,
//! not the usual sum of per-pair fractions.
//!
//! # Algorithm
//!
//! Enumerating the paths is exponential in path multiplicity. Instead:
//!
//! 1. From every source `s`, run one BFS computing distances `d(s, ·)` and
//!    shortest-path counts `σ(s, ·)`. O(V · E) overall.
//! 2. A shortest `s`–`t` path passes through `c` exactly when
//!    `d(s, c) + d(c, t) = d(s, t)`, and there are `σ_sc · σ_ct` of them.
//!
//! This yields the same counts as explicit enumeration, which
//! [`all_shortest_paths`] provides for cross-checking.
//!
//! Path counts are carried as `f64`, exact up to 2^53 paths per pair.

use std::collections::VecDeque;

use lineage_core::Creator;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::build::InfluenceGraph;
use crate::metrics::rank_descending;

/// A creator with nonzero betweenness centrality.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bridge<'a> {
    pub creator: &'a Creator,
    pub betweenness_centrality: f64,
}

/// Report every creator with betweenness > 0, highest first.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn find_bridges<'a>(g: &InfluenceGraph<'a>) -> Vec<Bridge<'a>> {
    let mut bridges: Vec<Bridge<'a>> = betweenness_scores(g)
        .into_iter()
        .enumerate()
        .filter(|(_, score)| *score > 0.0)
        .map(|(i, score)| Bridge {
            creator: g.creator(i),
            betweenness_centrality: score,
        })
        .collect();

    rank_descending(&mut bridges, |b| b.betweenness_centrality);
    debug!(bridges = bridges.len(), "computed bridge creators");
    bridges
}

/// Betweenness of every creator, indexed by input position.
#[must_use]
pub fn betweenness_scores(g: &InfluenceGraph<'_>) -> Vec<f64> {
    let n = g.node_count();
    let tables: Vec<ShortestPaths> = (0..n).map(|s| ShortestPaths::from_source(g, s)).collect();

    (0..n).map(|c| betweenness_of(&tables, c)).collect()
}

fn betweenness_of(tables: &[ShortestPaths], c: usize) -> f64 {
    let mut through = 0.0_f64;
    let mut total = 0.0_f64;

    for (s, from_s) in tables.iter().enumerate() {
        if s == c {
            continue;
        }
        let from_c = &tables[c];

        for t in 0..tables.len() {
            if t == s || t == c {
                continue;
            }
            let Some(d_st) = from_s.dist[t] else {
                continue;
            };
            total += from_s.sigma[t];

            if let (Some(d_sc), Some(d_ct)) = (from_s.dist[c], from_c.dist[t]) {
                if d_sc + d_ct == d_st {
                    through += from_s.sigma[c] * from_c.sigma[t];
                }
            }
        }
    }

    if total > 0.0 { through / total } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Single-source shortest paths
// ---------------------------------------------------------------------------

/// BFS distances and shortest-path counts from one source.
#[derive(Debug, Clone)]
struct ShortestPaths {
    /// `None` = unreachable.
    dist: Vec<Option<usize>>,
    /// Number of distinct shortest paths from the source.
    sigma: Vec<f64>,
}

impl ShortestPaths {
    fn from_source(g: &InfluenceGraph<'_>, s: usize) -> Self {
        let n = g.node_count();
        let mut dist: Vec<Option<usize>> = vec![None; n];
        let mut sigma: Vec<f64> = vec![0.0; n];
        dist[s] = Some(0);
        sigma[s] = 1.0;

        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            let Some(dv) = dist[v] else {
                continue;
            };

            for &w in g.neighbors(v) {
                // First visit to w?
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                }
            }
        }

        Self { dist, sigma }
    }
}

/// Enumerate every shortest undirected path from `s` to `t`.
///
/// Paths are input positions, `s` first. Returns `[[s]]` when `s == t` and
/// an empty list when `t` is unreachable. The number of paths can grow
/// exponentially with graph size; intended for small graphs and tests.
#[must_use]
pub fn all_shortest_paths(g: &InfluenceGraph<'_>, s: usize, t: usize) -> Vec<Vec<usize>> {
    let n = g.node_count();
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    dist[s] = Some(0);

    let mut queue = VecDeque::from([s]);
    while let Some(v) = queue.pop_front() {
        if v == t {
            // Nodes further out cannot lie on a shortest s–t path.
            break;
        }
        let Some(dv) = dist[v] else {
            continue;
        };
        for &w in g.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
            if dist[w] == Some(dv + 1) {
                predecessors[w].push(v);
            }
        }
    }

    if dist[t].is_none() {
        return Vec::new();
    }

    // Walk predecessor lists back from t.
    let mut paths = Vec::new();
    let mut stack: Vec<Vec<usize>> = vec![vec![t]];
    while let Some(partial) = stack.pop() {
        let Some(&head) = partial.last() else {
            continue;
        };
        if head == s {
            let mut path = partial;
            path.reverse();
            paths.push(path);
            continue;
        }
        for &p in predecessors[head].iter().rev() {
            let mut next = partial.clone();
            next.push(p);
            stack.push(next);
        }
    }

    paths.sort();
    paths
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn build(nodes: &[&str], edges: &[(&str, &str)]) -> Vec<Creator> {
        nodes
            .iter()
            .map(|id| {
                let out = edges.iter().filter(|(a, _)| a == id).map(|(_, b)| *b);
                Creator::new(*id, *id, "").with_influenced(out)
            })
            .collect()
    }

    #[test]
    fn empty_graph_has_no_bridges() {
        let g = InfluenceGraph::from_creators(&[]);
        assert!(find_bridges(&g).is_empty());
        assert!(betweenness_scores(&g).is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        let creators = build(&["a"], &[]);
        let g = InfluenceGraph::from_creators(&creators);
        assert_eq!(betweenness_scores(&g), vec![0.0]);
    }

    #[test]
    fn linear_chain_middle_node_carries_every_path() {
        // a – b – c: excluding b, the only connected pairs are (a,c),(c,a),
        // one shortest path each, both through b.
        let creators = build(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let g = InfluenceGraph::from_creators(&creators);
        let bc = betweenness_scores(&g);

        assert!((bc[0] - 0.0).abs() < 1e-10);
        assert!((bc[1] - 1.0).abs() < 1e-10);
        assert!((bc[2] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn chain_of_four_betweenness() {
        // a – b – c – d. For b, pairs among {a, c, d}:
        //   a–c (through b), a–d (through b), c–d (not) → 4 of 6 ordered.
        let creators = build(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d")],
        );
        let g = InfluenceGraph::from_creators(&creators);
        let bc = betweenness_scores(&g);

        assert!((bc[1] - 4.0 / 6.0).abs() < 1e-10, "got {}", bc[1]);
        assert!((bc[2] - 4.0 / 6.0).abs() < 1e-10, "got {}", bc[2]);
        assert!((bc[0] - 0.0).abs() < 1e-10);
        assert!((bc[3] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn diamond_splits_paths() {
        // a – b – d, a – c – d. For b, pairs among {a, c, d}:
        //   a–d: 2 shortest paths, 1 through b; a–c: 1 path (direct);
        //   c–d: 1 path (direct). Ordered: through 2, total 8.
        let creators = build(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        let g = InfluenceGraph::from_creators(&creators);
        let bc = betweenness_scores(&g);

        assert!((bc[1] - 0.25).abs() < 1e-10, "got {}", bc[1]);
        assert!((bc[2] - 0.25).abs() < 1e-10, "got {}", bc[2]);
    }

    #[test]
    fn star_center_is_the_only_bridge() {
        let creators = build(&["hub", "a", "b", "c"], &[("hub", "a"), ("hub", "b"), ("hub", "c")]);
        let g = InfluenceGraph::from_creators(&creators);
        let bridges = find_bridges(&g);

        assert_eq!(bridges.len(), 1);
        assert_eq!(bridges[0].creator.id, "hub");
        assert!((bridges[0].betweenness_centrality - 1.0).abs() < 1e-10);
    }

    #[test]
    fn disconnected_pairs_have_no_bridges() {
        let creators = build(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
        let g = InfluenceGraph::from_creators(&creators);
        assert!(find_bridges(&g).is_empty());
    }

    #[test]
    fn all_shortest_paths_enumerates_every_equal_length_path() {
        let creators = build(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        let g = InfluenceGraph::from_creators(&creators);

        assert_eq!(all_shortest_paths(&g, 0, 3), vec![vec![0, 1, 3], vec![0, 2, 3]]);
        assert_eq!(all_shortest_paths(&g, 0, 1), vec![vec![0, 1]]);
        assert_eq!(all_shortest_paths(&g, 2, 2), vec![vec![2]]);
    }

    #[test]
    fn all_shortest_paths_unreachable_is_empty() {
        let creators = build(&["a", "b"], &[]);
        let g = InfluenceGraph::from_creators(&creators);
        assert!(all_shortest_paths(&g, 0, 1).is_empty());
    }

    #[test]
    fn counting_matches_enumeration_on_grid() {
        // 3x3 grid: many equal-length shortest paths.
        let nodes = ["n0", "n1", "n2", "n3", "n4", "n5", "n6", "n7", "n8"];
        let edges = [
            ("n0", "n1"), ("n1", "n2"), ("n3", "n4"), ("n4", "n5"), ("n6", "n7"), ("n7", "n8"),
            ("n0", "n3"), ("n3", "n6"), ("n1", "n4"), ("n4", "n7"), ("n2", "n5"), ("n5", "n8"),
        ];
        let creators = build(&nodes, &edges);
        let g = InfluenceGraph::from_creators(&creators);
        let bc = betweenness_scores(&g);

        for (c, score) in bc.iter().enumerate() {
            let mut through = 0usize;
            let mut total = 0usize;
            for s in 0..nodes.len() {
                for t in 0..nodes.len() {
                    if s == t || s == c || t == c {
                        continue;
                    }
                    let paths = all_shortest_paths(&g, s, t);
                    total += paths.len();
                    through += paths.iter().filter(|p| p.contains(&c)).count();
                }
            }
            let expected = crate::metrics::ratio(through, total);
            assert!((score - expected).abs() < 1e-12, "node {c}: {score} vs {expected}");
        }
    }
}
