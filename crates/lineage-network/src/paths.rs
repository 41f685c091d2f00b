//! Path queries between two creators.
//!
//! Two distinct questions, kept as two operations:
//!
//! - [`undirected_path`]: "degrees of separation". Influence links are
//!   treated as closeness in either direction.
//! - [`directed_path`]: "is there real ancestry". Only forward influence
//!   edges are followed, so a connection may exist undirected but not
//!   directed.
//!
//! Both return `None` when no path exists or either ID is unknown; that is
//! an answer, not an error.

use std::collections::VecDeque;

use lineage_core::Creator;
use serde::Serialize;
use tracing::instrument;

use crate::graph::build::InfluenceGraph;

/// A path between two creators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorPath<'a> {
    pub path: Vec<&'a Creator>,
    /// Edge count: `path.len() - 1`.
    pub length: usize,
}

/// Undirected distance between two creators, for the separation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Separation<'a> {
    pub from: &'a Creator,
    pub to: &'a Creator,
    pub length: usize,
}

/// Shortest path ignoring influence direction.
#[must_use]
pub fn undirected_path<'a>(creators: &'a [Creator], from: &str, to: &str) -> Option<CreatorPath<'a>> {
    InfluenceGraph::from_creators(creators).undirected_path(from, to)
}

/// Shortest path following influence forward only.
#[must_use]
pub fn directed_path<'a>(creators: &'a [Creator], from: &str, to: &str) -> Option<CreatorPath<'a>> {
    InfluenceGraph::from_creators(creators).directed_path(from, to)
}

/// Degrees of separation for every connected pair `(i, j)`, `i < j` in
/// input order.
#[must_use]
#[instrument(skip(creators), fields(creators = creators.len()))]
pub fn separation_table(creators: &[Creator]) -> Vec<Separation<'_>> {
    let g = InfluenceGraph::from_creators(creators);
    let n = g.node_count();
    let mut table = Vec::new();

    for i in 0..n {
        let dist = bfs_distances(&g, i);
        for (j, d) in dist.iter().enumerate().skip(i + 1) {
            if let Some(length) = *d {
                table.push(Separation {
                    from: g.creator(i),
                    to: g.creator(j),
                    length,
                });
            }
        }
    }

    table
}

impl<'a> InfluenceGraph<'a> {
    /// Shortest path over the undirected closeness view.
    #[must_use]
    pub fn undirected_path(&self, from: &str, to: &str) -> Option<CreatorPath<'a>> {
        let s = self.index_of(from)?;
        let t = self.index_of(to)?;
        self.bfs_path(s, t, Self::neighbors)
    }

    /// Shortest path along forward influence edges.
    #[must_use]
    pub fn directed_path(&self, from: &str, to: &str) -> Option<CreatorPath<'a>> {
        let s = self.index_of(from)?;
        let t = self.index_of(to)?;
        self.bfs_path(s, t, Self::successors)
    }

    fn bfs_path<F>(&self, s: usize, t: usize, next: F) -> Option<CreatorPath<'a>>
    where
        F: for<'g> Fn(&'g Self, usize) -> &'g [usize],
    {
        if s == t {
            return Some(CreatorPath {
                path: vec![self.creator(s)],
                length: 0,
            });
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut seen = vec![false; self.node_count()];
        seen[s] = true;

        let mut queue = VecDeque::from([s]);
        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if current == t {
                found = true;
                break;
            }
            for &w in next(self, current) {
                if !seen[w] {
                    seen[w] = true;
                    parent[w] = Some(current);
                    queue.push_back(w);
                }
            }
        }

        if !found {
            return None;
        }

        let mut positions = vec![t];
        let mut cursor = t;
        while let Some(p) = parent[cursor] {
            positions.push(p);
            cursor = p;
        }
        positions.reverse();

        let path = self.resolve(&positions);
        Some(CreatorPath {
            length: path.len() - 1,
            path,
        })
    }
}

fn bfs_distances(g: &InfluenceGraph<'_>, s: usize) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; g.node_count()];
    dist[s] = Some(0);
    let mut queue = VecDeque::from([s]);

    while let Some(v) = queue.pop_front() {
        let Some(dv) = dist[v] else {
            continue;
        };
        for &w in g.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }

    dist
}
