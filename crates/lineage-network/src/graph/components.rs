//! Connected components over the undirected closeness view.

use std::collections::VecDeque;

use lineage_core::Creator;
use tracing::instrument;

use crate::graph::build::InfluenceGraph;

/// Partition the graph into connected components.
///
/// Breadth-first traversal over the undirected adjacency, starting a new
/// component at each still-unvisited creator in input order. Members are
/// listed in discovery order. Components are returned largest first; equal
/// sizes keep their discovery order.
///
/// The result partitions the node set: every creator appears in exactly one
/// component.
#[must_use]
#[instrument(skip(g), fields(nodes = g.node_count()))]
pub fn connected_components<'a>(g: &InfluenceGraph<'a>) -> Vec<Vec<&'a Creator>> {
    component_positions(g)
        .into_iter()
        .map(|members| g.resolve(&members))
        .collect()
}

/// Same as [`connected_components`] but yields input positions.
#[must_use]
pub fn component_positions(g: &InfluenceGraph<'_>) -> Vec<Vec<usize>> {
    let n = g.node_count();
    let mut visited = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(node) = queue.pop_front() {
            members.push(node);
            for &neighbor in g.neighbors(node) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(members);
    }

    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components
}
