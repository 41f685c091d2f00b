//! Basic statistics for the influence graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: Number of creators.
//! - **edge_count**: Distinct directed influence edges.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than 2 nodes.
//! - **average_degree**: Mean of in-degree + out-degree per node.
//! - **component_count**: Connected components of the undirected view.
//! - **isolated_node_count**: Creators with no neighbors at all.
//! - **max_in_degree** / **max_out_degree**: Most-influenced creator and
//!   most-influential creator by direct edges.

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::build::InfluenceGraph;

// ---------------------------------------------------------------------------
// NetworkStats
// ---------------------------------------------------------------------------

/// Summary statistics for an influence graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Ranges from 0.0 (no edges) to 1.0 for loop-free input.
    pub density: f64,
    pub average_degree: f64,
    pub component_count: usize,
    pub isolated_node_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
}

impl NetworkStats {
    /// Compute statistics from an [`InfluenceGraph`].
    #[must_use]
    pub fn from_graph(g: &InfluenceGraph<'_>) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();

        let isolated_node_count = (0..node_count)
            .filter(|&i| g.neighbors(i).is_empty())
            .count();

        let max_in_degree = (0..node_count).map(|i| g.in_degree(i)).max().unwrap_or(0);
        let max_out_degree = (0..node_count).map(|i| g.out_degree(i)).max().unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            average_degree: compute_average_degree(node_count, edge_count),
            // petgraph treats directed edges as undirected here, matching
            // the closeness view.
            component_count: connected_components(&g.graph),
            isolated_node_count,
            max_in_degree,
            max_out_degree,
        }
    }

    /// Return `true` if the graph has no influence edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }
}

// ---------------------------------------------------------------------------
// Internal helpers (cast precision suppressed at function scope)
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
pub(crate) fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

/// Every directed edge adds one to an in-degree and one to an out-degree.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn compute_average_degree(node_count: usize, edge_count: usize) -> f64 {
    if node_count == 0 {
        return 0.0_f64;
    }
    (2 * edge_count) as f64 / node_count as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
