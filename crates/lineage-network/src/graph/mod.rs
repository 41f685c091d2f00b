//! Influence graph module.
//!
//! # Overview
//!
//! This module builds the petgraph-based influence graph from a creator list
//! and hosts the structural traversals over it. The graph feeds every metric
//! in [`crate::metrics`] and the path queries in [`crate::paths`].
//!
//! ## Pipeline
//!
//! ```text
//! &[Creator]
//!        ↓  build::InfluenceGraph::from_creators()
//! InfluenceGraph (DiGraph + forward and undirected adjacency)
//!        ├─ components::connected_components()
//!        ├─ chains::longest_chains()
//!        └─ stats::NetworkStats::from_graph()
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use lineage_core::Creator;
//! use lineage_network::graph::{InfluenceGraph, NetworkStats};
//!
//! let creators = vec![
//!     Creator::new("hemingway", "Ernest Hemingway", "1899-1961").with_influenced(["carver"]),
//!     Creator::new("carver", "Raymond Carver", "1938-1988"),
//! ];
//! let g = InfluenceGraph::from_creators(&creators);
//! let stats = NetworkStats::from_graph(&g);
//! assert_eq!(stats.edge_count, 1);
//! ```

pub mod build;
pub mod chains;
pub mod components;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::InfluenceGraph;
pub use chains::{InfluenceChain, longest_chains};
pub use components::connected_components;
pub use stats::NetworkStats;
