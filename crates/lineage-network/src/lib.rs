#![forbid(unsafe_code)]
//! lineage-network library.
//!
//! Influence-network analysis engine: builds a directed influence graph from
//! a creator list and computes structural metrics and path queries over it.
//! Every entry point is a pure function of its input slice and rebuilds the
//! graph from scratch.
//!
//! # Conventions
//!
//! - **Errors**: The engine has no error paths. Unknown references are
//!   dropped, degenerate inputs use definitional guards, and "no path" is
//!   `None`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Determinism**: Adjacency lists follow input order and every ranking
//!   uses a stable sort, so ties keep input order.

pub mod analysis;
pub mod graph;
pub mod metrics;
pub mod paths;

pub use analysis::{
    Era, KeyWork, MovementCluster, NetworkMetrics, analyze_network, key_works, movement_clusters,
};
pub use graph::{InfluenceChain, InfluenceGraph, NetworkStats};
pub use metrics::CreatorScore;
pub use metrics::betweenness::Bridge;
pub use metrics::clustering::ClusterScore;
pub use paths::{CreatorPath, Separation, directed_path, separation_table, undirected_path};
