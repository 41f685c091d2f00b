//! Per-creator metrics over the influence graph.
//!
//! # Overview
//!
//! Each metric answers a different question about a creator's place in the
//! network:
//!
//! - **Influence** (`influence`): How far does this creator's influence
//!   reach, directly and transitively?
//! - **Degree centrality** (`centrality`): What fraction of the network is
//!   this creator directly connected to?
//! - **Clustering** (`clustering`): How tightly knit is this creator's
//!   circle?
//! - **Betweenness** (`betweenness`): Which creators bridge otherwise
//!   separate communities?
//!
//! # Usage
//!
//! All metrics take an [`InfluenceGraph`](crate::graph::InfluenceGraph) and
//! return rankings sorted descending by score. Sorting is stable, so ties
//! keep input order.
//!
//! ```rust
//! use lineage_core::Creator;
//! use lineage_network::graph::InfluenceGraph;
//! use lineage_network::metrics::{centrality::degree_centrality, influence::influence_scores};
//!
//! let creators = vec![
//!     Creator::new("a", "A", "").with_influenced(["b"]),
//!     Creator::new("b", "B", "").with_influenced(["c"]),
//!     Creator::new("c", "C", ""),
//! ];
//! let g = InfluenceGraph::from_creators(&creators);
//!
//! let influence = influence_scores(&g);
//! assert_eq!(influence[0].creator.id, "a");
//!
//! let central = degree_centrality(&g);
//! assert_eq!(central[0].creator.id, "b");
//! ```

use lineage_core::Creator;
use serde::Serialize;

pub mod betweenness;
pub mod centrality;
pub mod clustering;
pub mod influence;

/// A creator paired with a ranking score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorScore<'a> {
    pub creator: &'a Creator,
    pub score: f64,
}

/// Stable descending sort by an `f64` key.
pub(crate) fn rank_descending<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}

/// `numerator / denominator`, or 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
