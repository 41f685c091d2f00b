//! One-shot analyses over a creator list.
//!
//! [`analyze_network`] builds the graph once and runs every structural
//! metric over it. [`movement_clusters`] and [`key_works`] are the two
//! presentation-oriented rollups used by the CLI's `clusters` and `analyze`
//! commands.

use std::collections::HashMap;
use std::fmt;

use lineage_core::{Creator, Work};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::build::InfluenceGraph;
use crate::graph::chains::{InfluenceChain, longest_chains};
use crate::graph::components::connected_components;
use crate::graph::stats::{compute_average_degree, compute_density};
use crate::metrics::CreatorScore;
use crate::metrics::betweenness::{Bridge, find_bridges};
use crate::metrics::centrality::degree_centrality;
use crate::metrics::clustering::{ClusterScore, clustering_coefficients};
use crate::metrics::influence::influence_scores;

// ---------------------------------------------------------------------------
// NetworkMetrics
// ---------------------------------------------------------------------------

/// Every structural metric of one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics<'a> {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub most_influential: Vec<CreatorScore<'a>>,
    pub most_central: Vec<CreatorScore<'a>>,
    pub clustering_coefficients: Vec<ClusterScore<'a>>,
    pub connected_components: Vec<Vec<&'a Creator>>,
    pub longest_chains: Vec<InfluenceChain<'a>>,
    pub bridges: Vec<Bridge<'a>>,
}

/// Build the influence graph and compute every metric over it.
#[must_use]
#[instrument(skip(creators), fields(creators = creators.len()))]
pub fn analyze_network(creators: &[Creator]) -> NetworkMetrics<'_> {
    let g = InfluenceGraph::from_creators(creators);
    let total_nodes = g.node_count();
    let total_edges = g.edge_count();

    let metrics = NetworkMetrics {
        total_nodes,
        total_edges,
        density: compute_density(total_nodes, total_edges),
        average_degree: compute_average_degree(total_nodes, total_edges),
        most_influential: influence_scores(&g),
        most_central: degree_centrality(&g),
        clustering_coefficients: clustering_coefficients(&g),
        connected_components: connected_components(&g),
        longest_chains: longest_chains(&g),
        bridges: find_bridges(&g),
    };

    debug!(
        nodes = total_nodes,
        edges = total_edges,
        components = metrics.connected_components.len(),
        chains = metrics.longest_chains.len(),
        bridges = metrics.bridges.len(),
        "network analyzed"
    );

    metrics
}

// ---------------------------------------------------------------------------
// Movement clusters
// ---------------------------------------------------------------------------

/// Period a cluster belongs to, from the mean start year of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Era {
    #[serde(rename = "Pre-Modern")]
    PreModern,
    #[serde(rename = "Modernist")]
    Modernist,
    #[serde(rename = "Mid-Century")]
    MidCentury,
    #[serde(rename = "Late 20th Century")]
    Late20thCentury,
    #[serde(rename = "Contemporary")]
    Contemporary,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Era {
    /// Classify a mean start year.
    #[must_use]
    pub fn from_mean_year(year: f64) -> Self {
        if year < 1900.0 {
            Self::PreModern
        } else if year < 1920.0 {
            Self::Modernist
        } else if year < 1960.0 {
            Self::MidCentury
        } else if year < 1990.0 {
            Self::Late20thCentury
        } else {
            Self::Contemporary
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::PreModern => "Pre-Modern",
            Self::Modernist => "Modernist",
            Self::MidCentury => "Mid-Century",
            Self::Late20thCentury => "Late 20th Century",
            Self::Contemporary => "Contemporary",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected component presented as a literary movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementCluster<'a> {
    /// `"Surname-Surname School"` from the first two members.
    pub name: String,
    pub members: Vec<&'a Creator>,
    pub era: Era,
}

/// One cluster per connected component, largest first.
#[must_use]
#[instrument(skip(creators), fields(creators = creators.len()))]
pub fn movement_clusters(creators: &[Creator]) -> Vec<MovementCluster<'_>> {
    let g = InfluenceGraph::from_creators(creators);

    connected_components(&g)
        .into_iter()
        .map(|members| MovementCluster {
            name: school_name(&members),
            era: cluster_era(&members),
            members,
        })
        .collect()
}

fn school_name(members: &[&Creator]) -> String {
    let surnames: Vec<&str> = members.iter().take(2).map(|c| c.surname()).collect();
    format!("{} School", surnames.join("-"))
}

#[allow(clippy::cast_precision_loss)]
fn cluster_era(members: &[&Creator]) -> Era {
    let years: Vec<i32> = members.iter().filter_map(|c| c.start_year()).collect();
    if years.is_empty() {
        return Era::Unknown;
    }
    let total: i64 = years.iter().map(|&y| i64::from(y)).sum();
    Era::from_mean_year(total as f64 / years.len() as f64)
}

// ---------------------------------------------------------------------------
// Key works
// ---------------------------------------------------------------------------

/// A work ranked by how connected its creator is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyWork<'a> {
    pub work: &'a Work,
    pub creator: &'a Creator,
    /// In-degree plus out-degree of the creator.
    pub influence_score: usize,
}

/// Rank every work by its creator's total degree, highest first.
///
/// A work id declared more than once keeps its position of first
/// appearance and the creator of its last declaration.
#[must_use]
#[instrument(skip(creators), fields(creators = creators.len()))]
pub fn key_works(creators: &[Creator]) -> Vec<KeyWork<'_>> {
    let g = InfluenceGraph::from_creators(creators);
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut works: Vec<KeyWork<'_>> = Vec::new();

    for (idx, creator) in creators.iter().enumerate() {
        let influence_score = g.in_degree(idx) + g.out_degree(idx);
        for work in &creator.works {
            let entry = KeyWork {
                work,
                creator,
                influence_score,
            };
            match slot.get(work.id.as_str()) {
                Some(&pos) => works[pos] = entry,
                None => {
                    slot.insert(work.id.as_str(), works.len());
                    works.push(entry);
                }
            }
        }
    }

    works.sort_by(|a, b| b.influence_score.cmp(&a.influence_score));
    works
}
