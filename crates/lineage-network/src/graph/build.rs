//! Influence graph construction from a creator list.
//!
//! # Overview
//!
//! [`InfluenceGraph`] turns a slice of [`Creator`] records into a
//! [`petgraph`] directed graph plus two precomputed adjacency views that
//! every analysis in this crate reads:
//!
//! - **successors**: forward influence (`A → B` means A influenced B).
//! - **neighbors**: the undirected closeness view, direction discarded.
//!
//! ## Edge Sources
//!
//! An edge `A → B` exists when *either* endpoint declares it:
//! `A.influenced` contains `B`, or `B.influenced_by` contains `A`. One-sided
//! or inconsistent data therefore still yields a symmetric undirected view.
//! Duplicate declarations collapse to a single edge.
//!
//! ## Node Set
//!
//! Nodes are exactly the input creators, in input order: node `i` is
//! `creators[i]` and `NodeIndex::index()` equals the input position.
//! References to IDs outside the input are dropped. Self-loops are kept as
//! directed edges but never appear in the undirected neighbor lists. This
//! differs from a plain neighbor-set union, which would list a self-looped
//! creator as its own neighbor: here degree centrality and clustering see
//! only the creator's real neighbors, and centrality stays within `[0, 1]`.
//!
//! All adjacency lists are sorted by input position, so every traversal in
//! the crate is deterministic.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use lineage_core::Creator;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use tracing::{debug, instrument};

// ---------------------------------------------------------------------------
// InfluenceGraph
// ---------------------------------------------------------------------------

/// A directed influence graph borrowed from a creator slice.
///
/// Built fresh for every analysis call and dropped afterwards; it holds no
/// state beyond what the input slice implies.
#[derive(Debug)]
pub struct InfluenceGraph<'a> {
    creators: &'a [Creator],
    /// Directed graph: node weights are creator IDs, edges are influence.
    pub graph: DiGraph<&'a str, ()>,
    node_map: HashMap<&'a str, NodeIndex>,
    successors: Vec<Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
}

impl<'a> InfluenceGraph<'a> {
    /// Build the graph for `creators`. O(V + E).
    ///
    /// IDs are expected to be unique. If they are not, lookups by ID resolve
    /// to the first creator carrying it.
    #[must_use]
    #[instrument(skip(creators), fields(creators = creators.len()))]
    pub fn from_creators(creators: &'a [Creator]) -> Self {
        let mut graph = DiGraph::<&'a str, ()>::with_capacity(creators.len(), creators.len() * 2);
        let mut node_map: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(creators.len());

        for creator in creators {
            let idx = graph.add_node(creator.id.as_str());
            node_map.entry(creator.id.as_str()).or_insert(idx);
        }

        for (i, creator) in creators.iter().enumerate() {
            let me = NodeIndex::new(i);

            for target in creator.influenced.iter().filter_map(|id| node_map.get(id.as_str())) {
                if !graph.contains_edge(me, *target) {
                    graph.add_edge(me, *target, ());
                }
            }

            for source in creator.influenced_by.iter().filter_map(|id| node_map.get(id.as_str())) {
                if !graph.contains_edge(*source, me) {
                    graph.add_edge(*source, me, ());
                }
            }
        }

        let successors = (0..creators.len())
            .map(|i| {
                sorted_positions(graph.neighbors_directed(NodeIndex::new(i), Direction::Outgoing))
            })
            .collect();

        let neighbors = (0..creators.len())
            .map(|i| {
                let me = NodeIndex::new(i);
                sorted_positions(graph.neighbors_undirected(me).filter(|&n| n != me))
            })
            .collect();

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built influence graph"
        );

        Self {
            creators,
            graph,
            node_map,
            successors,
            neighbors,
        }
    }

    /// The creator slice this graph was built from.
    #[must_use]
    pub const fn creators(&self) -> &'a [Creator] {
        self.creators
    }

    /// Return the number of nodes (creators) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of distinct directed influence edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The creator at input position `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= node_count()`.
    #[must_use]
    pub fn creator(&self, idx: usize) -> &'a Creator {
        &self.creators[idx]
    }

    /// Input position of the creator with `id`, if present.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_map.get(id).map(|idx| idx.index())
    }

    /// Forward successors of `idx` (creators it influenced), ascending.
    #[must_use]
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    /// Undirected neighbors of `idx`, ascending, never containing `idx`.
    #[must_use]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    /// Whether `a` and `b` are adjacent in the undirected view.
    #[must_use]
    pub fn has_neighbor(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    /// Number of incoming influence edges.
    #[must_use]
    pub fn in_degree(&self, idx: usize) -> usize {
        self.graph
            .neighbors_directed(NodeIndex::new(idx), Direction::Incoming)
            .count()
    }

    /// Number of outgoing influence edges.
    #[must_use]
    pub fn out_degree(&self, idx: usize) -> usize {
        self.graph
            .neighbors_directed(NodeIndex::new(idx), Direction::Outgoing)
            .count()
    }

    /// Map a list of input positions back to creators.
    #[must_use]
    pub fn resolve(&self, positions: &[usize]) -> Vec<&'a Creator> {
        positions.iter().map(|&i| self.creator(i)).collect()
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn sorted_positions(iter: impl Iterator<Item = NodeIndex>) -> Vec<usize> {
    let mut positions: Vec<usize> = iter.map(NodeIndex::index).collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
