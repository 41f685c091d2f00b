//! Property tests for structural invariants of the analysis engine.

#![allow(clippy::cast_precision_loss)]

mod support;

use std::collections::HashSet;

use lineage_network::graph::InfluenceGraph;
use lineage_network::graph::chains::longest_chains;
use lineage_network::graph::components::component_positions;
use lineage_network::graph::stats::NetworkStats;
use lineage_network::metrics::betweenness::{all_shortest_paths, betweenness_scores};
use lineage_network::metrics::centrality::centrality_of;
use lineage_network::metrics::clustering::clustering_of;
use lineage_network::metrics::influence::influence_score;
use proptest::prelude::*;
use support::{arb_loop_free_network, arb_network};

/// Betweenness by explicit enumeration of every shortest path.
fn enumerated_betweenness(g: &InfluenceGraph<'_>, c: usize) -> f64 {
    let n = g.node_count();
    let mut through = 0usize;
    let mut total = 0usize;

    for s in (0..n).filter(|&s| s != c) {
        for t in (0..n).filter(|&t| t != s && t != c) {
            let paths = all_shortest_paths(g, s, t);
            total += paths.len();
            through += paths.iter().filter(|p| p.contains(&c)).count();
        }
    }

    if total == 0 {
        0.0
    } else {
        through as f64 / total as f64
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn components_partition_nodes(creators in arb_network(12)) {
        let g = InfluenceGraph::from_creators(&creators);
        let components = component_positions(&g);

        let mut seen = HashSet::new();
        for component in &components {
            prop_assert!(!component.is_empty());
            for &idx in component {
                prop_assert!(seen.insert(idx), "node {} in two components", idx);
            }
        }
        prop_assert_eq!(seen.len(), creators.len());

        for pair in components.windows(2) {
            prop_assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn density_is_bounded_without_self_loops(creators in arb_loop_free_network(12)) {
        let g = InfluenceGraph::from_creators(&creators);
        let stats = NetworkStats::from_graph(&g);
        prop_assert!(stats.density >= 0.0);
        prop_assert!(stats.density <= 1.0);
    }

    #[test]
    fn undirected_path_is_symmetric(creators in arb_network(10), a in 0usize..10, b in 0usize..10) {
        let g = InfluenceGraph::from_creators(&creators);
        let a = format!("c{}", a % creators.len());
        let b = format!("c{}", b % creators.len());

        let forward = g.undirected_path(&a, &b).map(|p| p.length);
        let backward = g.undirected_path(&b, &a).map(|p| p.length);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn path_to_self_is_trivial(creators in arb_network(10), a in 0usize..10) {
        let g = InfluenceGraph::from_creators(&creators);
        let id = format!("c{}", a % creators.len());

        for path in [g.undirected_path(&id, &id), g.directed_path(&id, &id)] {
            let path = path.expect("self path exists");
            prop_assert_eq!(path.length, 0);
            prop_assert_eq!(path.path.len(), 1);
        }
    }

    #[test]
    fn directed_path_is_never_shorter(creators in arb_network(10), a in 0usize..10, b in 0usize..10) {
        let g = InfluenceGraph::from_creators(&creators);
        let a = format!("c{}", a % creators.len());
        let b = format!("c{}", b % creators.len());

        if let Some(directed) = g.directed_path(&a, &b) {
            let undirected = g.undirected_path(&a, &b).expect("directed implies undirected");
            prop_assert!(undirected.length <= directed.length);

            for step in directed.path.windows(2) {
                prop_assert!(step[0].influenced.contains(&step[1].id)
                    || step[1].influenced_by.contains(&step[0].id));
            }
        }
    }

    #[test]
    fn peripheral_nodes_have_zero_betweenness(creators in arb_network(12)) {
        let g = InfluenceGraph::from_creators(&creators);
        let scores = betweenness_scores(&g);

        for (idx, score) in scores.iter().enumerate() {
            prop_assert!((0.0..=1.0).contains(score));
            if g.neighbors(idx).len() <= 1 {
                prop_assert!(score.abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn path_counting_matches_enumeration(creators in arb_network(8)) {
        let g = InfluenceGraph::from_creators(&creators);
        let scores = betweenness_scores(&g);

        for (c, score) in scores.iter().enumerate() {
            let expected = enumerated_betweenness(&g, c);
            prop_assert!((score - expected).abs() < 1e-9, "node {}: {} vs {}", c, score, expected);
        }
    }

    #[test]
    fn chains_are_simple_forward_paths(creators in arb_network(10)) {
        let g = InfluenceGraph::from_creators(&creators);

        for chain in longest_chains(&g) {
            prop_assert_eq!(chain.length, chain.path.len() - 1);
            prop_assert!(chain.length >= 2);

            let distinct: HashSet<&str> = chain.path.iter().map(|c| c.id.as_str()).collect();
            prop_assert_eq!(distinct.len(), chain.path.len());

            for step in chain.path.windows(2) {
                let from = g.index_of(&step[0].id).expect("known id");
                let to = g.index_of(&step[1].id).expect("known id");
                prop_assert!(g.successors(from).contains(&to));
            }
        }
    }

    #[test]
    fn local_metrics_are_in_range(creators in arb_network(12)) {
        let g = InfluenceGraph::from_creators(&creators);
        let n = g.node_count();

        for idx in 0..n {
            let clustering = clustering_of(&g, idx);
            prop_assert!((0.0..=1.0).contains(&clustering));

            let centrality = centrality_of(&g, idx);
            let expected = if n > 1 {
                g.neighbors(idx).len() as f64 / (n - 1) as f64
            } else {
                0.0
            };
            prop_assert!((centrality - expected).abs() < 1e-12);
            prop_assert!(centrality <= 1.0);

            prop_assert!(influence_score(&g, idx) >= g.out_degree(idx) as f64);
        }
    }
}
