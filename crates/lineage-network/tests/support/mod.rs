//! Random network generators shared by the property tests.

use lineage_core::Creator;
use proptest::prelude::*;

/// Build creators `c0..c{n-1}` from `(from, to, declared_on_target)` edges.
///
/// Each edge is declared on exactly one side, chosen by the flag, so the
/// builder's union of both declarations is exercised.
pub fn network(n: usize, edges: &[(usize, usize, bool)]) -> Vec<Creator> {
    let mut creators: Vec<Creator> = (0..n)
        .map(|i| Creator::new(format!("c{i}"), format!("Creator {i}"), ""))
        .collect();

    for &(from, to, on_target) in edges {
        if on_target {
            creators[to].influenced_by.push(format!("c{from}"));
        } else {
            creators[from].influenced.push(format!("c{to}"));
        }
    }

    creators
}

/// Random network of 1..=`max_nodes` creators, self-loops allowed.
pub fn arb_network(max_nodes: usize) -> impl Strategy<Value = Vec<Creator>> {
    (1..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, any::<bool>()), 0..=n * 2)
            .prop_map(move |edges| network(n, &edges))
    })
}

/// Random network without self-loops.
pub fn arb_loop_free_network(max_nodes: usize) -> impl Strategy<Value = Vec<Creator>> {
    (1..=max_nodes).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, any::<bool>()), 0..=n * 2).prop_map(move |edges| {
            let edges: Vec<_> = edges.into_iter().filter(|(a, b, _)| a != b).collect();
            network(n, &edges)
        })
    })
}
