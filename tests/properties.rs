use clustering_coefficient::cluster::partition::partition;
use clustering_coefficient::cluster::{local_clustering, local_coefficients};
use clustering_coefficient::{CoefficientEngine, GraphBuilder, GraphStore, IndexKind};
use proptest::prelude::*;

const MAX_NODES: u32 = 40;

fn edge_lists() -> impl Strategy<Value = Vec<(u32, u32)>> {
    proptest::collection::vec((0..MAX_NODES, 0..MAX_NODES), 1..150)
}

/// Edges without self-loops or repeats, so coefficients stay in [0, 1]
fn simple_edge_lists() -> impl Strategy<Value = Vec<(u32, u32)>> {
    edge_lists().prop_map(|edges| {
        let mut seen = std::collections::HashSet::new();
        let mut simple: Vec<(u32, u32)> = edges
            .into_iter()
            .filter(|&(u, v)| u != v && seen.insert((u.min(v), u.max(v))))
            .collect();
        if simple.is_empty() {
            simple.push((0, 1));
        }
        simple
    })
}

fn build(edges: Vec<(u32, u32)>, index: IndexKind) -> GraphStore {
    GraphBuilder::from_edges(edges).with_index(index).build().unwrap()
}

proptest! {
    #[test]
    fn partition_covers_every_node_once(n in 0usize..500, workers in 1usize..64) {
        let ranges = partition(n, workers);
        prop_assert_eq!(ranges.len(), workers);

        let mut next = 0;
        for range in &ranges {
            prop_assert!(range.start <= range.end);
            if !range.is_empty() {
                prop_assert_eq!(range.start, next, "gap or overlap at {:?}", range);
                next = range.end;
            }
        }
        prop_assert_eq!(next, n);
        prop_assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), n);
    }

    #[test]
    fn coefficients_bounded_without_duplicates(edges in simple_edge_lists()) {
        let g = build(edges, IndexKind::Dense);
        for node in 0..g.node_count() {
            let c = local_clustering(&g, node);
            prop_assert!((0.0..=1.0).contains(&c), "node {} has {}", node, c);
            if g.degree(node) < 2 {
                prop_assert_eq!(c, 0.0);
            }
        }
    }

    #[test]
    fn average_invariant_to_thread_count(edges in edge_lists()) {
        let g = build(edges, IndexKind::Auto);
        let single = CoefficientEngine::new(1).unwrap().average(&g).unwrap();

        for threads in [2, 8, 64] {
            let avg = CoefficientEngine::new(threads).unwrap().average(&g).unwrap();
            prop_assert!((avg - single).abs() < 1e-9, "{} threads: {} vs {}", threads, avg, single);
        }

        let per_node = local_coefficients(&g);
        let mean = per_node.iter().sum::<f64>() / g.node_count() as f64;
        prop_assert!((mean - single).abs() < 1e-9);
    }

    #[test]
    fn dense_and_sorted_indexes_agree(edges in edge_lists()) {
        let dense = build(edges.clone(), IndexKind::Dense);
        let sorted = build(edges, IndexKind::Sorted);

        prop_assert_eq!(dense.node_count(), sorted.node_count());
        for u in 0..dense.node_count() as u32 {
            for v in 0..dense.node_count() as u32 {
                prop_assert_eq!(dense.adjacent(u, v), sorted.adjacent(u, v));
            }
        }
        prop_assert_eq!(local_coefficients(&dense), local_coefficients(&sorted));
    }
}
