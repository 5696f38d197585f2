//! Local clustering coefficient of a single node

use crate::graph::GraphStore;
use itertools::Itertools;
use rayon::prelude::*;

/// Fraction of a node's neighbor pairs that are themselves connected.
///
/// Pairs are taken over positions in the neighbor sequence, so a neighbor
/// recorded twice (from a repeated input edge) takes part in pairs twice.
/// Nodes with fewer than two neighbor entries have coefficient 0.0.
pub fn local_clustering(graph: &GraphStore, node: usize) -> f64 {
    let neighbors = graph.neighbors(node);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let connected = neighbors
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| graph.adjacent(a, b))
        .count();

    let possible = k * (k - 1) / 2;
    connected as f64 / possible as f64
}

/// Local clustering coefficient of every node, computed on the rayon pool
pub fn local_coefficients(graph: &GraphStore) -> Vec<f64> {
    (0..graph.node_count())
        .into_par_iter()
        .map(|node| local_clustering(graph, node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexKind;
    use crate::graph::GraphBuilder;

    fn build(edges: Vec<(u32, u32)>, index: IndexKind) -> GraphStore {
        GraphBuilder::from_edges(edges).with_index(index).build().unwrap()
    }

    #[test]
    fn triangle_nodes_are_fully_clustered() {
        for index in [IndexKind::Dense, IndexKind::Sorted] {
            let g = build(vec![(0, 1), (0, 2), (1, 2)], index);
            for node in 0..3 {
                assert_eq!(local_clustering(&g, node), 1.0);
            }
        }
    }

    #[test]
    fn low_degree_nodes_are_zero() {
        let g = build(vec![(0, 1), (1, 2)], IndexKind::Dense);
        assert_eq!(local_clustering(&g, 0), 0.0);
        assert_eq!(local_clustering(&g, 2), 0.0);
        // Neighbors 0 and 2 are not connected
        assert_eq!(local_clustering(&g, 1), 0.0);
    }

    #[test]
    fn partially_connected_neighborhood() {
        // 0 has neighbors 1, 2, 3; only 1-2 is an edge
        let g = build(vec![(0, 1), (0, 2), (0, 3), (1, 2)], IndexKind::Sorted);
        let c = local_clustering(&g, 0);
        assert!((c - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_entries_are_counted_per_position() {
        // neighbors of 0: [1, 2, 1]; pairs (1,2) (1,1) (2,1), two of them are edges
        let g = build(vec![(0, 1), (0, 2), (0, 1), (1, 2)], IndexKind::Dense);
        assert_eq!(g.degree(0), 3);
        let c = local_clustering(&g, 0);
        assert!((c - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn per_node_vector_matches_single_queries() {
        let g = build(vec![(0, 1), (0, 2), (1, 2), (2, 3)], IndexKind::Dense);
        let all = local_coefficients(&g);
        assert_eq!(all.len(), 4);
        for (node, &c) in all.iter().enumerate() {
            assert_eq!(c, local_clustering(&g, node));
        }
        assert!((all[2] - 1.0 / 3.0).abs() < 1e-12);
    }
}
