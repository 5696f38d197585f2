//! Graph construction module

use crate::config::{Config, IndexKind};
use crate::data::Edge;
use crate::error::{ClusteringError, Result};
use crate::graph::compressed::SortedAdjacency;
use crate::graph::store::{GraphStore, PresenceIndex};
use ndarray::Array2;
use std::collections::HashSet;

/// Builder that collects edges first and allocates the graph store once
/// the node count is known
pub struct GraphBuilder {
    /// Edges in input order
    edges: Vec<Edge>,

    /// Declared node count, for graphs with isolated trailing nodes
    node_count: Option<usize>,

    index: IndexKind,

    dense_node_limit: usize,

    dedup_edges: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            edges: Vec::new(),
            node_count: None,
            index: config.index,
            dense_node_limit: config.dense_node_limit,
            dedup_edges: config.dedup_edges,
        }
    }

    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self {
            edges,
            ..Self::new()
        }
    }

    /// Take index selection and deduplication from a run configuration
    pub fn configure(mut self, config: &Config) -> Self {
        self.index = config.index;
        self.dense_node_limit = config.dense_node_limit;
        self.dedup_edges = config.dedup_edges;
        self
    }

    pub fn add_edge(&mut self, u: u32, v: u32) {
        self.edges.push((u, v));
    }

    /// Declare the node count instead of deriving it from the largest id
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = Some(node_count);
        self
    }

    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    pub fn with_dense_node_limit(mut self, limit: usize) -> Self {
        self.dense_node_limit = limit;
        self
    }

    pub fn with_dedup(mut self, dedup_edges: bool) -> Self {
        self.dedup_edges = dedup_edges;
        self
    }

    /// Build the immutable graph store
    pub fn build(self) -> Result<GraphStore> {
        let edges = if self.dedup_edges {
            dedup_undirected(self.edges)
        } else {
            self.edges
        };

        let derived = edges
            .iter()
            .map(|&(u, v)| u.max(v) as usize + 1)
            .max()
            .unwrap_or(0);

        let node_count = match self.node_count {
            None if edges.is_empty() => {
                return Err(ClusteringError::invalid_input(None, "edge list is empty"));
            }
            None => derived,
            Some(declared) if declared < derived => {
                return Err(ClusteringError::invalid_input(
                    None,
                    format!(
                        "edge references node {} but the graph was declared with {} nodes",
                        derived - 1,
                        declared
                    ),
                ));
            }
            Some(declared) => declared,
        };

        let index = self.index.resolve(node_count, self.dense_node_limit);
        log::info!(
            "Building graph with {} nodes and {} edges ({} index)",
            node_count,
            edges.len(),
            index
        );

        let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); node_count];
        let mut matrix = match index {
            IndexKind::Dense => Some(Array2::from_elem((node_count, node_count), false)),
            _ => None,
        };

        for &(u, v) in &edges {
            if let Some(matrix) = matrix.as_mut() {
                matrix[[u as usize, v as usize]] = true;
                matrix[[v as usize, u as usize]] = true;
            }
            neighbors[u as usize].push(v);
            neighbors[v as usize].push(u);
        }

        let presence = match matrix {
            Some(matrix) => PresenceIndex::Dense(matrix),
            None => PresenceIndex::Sorted(SortedAdjacency::from_neighbor_lists(&neighbors)),
        };

        let store = GraphStore::from_parts(edges.len(), neighbors, presence);
        log::debug!("Graph store uses roughly {} bytes", store.memory_usage());

        Ok(store)
    }
}

/// Drop repeated undirected edges, keeping the first occurrence of each
fn dedup_undirected(edges: Vec<Edge>) -> Vec<Edge> {
    let before = edges.len();
    let mut seen: HashSet<Edge> = HashSet::with_capacity(edges.len());

    let kept: Vec<Edge> = edges
        .into_iter()
        .filter(|&(u, v)| seen.insert((u.min(v), u.max(v))))
        .collect();

    if kept.len() < before {
        log::info!("Dropped {} duplicate edges", before - kept.len());
    }
    kept
}
