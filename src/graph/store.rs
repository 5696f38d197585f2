//! Immutable graph store shared read-only by all workers

use crate::config::IndexKind;
use crate::graph::compressed::SortedAdjacency;
use ndarray::Array2;
use std::mem;

/// Adjacency presence structure answering "are u and v connected?"
#[derive(Debug, Clone)]
pub enum PresenceIndex {
    /// Symmetric n x n matrix
    Dense(Array2<bool>),
    /// Sorted per-node neighbor ranges
    Sorted(SortedAdjacency),
}

impl PresenceIndex {
    pub fn kind(&self) -> IndexKind {
        match self {
            PresenceIndex::Dense(_) => IndexKind::Dense,
            PresenceIndex::Sorted(_) => IndexKind::Sorted,
        }
    }

    #[inline]
    pub fn contains(&self, u: u32, v: u32) -> bool {
        match self {
            PresenceIndex::Dense(matrix) => matrix[[u as usize, v as usize]],
            PresenceIndex::Sorted(sorted) => sorted.has_edge(u as usize, v),
        }
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        match self {
            PresenceIndex::Dense(matrix) => matrix.len() * mem::size_of::<bool>(),
            PresenceIndex::Sorted(sorted) => sorted.memory_usage(),
        }
    }
}

/// Undirected graph held as per-node neighbor sequences plus a presence index.
///
/// Built once by [`GraphBuilder`](crate::graph::GraphBuilder) and never
/// mutated afterwards, which is what lets workers read it without locks.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Number of input edges, duplicates and self-loops included
    edge_count: usize,

    /// Neighbor sequence per node, in edge insertion order
    neighbors: Vec<Vec<u32>>,

    presence: PresenceIndex,
}

impl GraphStore {
    pub(crate) fn from_parts(
        edge_count: usize,
        neighbors: Vec<Vec<u32>>,
        presence: PresenceIndex,
    ) -> Self {
        Self {
            edge_count,
            neighbors,
            presence,
        }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of neighbor entries recorded for a node, duplicates included
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    #[inline]
    pub fn adjacent(&self, u: u32, v: u32) -> bool {
        self.presence.contains(u, v)
    }

    /// Neighbor sequence of a node in insertion order
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[u32] {
        &self.neighbors[node]
    }

    pub fn neighbor_lists(&self) -> &[Vec<u32>] {
        &self.neighbors
    }

    pub fn presence(&self) -> &PresenceIndex {
        &self.presence
    }

    pub fn index_kind(&self) -> IndexKind {
        self.presence.kind()
    }

    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let lists = self
            .neighbors
            .iter()
            .map(|list| mem::size_of::<Vec<u32>>() + list.capacity() * mem::size_of::<u32>())
            .sum::<usize>();

        mem::size_of::<Self>() + lists + self.presence.memory_usage()
    }
}
