//! Configuration management for the clustering coefficient calculator

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which adjacency presence index backs the `adjacent(u, v)` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// n x n boolean matrix, O(1) lookup, O(n^2) memory
    Dense,
    /// Sorted neighbor ranges, binary search lookup, O(n + m) memory
    Sorted,
    /// Dense up to `Config::dense_node_limit` nodes, sorted above it
    Auto,
}

impl IndexKind {
    /// Resolve `Auto` into a concrete index for a graph of `node_count` nodes
    pub fn resolve(self, node_count: usize, dense_node_limit: usize) -> IndexKind {
        match self {
            IndexKind::Auto if node_count <= dense_node_limit => IndexKind::Dense,
            IndexKind::Auto => IndexKind::Sorted,
            other => other,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexKind::Dense => "dense",
            IndexKind::Sorted => "sorted",
            IndexKind::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(IndexKind::Dense),
            "sorted" => Ok(IndexKind::Sorted),
            "auto" => Ok(IndexKind::Auto),
            other => Err(format!(
                "unknown index kind '{}', expected dense, sorted or auto",
                other
            )),
        }
    }
}

/// Run configuration for graph construction and the parallel engine
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads
    pub threads: usize,

    /// Adjacency presence index to build
    pub index: IndexKind,

    /// Largest node count for which `Auto` still builds the dense matrix
    pub dense_node_limit: usize,

    /// Drop repeated undirected edges before building neighbor sequences
    pub dedup_edges: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            index: IndexKind::Auto,
            dense_node_limit: 8192,
            dedup_edges: false,
        }
    }
}

impl Config {
    /// Create a configuration with a fixed worker count and default settings otherwise
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            ..Self::default()
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_switches_on_node_limit() {
        assert_eq!(IndexKind::Auto.resolve(100, 100), IndexKind::Dense);
        assert_eq!(IndexKind::Auto.resolve(101, 100), IndexKind::Sorted);
        assert_eq!(IndexKind::Dense.resolve(1_000_000, 100), IndexKind::Dense);
        assert_eq!(IndexKind::Sorted.resolve(1, 100), IndexKind::Sorted);
    }

    #[test]
    fn parses_index_kind() {
        assert_eq!("Dense".parse::<IndexKind>(), Ok(IndexKind::Dense));
        assert_eq!("sorted".parse::<IndexKind>(), Ok(IndexKind::Sorted));
        assert!("hash".parse::<IndexKind>().is_err());
    }
}
