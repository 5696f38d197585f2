//! Parallel average clustering coefficient for undirected graphs

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod report;
pub mod viz;

pub use cluster::{average_clustering, local_clustering, CoefficientEngine, EngineRun};
pub use config::{Config, IndexKind};
pub use error::{ClusteringError, Result};
pub use graph::{GraphBuilder, GraphStore};

use std::path::Path;

/// Load an edge list file and build the graph store it describes
pub fn load_graph<P: AsRef<Path>>(path: P, config: &Config) -> Result<GraphStore> {
    let edges = data::read_edge_file(path)?;
    GraphBuilder::from_edges(edges).configure(config).build()
}
