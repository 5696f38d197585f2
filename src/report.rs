//! Run summary output

use crate::cluster::EngineRun;
use crate::config::IndexKind;
use crate::error::Result;
use crate::graph::GraphStore;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Announce the size of a freshly loaded graph
pub fn write_graph_header<W: Write>(graph: &GraphStore, out: &mut W) -> Result<()> {
    writeln!(out, "Graph has {} nodes", graph.node_count())?;
    Ok(())
}

/// Distribution of local coefficients across nodes
#[derive(Debug, Clone, Serialize)]
pub struct NodeStats {
    pub min_coefficient: f64,
    pub max_coefficient: f64,
    /// Nodes whose neighbors form a clique
    pub fully_clustered_nodes: usize,
    /// Nodes with fewer than two neighbor entries
    pub low_degree_nodes: usize,
}

impl NodeStats {
    pub fn from_coefficients(graph: &GraphStore, coefficients: &[f64]) -> Self {
        let min_coefficient = coefficients.iter().copied().fold(f64::INFINITY, f64::min);
        let max_coefficient = coefficients.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            min_coefficient: if coefficients.is_empty() { 0.0 } else { min_coefficient },
            max_coefficient: if coefficients.is_empty() { 0.0 } else { max_coefficient },
            fully_clustered_nodes: coefficients.iter().filter(|&&c| c == 1.0).count(),
            low_degree_nodes: (0..graph.node_count())
                .filter(|&node| graph.degree(node) < 2)
                .count(),
        }
    }
}

/// Everything worth recording about one computation
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: Option<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub threads: usize,
    pub index: IndexKind,
    pub max_degree: usize,
    pub avg_degree: f64,
    pub average_coefficient: f64,
    pub elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_stats: Option<NodeStats>,
}

impl RunReport {
    pub fn new(graph: &GraphStore, run: &EngineRun) -> Self {
        let node_count = graph.node_count();
        // Each edge contributes two neighbor entries
        let avg_degree = if node_count == 0 {
            0.0
        } else {
            (2 * graph.edge_count()) as f64 / node_count as f64
        };

        Self {
            input: None,
            node_count,
            edge_count: graph.edge_count(),
            threads: run.partials.len(),
            index: graph.index_kind(),
            max_degree: graph.max_degree(),
            avg_degree,
            average_coefficient: run.average,
            elapsed_secs: run.elapsed.as_secs_f64(),
            node_stats: None,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_node_stats(mut self, stats: NodeStats) -> Self {
        self.node_stats = Some(stats);
        self
    }

    /// Human-readable summary
    pub fn write_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "CC of graph: {}", self.average_coefficient)?;
        writeln!(out, "Total time elapsed: {} seconds.", self.elapsed_secs)?;

        if let Some(stats) = &self.node_stats {
            writeln!(
                out,
                "Local CC range: [{}, {}], {} fully clustered, {} with degree < 2",
                stats.min_coefficient,
                stats.max_coefficient,
                stats.fully_clustered_nodes,
                stats.low_degree_nodes
            )?;
        }
        Ok(())
    }

    /// Save the report as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::info!("Saving run report to {}", path.display());

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(io::Error::from)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}
