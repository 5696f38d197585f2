//! Plain-text edge list reader
//!
//! The format is a stream of whitespace-separated non-negative integers read
//! two at a time, normally one `u v` pair per line. Lines starting with `#` or
//! `%` are treated as comments, which covers the headers of SNAP and
//! MatrixMarket style datasets.

use crate::error::{ClusteringError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An undirected edge between two 0-based node indices
pub type Edge = (u32, u32);

/// Read an edge list from a file on disk
pub fn read_edge_file<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path)?;
    let edges = read_edges(BufReader::new(file))?;

    log::info!("Read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Read an edge list from any buffered reader
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    // First half of a pair whose second token has not been seen yet
    let mut pending: Option<(u32, usize)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let node = parse_node(token, line_no)?;
            match pending.take() {
                Some((u, _)) => edges.push((u, node)),
                None => pending = Some((node, line_no)),
            }
        }
    }

    if let Some((u, line_no)) = pending {
        return Err(ClusteringError::invalid_input(
            Some(line_no),
            format!("node {} has no partner; edge list has an odd number of tokens", u),
        ));
    }

    if edges.is_empty() {
        return Err(ClusteringError::invalid_input(None, "edge list is empty"));
    }

    Ok(edges)
}

/// Parse an edge list held in memory
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    read_edges(text.as_bytes())
}

fn parse_node(token: &str, line_no: usize) -> Result<u32> {
    token.parse::<u32>().map_err(|_| {
        ClusteringError::invalid_input(
            Some(line_no),
            format!("expected a non-negative node index, found {:?}", token),
        )
    })
}
