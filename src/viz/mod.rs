//! Text dumps of the adjacency structures for debugging small graphs

use crate::error::Result;
use crate::graph::GraphStore;
use std::io::Write;

/// Graphs with more nodes than this are not printed as a matrix
pub const MATRIX_PRINT_LIMIT: usize = 256;

/// Write the presence structure as rows of `0`/`1`
pub fn write_matrix<W: Write>(graph: &GraphStore, out: &mut W) -> Result<()> {
    let n = graph.node_count();
    if n > MATRIX_PRINT_LIMIT {
        log::warn!(
            "Not printing adjacency matrix for {} nodes (limit {})",
            n,
            MATRIX_PRINT_LIMIT
        );
        writeln!(out, "Adjacency matrix omitted ({} nodes)", n)?;
        return Ok(());
    }

    for u in 0..n as u32 {
        let row: Vec<&str> = (0..n as u32)
            .map(|v| if graph.adjacent(u, v) { "1" } else { "0" })
            .collect();
        writeln!(out, "{}", row.join(" "))?;
    }

    Ok(())
}

/// Write every node's neighbor sequence in insertion order
pub fn write_lists<W: Write>(graph: &GraphStore, out: &mut W) -> Result<()> {
    writeln!(out, "Printing adjacency lists")?;
    for node in 0..graph.node_count() {
        let neighbors: Vec<String> = graph.neighbors(node).iter().map(u32::to_string).collect();
        writeln!(out, "Neighbors of node {} :: {}", node, neighbors.join(" "))?;
    }
    Ok(())
}

pub fn render_matrix(graph: &GraphStore) -> Result<String> {
    let mut buf = Vec::new();
    write_matrix(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_lists(graph: &GraphStore) -> Result<String> {
    let mut buf = Vec::new();
    write_lists(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn renders_path_graph() {
        let g = GraphBuilder::from_edges(vec![(0, 1), (1, 2)]).build().unwrap();

        assert_eq!(render_matrix(&g).unwrap(), "0 1 0\n1 0 1\n0 1 0\n");
        assert_eq!(
            render_lists(&g).unwrap(),
            "Printing adjacency lists\n\
             Neighbors of node 0 :: 1\n\
             Neighbors of node 1 :: 0 2\n\
             Neighbors of node 2 :: 1\n"
        );
    }

    #[test]
    fn large_matrix_is_omitted() {
        let g = GraphBuilder::from_edges(vec![(0, MATRIX_PRINT_LIMIT as u32)])
            .build()
            .unwrap();
        let text = render_matrix(&g).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Adjacency matrix omitted"));
    }
}
