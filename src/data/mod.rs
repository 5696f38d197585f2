//! Input handling for edge list data

pub mod edge_list;

pub use edge_list::{parse_edges, read_edge_file, read_edges, Edge};
