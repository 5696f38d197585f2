//! Error types for graph loading and coefficient computation

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClusteringError>;

#[derive(Debug, Error)]
pub enum ClusteringError {
    /// The edge list was empty or could not be parsed
    #[error("invalid input{}: {reason}", line_suffix(.line))]
    InvalidInput {
        line: Option<usize>,
        reason: String,
    },

    /// The graph has no nodes, so the average is undefined
    #[error("graph has no nodes; average clustering coefficient is undefined")]
    EmptyGraph,

    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("a worker thread panicked while computing coefficients")]
    WorkerPanicked,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

impl ClusteringError {
    pub fn invalid_input(line: Option<usize>, reason: impl Into<String>) -> Self {
        ClusteringError::InvalidInput {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_includes_line() {
        let err = ClusteringError::invalid_input(Some(3), "expected integer, found \"x\"");
        assert_eq!(
            err.to_string(),
            "invalid input at line 3: expected integer, found \"x\""
        );

        let err = ClusteringError::invalid_input(None, "edge list is empty");
        assert_eq!(err.to_string(), "invalid input: edge list is empty");
    }
}
