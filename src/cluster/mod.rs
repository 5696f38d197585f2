//! Clustering coefficient computation module

pub mod coefficient;
pub mod engine;
pub mod partition;

pub use coefficient::{local_clustering, local_coefficients};
pub use engine::{average_clustering, CoefficientEngine, EngineRun};
