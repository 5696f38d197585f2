//! Parallel average clustering coefficient
//!
//! The node range is split into one contiguous block per worker. Workers run
//! inside a `crossbeam` scope, read the graph store through a shared
//! reference and send their private partial sum back over a channel. The
//! driver owns the reduction: it orders partials by worker rank, sums them
//! and divides by the node count once every worker has joined.

use crate::cluster::coefficient::local_clustering;
use crate::cluster::partition::partition;
use crate::config::Config;
use crate::error::{ClusteringError, Result};
use crate::graph::GraphStore;
use crossbeam::channel;
use std::time::{Duration, Instant};

/// Outcome of one parallel run
#[derive(Debug, Clone)]
pub struct EngineRun {
    /// Average local clustering coefficient over all nodes
    pub average: f64,

    /// Partial sum reported by each worker, indexed by rank
    pub partials: Vec<f64>,

    /// Wall-clock time from spawning the workers to the final division
    pub elapsed: Duration,
}

/// Fixed-size pool of worker threads computing the average coefficient
#[derive(Debug, Clone, Copy)]
pub struct CoefficientEngine {
    threads: usize,
}

impl CoefficientEngine {
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(ClusteringError::InvalidThreadCount(threads));
        }
        Ok(Self { threads })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.threads)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Average local clustering coefficient of `graph`
    pub fn average(&self, graph: &GraphStore) -> Result<f64> {
        self.run(graph).map(|run| run.average)
    }

    /// Compute the average and keep the per-worker partials and timing
    pub fn run(&self, graph: &GraphStore) -> Result<EngineRun> {
        let node_count = graph.node_count();
        let ranges = partition(node_count, self.threads);

        log::info!(
            "Computing clustering coefficients for {} nodes on {} threads",
            node_count,
            self.threads
        );

        let start = Instant::now();
        let (sender, receiver) = channel::unbounded::<(usize, f64)>();

        let joined = crossbeam::scope(|scope| {
            for (rank, range) in ranges.into_iter().enumerate() {
                let sender = sender.clone();
                scope.spawn(move |_| {
                    log::debug!("Worker {} owns nodes {:?}", rank, range);

                    let mut local_sum = 0.0;
                    for node in range {
                        local_sum += local_clustering(graph, node);
                    }

                    sender.send((rank, local_sum)).ok();
                });
            }
        });
        drop(sender);

        if joined.is_err() {
            log::error!("Worker thread panicked; discarding partial results");
            return Err(ClusteringError::WorkerPanicked);
        }

        let mut partials = vec![0.0; self.threads];
        for (rank, local_sum) in receiver.iter() {
            log::debug!("Worker {} partial sum {}", rank, local_sum);
            partials[rank] = local_sum;
        }

        let average = finalize(&partials, node_count)?;
        let elapsed = start.elapsed();

        log::info!(
            "Average clustering coefficient {} computed in {:.6}s",
            average,
            elapsed.as_secs_f64()
        );

        Ok(EngineRun {
            average,
            partials,
            elapsed,
        })
    }
}

/// Sum the partials in rank order and divide by the node count
fn finalize(partials: &[f64], node_count: usize) -> Result<f64> {
    if node_count == 0 {
        return Err(ClusteringError::EmptyGraph);
    }
    let total: f64 = partials.iter().sum();
    Ok(total / node_count as f64)
}

/// Average local clustering coefficient of `graph` using `threads` workers
pub fn average_clustering(graph: &GraphStore, threads: usize) -> Result<f64> {
    CoefficientEngine::new(threads)?.average(graph)
}
