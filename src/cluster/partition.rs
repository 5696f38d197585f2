//! Static partitioning of the node range across workers

use std::ops::Range;

/// Nodes per worker block, `ceil(node_count / workers)`. `workers` must be
/// non-zero.
pub(crate) fn block_size(node_count: usize, workers: usize) -> usize {
    (node_count + workers - 1) / workers
}

/// Contiguous node range owned by worker `rank`.
///
/// Trailing workers get an empty range when there are more workers than
/// nodes.
pub(crate) fn worker_range(rank: usize, workers: usize, node_count: usize) -> Range<usize> {
    let block = block_size(node_count, workers);
    let start = std::cmp::min(rank * block, node_count);
    let end = std::cmp::min(start + block, node_count);
    start..end
}

/// Ranges for all workers in rank order; empty when `workers` is zero
pub fn partition(node_count: usize, workers: usize) -> Vec<Range<usize>> {
    (0..workers)
        .map(|rank| worker_range(rank, workers, node_count))
        .collect()
}
