//! Memory-efficient presence index over sorted neighbor ranges

use std::mem;

/// Compressed sparse row layout of each node's distinct neighbors, sorted
/// ascending so that presence queries can binary search
#[derive(Debug, Clone)]
pub struct SortedAdjacency {
    /// Number of nodes in the graph
    node_count: usize,

    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    offsets: Vec<usize>,

    /// Concatenated sorted, deduplicated neighbor ranges
    targets: Vec<u32>,
}

impl SortedAdjacency {
    /// Build the index from per-node neighbor sequences
    pub fn from_neighbor_lists(lists: &[Vec<u32>]) -> Self {
        let entry_count: usize = lists.iter().map(Vec::len).sum();

        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut targets = Vec::with_capacity(entry_count);
        offsets.push(0);

        for list in lists {
            let start = targets.len();
            targets.extend_from_slice(list);
            let range = &mut targets[start..];
            range.sort_unstable();

            // Collapse duplicates in place and drop the tail
            let mut write = 0;
            for read in 0..range.len() {
                if write == 0 || range[read] != range[write - 1] {
                    range[write] = range[read];
                    write += 1;
                }
            }
            targets.truncate(start + write);
            offsets.push(targets.len());
        }

        targets.shrink_to_fit();

        Self {
            node_count: lists.len(),
            offsets,
            targets,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distinct neighbors of a node, sorted ascending
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node];
        let end = self.offsets[node + 1];
        &self.targets[start..end]
    }

    /// Check if there's an edge between u and v
    pub fn has_edge(&self, u: usize, v: u32) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<usize>();
        let targets = self.targets.capacity() * mem::size_of::<u32>();

        base + offsets + targets
    }
}
