//! Priority queue of discovered nodes, ordered for best-first search.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use crate::traits::Weight;

/// A node waiting in the frontier, along with the priority
/// (distance so far plus the heuristic estimate) it was pushed with.
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry<N, W> {
    pub(crate) node: N,
    pub(crate) priority: W,
}

impl<N, W> PartialEq for FrontierEntry<N, W>
where
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W> Eq for FrontierEntry<N, W> where W: Weight {}

impl<N, W> Ord for FrontierEntry<N, W>
where
    W: Weight,
{
    // Reversed, so that the binary heap pops the lowest priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .reverse()
    }
}

impl<N, W> PartialOrd for FrontierEntry<N, W>
where
    W: Weight,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of frontier entries.
///
/// Entries are never removed when a node is re-discovered with a
/// better distance; the stale entry stays in the queue and is skipped
/// when it is eventually popped. The order among entries with equal
/// priority is unspecified.
#[derive(Debug)]
pub(crate) struct Frontier<N, W> {
    queue: BinaryHeap<FrontierEntry<N, W>>,
}

impl<N, W> Default for Frontier<N, W>
where
    W: Weight,
{
    fn default() -> Self {
        Frontier {
            queue: BinaryHeap::new(),
        }
    }
}

impl<N, W> Frontier<N, W>
where
    W: Weight,
{
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry<N, W>> {
        self.queue.pop()
    }

    pub(crate) fn push(&mut self, node: N, priority: W) {
        self.queue.push(FrontierEntry { node, priority });
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}
