//! Bookkeeping for a single search: best known distances,
//! the parent of each discovered node, and the closed set.

use std::collections::{HashMap, HashSet};

use num::Zero;

use crate::traits::{Node, Weight};

#[derive(Debug)]
pub(crate) struct SearchCache<N, W>
where
    N: Node,
{
    distances: HashMap<N, W>,
    parents: HashMap<N, Option<N>>,
    closed: HashSet<N>,
}

impl<N, W> SearchCache<N, W>
where
    N: Node,
    W: Weight,
{
    /// Start a cache from the search origin, which is at distance zero
    /// and has no parent.
    pub(crate) fn new(origin: N) -> Self {
        let mut cache = SearchCache {
            distances: HashMap::new(),
            parents: HashMap::new(),
            closed: HashSet::new(),
        };
        cache.distances.insert(origin.clone(), W::zero());
        cache.parents.insert(origin, None);
        cache
    }

    pub(crate) fn distance(&self, node: &N) -> Option<&W> {
        self.distances.get(node)
    }

    pub(crate) fn is_closed(&self, node: &N) -> bool {
        self.closed.contains(node)
    }

    /// Finalize a node. Returns false if the node was already closed.
    pub(crate) fn close(&mut self, node: &N) -> bool {
        if self.closed.contains(node) {
            return false;
        }
        self.closed.insert(node.clone())
    }

    /// Record `tentative` as the distance to `head` via `tail`,
    /// if it improves on the distance already recorded.
    ///
    /// Returns true when the distance was updated.
    pub(crate) fn relax(&mut self, tail: &N, head: &N, tentative: &W) -> bool {
        // (a) Unseen nodes take any distance.
        // (b) Seen nodes only take a strictly shorter distance.
        let improves = match self.distances.get(head) {
            None => true,
            Some(recorded) => recorded > tentative,
        };

        if improves {
            self.distances.insert(head.clone(), tentative.clone());
            self.parents.insert(head.clone(), Some(tail.clone()));
        }
        improves
    }

    /// Follow parents from `target` back to the origin,
    /// returning the nodes in origin to target order.
    pub(crate) fn traceback(&self, target: &N) -> Vec<N> {
        let mut path = vec![target.clone()];
        let mut current = target;

        while let Some(Some(parent)) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        path
    }
}
