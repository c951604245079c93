use std::fmt::Debug;
use std::hash::Hash;

use num::Zero;

/// A vertex in a graph which can be searched.
///
/// Equality and hashing define node identity: two values which
/// compare equal are the same vertex. Nodes are usually small
/// handles (a coordinate, an index into an arena) which are cheap
/// to clone, since the search keeps copies of them in its bookkeeping.
pub trait Node: Clone + Eq + Hash + Debug {
    /// Nodes reachable by a single edge from this node.
    ///
    /// The order is up to the implementor, and only affects which
    /// of several equally short paths is returned.
    fn neighbors(&self) -> Vec<Self>;
}

/// Edge weights and distance estimates.
///
/// Weights must have an additive identity, be summable, and be
/// ordered. Values which can't be compared (e.g. a NaN float) are
/// treated as equal priorities.
pub trait Weight: Zero + Clone + PartialOrd + Debug {}

impl<W> Weight for W where W: Zero + Clone + PartialOrd + Debug {}

/// Provides the weight of the edge between two adjacent nodes.
pub trait WeightFunction<N, W> {
    /// Weight of the edge from `tail` to `head`.
    ///
    /// Must be deterministic, and should never be negative.
    fn weight(&self, tail: &N, head: &N) -> W;
}

impl<N, W, F> WeightFunction<N, W> for F
where
    F: Fn(&N, &N) -> W,
{
    fn weight(&self, tail: &N, head: &N) -> W {
        self(tail, head)
    }
}

/// An estimate of the remaining distance from a node to the target.
///
/// For the search to find the shortest path, the estimate must be
/// admissible, i.e. it must never overestimate the true distance.
pub trait HeuristicFunction<N, W> {
    fn estimate(&self, node: &N) -> W;
}

impl<N, W, F> HeuristicFunction<N, W> for F
where
    F: Fn(&N) -> W,
{
    fn estimate(&self, node: &N) -> W {
        self(node)
    }
}
