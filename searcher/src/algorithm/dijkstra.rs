//! Dijkstra's Algorithm

use num::Zero;

use super::Search;
use crate::errors::Result;
use crate::path::WeightedPath;
use crate::traits::{HeuristicFunction, Node, Weight, WeightFunction};

/// A heuristic which always estimates zero remaining distance.
///
/// Zero never overestimates, so searching with it always finds
/// a shortest path. It turns A* into Dijkstra's algorithm.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<N, W> HeuristicFunction<N, W> for ZeroHeuristic
where
    W: Weight,
{
    fn estimate(&self, _node: &N) -> W {
        W::zero()
    }
}

/// Search algorithm which implements Dijkstra's Algorithm for
/// graph searches.
pub type DijkstraSearch<'a, N, W, F> = Search<'a, N, W, F, ZeroHeuristic>;

/// Build a Dijkstra's Alogrithm Searcher
pub fn build<'a, N, W, F>(origin: &N, destination: &N, weights: &'a F) -> DijkstraSearch<'a, N, W, F>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
{
    Search::new(origin, destination, weights, &ZeroHeuristic)
}

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm always expands the node closest to the origin
/// next, so the first time the destination is reached it has been
/// reached by a shortest path.
pub fn run<N, W, F>(origin: &N, destination: &N, weights: &F) -> Result<WeightedPath<N, W>, N>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
{
    build(origin, destination, weights).run()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_estimate() {
        let h = ZeroHeuristic;
        assert_eq!(HeuristicFunction::<&str, i64>::estimate(&h, &"anything"), 0);
        assert_eq!(HeuristicFunction::<u8, f64>::estimate(&h, &3), 0.0);
    }
}
