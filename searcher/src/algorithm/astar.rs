//! A* search

use super::Search;
use crate::errors::Result;
use crate::path::WeightedPath;
use crate::traits::{HeuristicFunction, Node, Weight, WeightFunction};

/// Search algorithm which implements A*, guided by a heuristic.
pub type AStarSearch<'a, N, W, F, H> = Search<'a, N, W, F, H>;

/// Build an A* searcher
pub fn build<'a, N, W, F, H>(
    origin: &N,
    destination: &N,
    weights: &'a F,
    heuristic: &'a H,
) -> AStarSearch<'a, N, W, F, H>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    Search::new(origin, destination, weights, heuristic)
}

/// Perform a search using A*.
///
/// The heuristic estimates the distance remaining from a node to the
/// destination. When it never overestimates, the path returned is a
/// shortest path. An overestimating heuristic still finds a path when
/// one exists, but it may not be the shortest.
pub fn run<N, W, F, H>(
    origin: &N,
    destination: &N,
    weights: &F,
    heuristic: &H,
) -> Result<WeightedPath<N, W>, N>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    build(origin, destination, weights, heuristic).run()
}
