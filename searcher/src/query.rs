//! Builder for configuring a shortest path search.
//!
//! ```ignore
//! let path = find_shortest_path(&origin, &destination)
//!     .with_weights(&weights)
//!     .with_heuristic(&heuristic)
//!     .run()?;
//! ```

use std::marker::PhantomData;

use crate::algorithm::dijkstra::ZeroHeuristic;
use crate::algorithm::Search;
use crate::errors::Result;
use crate::path::WeightedPath;
use crate::traits::{HeuristicFunction, Node, Weight, WeightFunction};

/// Start configuring a search between two nodes.
pub fn find_shortest_path<'a, N>(origin: &'a N, destination: &'a N) -> Endpoints<'a, N>
where
    N: Node,
{
    Endpoints {
        origin,
        destination,
    }
}

/// A search which knows its endpoints, but not yet its edge weights.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints<'a, N> {
    origin: &'a N,
    destination: &'a N,
}

impl<'a, N> Endpoints<'a, N>
where
    N: Node,
{
    /// Weigh edges with this weight function.
    ///
    /// Without a heuristic, the search runs Dijkstra's algorithm.
    pub fn with_weights<W, F>(self, weights: &'a F) -> Query<'a, N, W, F, ZeroHeuristic>
    where
        W: Weight,
        F: WeightFunction<N, W>,
    {
        Query {
            origin: self.origin,
            destination: self.destination,
            weights,
            heuristic: &ZeroHeuristic,
            weight: PhantomData,
        }
    }
}

/// A fully configured search, ready to run.
#[derive(Debug)]
pub struct Query<'a, N, W, F, H> {
    origin: &'a N,
    destination: &'a N,
    weights: &'a F,
    heuristic: &'a H,
    weight: PhantomData<W>,
}

impl<'a, N, W, F, H> Query<'a, N, W, F, H>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    /// Guide the search with a heuristic, turning it into A*.
    pub fn with_heuristic<G>(self, heuristic: &'a G) -> Query<'a, N, W, F, G>
    where
        G: HeuristicFunction<N, W>,
    {
        Query {
            origin: self.origin,
            destination: self.destination,
            weights: self.weights,
            heuristic,
            weight: PhantomData,
        }
    }

    /// Build the searcher without running it.
    pub fn build(self) -> Search<'a, N, W, F, H> {
        Search::new(self.origin, self.destination, self.weights, self.heuristic)
    }

    pub fn run(self) -> Result<WeightedPath<N, W>, N> {
        self.build().run()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::test::{Graph, Vertex};

    #[test]
    fn without_heuristic() {
        let graph = Graph::new(3).edge(0, 1, 2).edge(1, 2, 2).edge(0, 2, 5);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = find_shortest_path(&graph.node(0), &graph.node(2))
            .with_weights(&weights)
            .run()
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.total_weight(), &4);
    }

    #[test]
    fn with_heuristic() {
        let graph = Graph::new(3).edge(0, 1, 2).edge(1, 2, 2).edge(0, 2, 5);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);
        let remaining = |v: &Vertex| if v.id == 2 { 0 } else { 2 };

        let path = find_shortest_path(&graph.node(0), &graph.node(2))
            .with_weights(&weights)
            .with_heuristic(&remaining)
            .run()
            .unwrap();
        assert_eq!(path.total_weight(), &4);
    }

    #[test]
    fn not_found() {
        let graph = Graph::new(2);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let origin = graph.node(0);
        let destination = graph.node(1);
        let err = find_shortest_path(&origin, &destination)
            .with_weights(&weights)
            .run()
            .unwrap_err();
        assert_eq!(err.origin(), &origin);
        assert_eq!(err.destination(), &destination);
    }
}
