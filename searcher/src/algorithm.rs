//! Provides the building blocks for search algorithms

use std::fmt;

use num::Zero;
use tracing::{debug, trace};

use self::cache::SearchCache;
use self::frontier::Frontier;
use crate::errors::{Result, SearchError};
use crate::path::WeightedPath;
use crate::traits::{HeuristicFunction, Node, Weight, WeightFunction};

pub mod astar;
mod cache;
pub mod dijkstra;
mod frontier;

/// How many expansions happen between progress reports.
const PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Default, Clone, Copy)]
struct Counter {
    expanded: usize,
    pushed: usize,
    stale: usize,
}

/// Best-first search from an origin to a destination.
///
/// Nodes are expanded in order of distance from the origin plus
/// the heuristic estimate of the remaining distance. With an
/// admissible heuristic the returned path is a shortest path, and
/// with the zero heuristic this is Dijkstra's algorithm.
///
/// Edge weights must not be negative. Debug builds panic when a
/// negative weight is encountered, release builds may return a
/// path which is not the shortest.
pub struct Search<'a, N, W, F, H>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    origin: N,
    destination: N,
    weights: &'a F,
    heuristic: &'a H,
    cache: SearchCache<N, W>,
    frontier: Frontier<N, W>,
    counter: Counter,
}

impl<'a, N, W, F, H> fmt::Debug for Search<'a, N, W, F, H>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Search")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("frontier", &self.frontier.len())
            .field("counter", &self.counter)
            .finish()
    }
}

impl<'a, N, W, F, H> Search<'a, N, W, F, H>
where
    N: Node,
    W: Weight,
    F: WeightFunction<N, W>,
    H: HeuristicFunction<N, W>,
{
    pub fn new(origin: &N, destination: &N, weights: &'a F, heuristic: &'a H) -> Self {
        let mut frontier = Frontier::default();
        frontier.push(origin.clone(), W::zero());

        Search {
            origin: origin.clone(),
            destination: destination.clone(),
            weights,
            heuristic,
            cache: SearchCache::new(origin.clone()),
            frontier,
            counter: Counter::default(),
        }
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<WeightedPath<N, W>, N> {
        while let Some(entry) = self.frontier.pop() {
            let current = entry.node;
            trace!(node = ?current, priority = ?entry.priority, "pop");

            if current == self.destination {
                debug!(
                    expanded = self.counter.expanded,
                    pushed = self.counter.pushed,
                    stale = self.counter.stale,
                    "found {:?}",
                    self.destination
                );
                return Ok(self.traceback(&current));
            }

            // Superseded by a cheaper entry for the same node.
            if !self.cache.close(&current) {
                self.counter.stale += 1;
                continue;
            }

            self.counter.expanded += 1;
            if self.counter.expanded % PROGRESS_INTERVAL == 0 {
                debug!(
                    frontier = self.frontier.len(),
                    expanded = self.counter.expanded,
                    "searching"
                );
            }

            self.expand(&current);
        }

        debug!(
            expanded = self.counter.expanded,
            pushed = self.counter.pushed,
            "no path from {:?} to {:?}",
            self.origin,
            self.destination
        );
        Err(SearchError::PathNotFound {
            origin: self.origin,
            destination: self.destination,
        })
    }

    /// Relax every edge leaving `current`, pushing improved neighbors.
    fn expand(&mut self, current: &N) {
        let distance = match self.cache.distance(current) {
            Some(d) => d.clone(),
            None => return,
        };

        for neighbor in current.neighbors() {
            if self.cache.is_closed(&neighbor) {
                continue;
            }

            let weight = self.weights.weight(current, &neighbor);
            debug_assert!(
                !(weight < W::zero()),
                "negative edge weight {:?} from {:?} to {:?}",
                weight,
                current,
                neighbor
            );

            let tentative = distance.clone() + weight;
            if self.cache.relax(current, &neighbor, &tentative) {
                let priority = tentative + self.heuristic.estimate(&neighbor);
                trace!(node = ?neighbor, priority = ?priority, "push");
                self.frontier.push(neighbor, priority);
                self.counter.pushed += 1;
            }
        }
    }

    fn traceback(&self, target: &N) -> WeightedPath<N, W> {
        let nodes = self.cache.traceback(target);
        let total = nodes.windows(2).fold(W::zero(), |total, pair| {
            total + self.weights.weight(&pair[0], &pair[1])
        });
        WeightedPath::new(nodes, total)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::cell::Cell;

    use super::*;
    use crate::{astar, dijkstra};

    /// Adjacency lists of weighted, directed edges.
    #[derive(Debug, Default)]
    pub(crate) struct Graph {
        edges: Vec<Vec<(usize, u32)>>,
    }

    impl Graph {
        pub(crate) fn new(size: usize) -> Self {
            Graph {
                edges: vec![Vec::new(); size],
            }
        }

        pub(crate) fn edge(mut self, tail: usize, head: usize, weight: u32) -> Self {
            self.edges[tail].push((head, weight));
            self
        }

        pub(crate) fn node(&self, id: usize) -> Vertex {
            Vertex { id, graph: self }
        }

        pub(crate) fn weight(&self, tail: &Vertex, head: &Vertex) -> u32 {
            self.edges[tail.id]
                .iter()
                .filter(|(h, _)| *h == head.id)
                .map(|(_, w)| *w)
                .min()
                .unwrap()
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Vertex<'g> {
        pub(crate) id: usize,
        graph: &'g Graph,
    }

    impl<'g> PartialEq for Vertex<'g> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl<'g> Eq for Vertex<'g> {}

    impl<'g> std::hash::Hash for Vertex<'g> {
        fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
            self.id.hash(state)
        }
    }

    impl<'g> Node for Vertex<'g> {
        fn neighbors(&self) -> Vec<Self> {
            self.graph.edges[self.id]
                .iter()
                .map(|(h, _)| self.graph.node(*h))
                .collect()
        }
    }

    fn ids(path: &WeightedPath<Vertex, u32>) -> Vec<usize> {
        path.iter().map(|v| v.id).collect()
    }

    #[test]
    fn single_node() {
        let graph = Graph::new(3).edge(0, 1, 4).edge(1, 2, 4);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = dijkstra::run(&graph.node(1), &graph.node(1), &weights).unwrap();
        assert_eq!(ids(&path), vec![1]);
        assert_eq!(path.total_weight(), &0);
    }

    #[test]
    fn unreachable() {
        let graph = Graph::new(4).edge(0, 1, 1).edge(2, 3, 1).edge(3, 2, 1);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let err = dijkstra::run(&graph.node(0), &graph.node(3), &weights).unwrap_err();
        assert_eq!(err.origin().id, 0);
        assert_eq!(err.destination().id, 3);
    }

    #[test]
    fn directed() {
        let graph = Graph::new(2).edge(1, 0, 1);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        assert!(dijkstra::run(&graph.node(1), &graph.node(0), &weights).is_ok());
        assert!(dijkstra::run(&graph.node(0), &graph.node(1), &weights).is_err());
    }

    #[test]
    fn prefers_cheaper_detour() {
        // 0 -> 2 directly costs 10, but 0 -> 1 -> 2 costs 2, so the
        // first frontier entry for node 2 goes stale.
        let graph = Graph::new(4)
            .edge(0, 2, 10)
            .edge(0, 1, 1)
            .edge(1, 2, 1)
            .edge(2, 3, 1);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = dijkstra::run(&graph.node(0), &graph.node(3), &weights).unwrap();
        assert_eq!(ids(&path), vec![0, 1, 2, 3]);
        assert_eq!(path.total_weight(), &3);
    }

    #[test]
    fn cycles() {
        let graph = Graph::new(4)
            .edge(0, 1, 2)
            .edge(1, 0, 2)
            .edge(1, 2, 2)
            .edge(2, 1, 2)
            .edge(2, 0, 1)
            .edge(2, 3, 5);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = dijkstra::run(&graph.node(0), &graph.node(3), &weights).unwrap();
        assert_eq!(ids(&path), vec![0, 1, 2, 3]);
        assert_eq!(path.total_weight(), &9);
    }

    #[test]
    fn zero_weight_edges() {
        let graph = Graph::new(3).edge(0, 1, 0).edge(1, 2, 0).edge(0, 2, 1);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = dijkstra::run(&graph.node(0), &graph.node(2), &weights).unwrap();
        assert_eq!(path.total_weight(), &0);
    }

    #[test]
    fn heuristic_guides_search() {
        // A line 0 - 1 - 2 - 3 - 4 with a long dead-end branch from 0.
        let mut graph = Graph::new(10);
        for i in 0..4 {
            graph = graph.edge(i, i + 1, 1);
        }
        graph = graph.edge(0, 5, 1);
        for i in 5..9 {
            graph = graph.edge(i, i + 1, 1);
        }

        let calls = Cell::new(0);
        let weights = |t: &Vertex, h: &Vertex| {
            calls.set(calls.get() + 1);
            graph.weight(t, h)
        };
        let remaining = |v: &Vertex| if v.id <= 4 { 4 - v.id as u32 } else { 4 };

        let plain = dijkstra::run(&graph.node(0), &graph.node(4), &weights).unwrap();
        let dijkstra_calls = calls.replace(0);

        let guided = astar::run(&graph.node(0), &graph.node(4), &weights, &remaining).unwrap();
        let astar_calls = calls.get();

        assert_eq!(plain.total_weight(), guided.total_weight());
        assert_eq!(ids(&guided), vec![0, 1, 2, 3, 4]);
        assert!(astar_calls < dijkstra_calls);
    }

    #[test]
    fn total_weight_matches_edges() {
        let graph = Graph::new(5)
            .edge(0, 1, 3)
            .edge(0, 2, 1)
            .edge(2, 1, 1)
            .edge(1, 3, 4)
            .edge(2, 3, 7)
            .edge(3, 4, 2);
        let weights = |t: &Vertex, h: &Vertex| graph.weight(t, h);

        let path = dijkstra::run(&graph.node(0), &graph.node(4), &weights).unwrap();
        let sum: u32 = path
            .nodes()
            .windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]))
            .sum();
        assert_eq!(path.total_weight(), &sum);
        assert_eq!(sum, 8);
    }

    #[test]
    #[should_panic(expected = "negative edge weight")]
    #[cfg(debug_assertions)]
    fn negative_weights() {
        let graph = Graph::new(2).edge(0, 1, 1);
        let weights = |_: &Vertex, _: &Vertex| -1i32;
        let _ = dijkstra::run(&graph.node(0), &graph.node(1), &weights);
    }
}
