//! Generalized best-first search, for finding shortest paths in graphs.
//!
//! To use these search algorithms, implement [Node] for the vertices of
//! your graph, and provide a [WeightFunction] which weighs the edges
//! between them. Closures work as weight functions:
//!
//! ```ignore
//! let path = searcher::dijkstra::run(&origin, &destination, &|tail: &Cell, head: &Cell| 1)?;
//! ```
//!
//! A [HeuristicFunction] estimating the distance remaining to the
//! destination turns the search into A* ([astar::run]).

pub mod algorithm;
mod errors;
mod path;
mod query;
mod traits;

pub use errors::Result;
pub use errors::SearchError;
pub use path::WeightedPath;
pub use query::{find_shortest_path, Endpoints, Query};
pub use traits::HeuristicFunction;
pub use traits::Node;
pub use traits::Weight;
pub use traits::WeightFunction;

pub use algorithm::astar;
pub use algorithm::dijkstra;
pub use algorithm::dijkstra::ZeroHeuristic;
pub use algorithm::Search;
