//! Pathfinding in two dimensions using A* or dijkstra's algorithm
use std::fmt;
use std::hash::{Hash, Hasher};

use searcher::{
    find_shortest_path, HeuristicFunction, Node, SearchError, WeightFunction, WeightedPath,
};
use tracing::debug;

pub use super::map::Map;
use super::Point;
use crate::Position;

/// A path across a map, weighted by the number of steps.
pub type MapPath<'m, M> = WeightedPath<Cell<'m, M>, Position>;

/// Result of searching for a path across a map.
pub type PathResult<'m, M> = searcher::Result<MapPath<'m, M>, Cell<'m, M>>;

/// A location on a map, used as a node when searching.
///
/// Cells are identified by their point alone.
pub struct Cell<'m, M> {
    point: Point,
    map: &'m M,
}

impl<'m, M> Cell<'m, M> {
    pub fn new(point: Point, map: &'m M) -> Self {
        Self { point, map }
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

impl<'m, M> Clone for Cell<'m, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'m, M> Copy for Cell<'m, M> {}

impl<'m, M> PartialEq for Cell<'m, M> {
    fn eq(&self, other: &Self) -> bool {
        self.point.eq(&other.point)
    }
}

impl<'m, M> Eq for Cell<'m, M> {}

impl<'m, M> Hash for Cell<'m, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state)
    }
}

impl<'m, M> fmt::Debug for Cell<'m, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cell({})", self.point)
    }
}

impl<'m, M> fmt::Display for Cell<'m, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.point)
    }
}

impl<'m, M> Node for Cell<'m, M>
where
    M: Map,
{
    fn neighbors(&self) -> Vec<Self> {
        self.point
            .adjacent()
            .filter(|p| self.map.is_traversable(*p))
            .map(|p| Cell::new(p, self.map))
            .collect()
    }
}

/// Every step between adjacent cells costs one.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepCost;

impl<'m, M> WeightFunction<Cell<'m, M>, Position> for StepCost {
    fn weight(&self, _tail: &Cell<'m, M>, _head: &Cell<'m, M>) -> Position {
        1
    }
}

/// Manhattan distance to a target, which never overestimates
/// the number of orthogonal steps remaining.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    pub target: Point,
}

impl<'m, M> HeuristicFunction<Cell<'m, M>, Position> for Manhattan {
    fn estimate(&self, node: &Cell<'m, M>) -> Position {
        self.target.manhattan_distance(node.point)
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self { map }
    }

    /// Find a path between the origin and destination given.
    ///
    /// With `heuristic`, the search is guided by the manhattan
    /// distance to the destination. When either endpoint can't be
    /// stood on, or the search is exhausted, the search fails.
    pub fn find_path(
        &self,
        origin: Point,
        destination: Point,
        heuristic: bool,
    ) -> PathResult<'m, M> {
        let start = Cell::new(origin, self.map);
        let finish = Cell::new(destination, self.map);

        if !(self.map.is_traversable(origin) && self.map.is_traversable(destination)) {
            debug!("{} or {} is not traversable", origin, destination);
            return Err(SearchError::PathNotFound {
                origin: start,
                destination: finish,
            });
        }

        let query = find_shortest_path(&start, &finish).with_weights(&StepCost);
        if heuristic {
            query
                .with_heuristic(&Manhattan { target: destination })
                .run()
        } else {
            query.run()
        }
    }
}
