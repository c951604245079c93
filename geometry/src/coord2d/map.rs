//! Trait to define a map suitable for pathfinding
//! on a 2D coordinate grid, and a rectangular maze
//! which implements it.
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use thiserror::Error;

use super::pathfinder::{Cell, MapPath, PathResult, Pathfinder};
use super::Point;
use crate::Position;

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Build a re-usable pathfinder for this map
    fn pathfinder(&self) -> Pathfinder<Self> {
        Pathfinder::new(self)
    }

    /// Build a shortest path on this map, guided by
    /// the manhattan distance to the destination.
    fn path(&self, origin: Point, destination: Point) -> PathResult<Self> {
        self.pathfinder().find_path(origin, destination, true)
    }
}

/// Error returned when a maze can't be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze has no rows")]
    Empty,

    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected maze character {character:?} at {column},{row}")]
    UnexpectedCharacter {
        character: char,
        column: usize,
        row: usize,
    },
}

/// A rectangular grid of open cells and walls.
///
/// Mazes are read from text, one row per line, where
/// `0` or `.` is an open cell and `1` or `#` is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Maze {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Is this point within the bounds of the maze?
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width as Position).contains(&point.x)
            && (0..self.height as Position).contains(&point.y)
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    /// The node for an open cell, for use as a search endpoint.
    pub fn cell(&self, point: Point) -> Option<Cell<Self>> {
        if self.is_traversable(point) {
            Some(Cell::new(point, self))
        } else {
            None
        }
    }

    /// Draw the maze with the cells of a path marked.
    pub fn render(&self, path: &MapPath<Self>) -> String {
        let marked: Vec<Point> = path.iter().map(|c| c.point()).collect();
        self.draw(|point| marked.contains(&point))
    }

    fn draw<F>(&self, marked: F) -> String
    where
        F: Fn(Point) -> bool,
    {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let point: Point = (x, y).into();
            out.push(if !self.is_traversable(point) {
                '#'
            } else if marked(point) {
                '*'
            } else {
                '.'
            });
            if x + 1 == self.width {
                out.push('\n');
            }
        }
        out
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        match self.index(location) {
            Some(i) => !self.walls[i],
            None => false,
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut found = 0;
            for (column, c) in line.chars().enumerate() {
                match c {
                    '0' | '.' => walls.push(false),
                    '1' | '#' => walls.push(true),
                    _ => {
                        return Err(MazeError::UnexpectedCharacter {
                            character: c,
                            column,
                            row,
                        })
                    }
                };
                found += 1;
            }

            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MazeError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Maze {
                width,
                height,
                walls,
            }),
            _ => Err(MazeError::Empty),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.draw(|_| false))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let maze: Maze = include_str!("../../fixtures/maze.txt").parse().unwrap();
        assert_eq!(maze.width(), 6);
        assert_eq!(maze.height(), 7);
        assert!(maze.is_traversable((0, 0).into()));
        assert!(!maze.is_traversable((3, 0).into()));
        assert!(!maze.is_traversable((0, 3).into()));
        assert!(!maze.is_traversable((6, 0).into()));
        assert!(!maze.is_traversable(Point::new(-1, 0)));
        assert!(maze.cell((5, 6).into()).is_some());
        assert!(maze.cell((1, 1).into()).is_none());
    }

    #[test]
    fn symbols() {
        let digits: Maze = "01\n10".parse().unwrap();
        let glyphs: Maze = ".#\n#.\n".parse().unwrap();
        assert_eq!(digits, glyphs);
        assert_eq!(glyphs.to_string(), ".#\n#.\n");
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Maze>(), Err(MazeError::Empty));
        assert_eq!("\n\n".parse::<Maze>(), Err(MazeError::Empty));
        assert_eq!(
            "000\n00".parse::<Maze>(),
            Err(MazeError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "00\n0x".parse::<Maze>(),
            Err(MazeError::UnexpectedCharacter {
                character: 'x',
                column: 1,
                row: 1
            })
        );
    }
}
