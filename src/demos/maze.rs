use anyhow::Error;
use tracing::info;

use geometry::coord2d::map::{Map, Maze};
use geometry::coord2d::pathfinder::PathResult;
use geometry::coord2d::Point;

use super::{read_input, DemoOptions};
use crate::BoxedRead;

const MAZE: &str = include_str!("../../fixtures/maze.txt");

/// Where to search from and to: the command line endpoints when given,
/// otherwise the top left and bottom right corners.
fn endpoints(maze: &Maze, options: &DemoOptions) -> Result<(Point, Point), Error> {
    let origin: Point = match options.origin {
        Some(ref text) => text.parse()?,
        None => Point::origin(),
    };
    let destination: Point = match options.destination {
        Some(ref text) => text.parse()?,
        None => (maze.width() - 1, maze.height() - 1).into(),
    };
    Ok((origin, destination))
}

pub fn solve<'m>(maze: &'m Maze, options: &DemoOptions) -> Result<PathResult<'m, Maze>, Error> {
    let (origin, destination) = endpoints(maze, options)?;
    info!(
        "searching {}x{} maze from {} to {}",
        maze.width(),
        maze.height(),
        origin,
        destination
    );
    Ok(maze
        .pathfinder()
        .find_path(origin, destination, options.heuristic))
}

pub(crate) fn main(input: Option<BoxedRead>, options: &DemoOptions) -> Result<(), Error> {
    let maze: Maze = read_input(input, MAZE)?.parse()?;

    match solve(&maze, options)? {
        Ok(path) => {
            println!("{}", path);
            println!("Final maze distance: {}", path.total_weight());
            print!("{}", maze.render(&path));
        }
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}
