//! Demonstrations of the search algorithms on two kinds of graph:
//! a maze of grid cells, and a small directed graph weighted by matrices.

use std::io::Read;

use crate::{BoxedRead, DemoError};

pub mod matrix;
pub mod maze;

/// Options shared by all demos, from the command line.
#[derive(Debug, Default, Clone)]
pub struct DemoOptions {
    /// Use the demo's heuristic, i.e. run A* rather than Dijkstra.
    pub heuristic: bool,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Read the whole input, or use the built-in input when there is none.
pub(crate) fn read_input(input: Option<BoxedRead>, default: &str) -> Result<String, DemoError> {
    match input {
        Some(mut reader) => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            Ok(text)
        }
        None => Ok(default.to_string()),
    }
}
