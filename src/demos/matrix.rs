//! A graph whose edges are weighted by 2x2 integer matrices.
//!
//! Matrix weights add componentwise, and are ordered by the magnitude
//! of their determinant, so the "shortest" path is the one whose summed
//! matrix has the smallest absolute determinant.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

use anyhow::Error;
use lazy_static::lazy_static;
use num::Zero;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use searcher::{dijkstra, Node, WeightFunction};

use super::{read_input, DemoOptions};
use crate::{BoxedRead, DemoError};

const GRAPH: &str = include_str!("../../fixtures/matrix.txt");

/// A 2x2 integer matrix, used as an edge weight.
///
/// Equality and ordering only consider the magnitude of the
/// determinant; use [Matrix::components] to compare entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix {
    a1: i64,
    a2: i64,
    b1: i64,
    b2: i64,
}

impl Matrix {
    pub fn new(a1: i64, a2: i64, b1: i64, b2: i64) -> Self {
        Matrix { a1, a2, b1, b2 }
    }

    pub fn determinant(&self) -> i64 {
        self.a1 * self.b2 - self.a2 * self.b1
    }

    /// Absolute value of the determinant, which orders matrices.
    pub fn magnitude(&self) -> i64 {
        self.determinant().abs()
    }

    /// Entries in row order.
    pub fn components(&self) -> [i64; 4] {
        [self.a1, self.a2, self.b1, self.b2]
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, other: Matrix) -> Self::Output {
        Matrix {
            a1: self.a1 + other.a1,
            a2: self.a2 + other.a2,
            b1: self.b1 + other.b1,
            b2: self.b2 + other.b2,
        }
    }
}

impl Zero for Matrix {
    fn zero() -> Self {
        Matrix::default()
    }

    fn is_zero(&self) -> bool {
        self.components() == [0; 4]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude().eq(&other.magnitude())
    }
}

impl PartialOrd for Matrix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{{{}, {}}}, {{{}, {}}}}}",
            self.a1, self.a2, self.b1, self.b2
        )
    }
}

/// Error returned when a matrix graph can't be parsed.
#[derive(Debug, Error)]
pub enum MatrixGraphError {
    #[error("Line {line} is not an edge: {text:?}")]
    InvalidLine { line: usize, text: String },

    #[error("Invalid matrix entry")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// A directed graph of labelled nodes, with matrix weighted edges.
#[derive(Debug, Default, Clone)]
pub struct MatrixGraph {
    labels: Vec<String>,
    ids: HashMap<String, usize>,
    edges: Vec<Vec<(usize, Matrix)>>,
}

impl MatrixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Add a node, returning its id. Adding a label twice
    /// returns the existing node.
    pub fn add_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        self.edges.push(Vec::new());
        id
    }

    /// Connect `tail` to `head`, replacing the weight of
    /// any existing edge between them.
    pub fn add_edge(&mut self, tail: &str, head: &str, weight: Matrix) {
        let t = self.add_node(tail);
        let h = self.add_node(head);
        match self.edges[t].iter_mut().find(|(n, _)| *n == h) {
            Some(edge) => edge.1 = weight,
            None => self.edges[t].push((h, weight)),
        }
    }

    pub fn node(&self, label: &str) -> Option<MatrixNode> {
        self.ids.get(label).map(|&id| MatrixNode { id, graph: self })
    }

    /// Nodes in the order they were added.
    pub fn nodes(&self) -> impl Iterator<Item = MatrixNode> {
        (0..self.len()).map(move |id| MatrixNode { id, graph: self })
    }

    pub fn edge(&self, tail: &MatrixNode, head: &MatrixNode) -> Option<Matrix> {
        self.edges
            .get(tail.id)?
            .iter()
            .find(|(n, _)| *n == head.id)
            .map(|(_, w)| *w)
    }
}

impl FromStr for MatrixGraph {
    type Err = MatrixGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(
                r"^(?P<tail>\w+)\s*->\s*(?P<head>\w+)\s*:\s*(?P<a1>-?\d+)\s+(?P<a2>-?\d+)\s+(?P<b1>-?\d+)\s+(?P<b2>-?\d+)$"
            )
            .unwrap();
        };

        let mut graph = MatrixGraph::new();
        for (n, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cap = RE.captures(line).ok_or_else(|| MatrixGraphError::InvalidLine {
                line: n + 1,
                text: line.to_string(),
            })?;
            let weight = Matrix::new(
                cap["a1"].parse()?,
                cap["a2"].parse()?,
                cap["b1"].parse()?,
                cap["b2"].parse()?,
            );
            graph.add_edge(&cap["tail"], &cap["head"], weight);
        }
        Ok(graph)
    }
}

/// Edges which don't exist weigh nothing; the search only
/// weighs edges it found by enumerating neighbors.
impl<'g> WeightFunction<MatrixNode<'g>, Matrix> for MatrixGraph {
    fn weight(&self, tail: &MatrixNode<'g>, head: &MatrixNode<'g>) -> Matrix {
        self.edge(tail, head).unwrap_or_default()
    }
}

/// A node in a [MatrixGraph].
#[derive(Clone, Copy)]
pub struct MatrixNode<'g> {
    id: usize,
    graph: &'g MatrixGraph,
}

impl<'g> MatrixNode<'g> {
    pub fn label(&self) -> &'g str {
        &self.graph.labels[self.id]
    }
}

impl<'g> PartialEq for MatrixNode<'g> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'g> Eq for MatrixNode<'g> {}

impl<'g> Hash for MatrixNode<'g> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<'g> fmt::Debug for MatrixNode<'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MatrixNode({})", self.label())
    }
}

impl<'g> fmt::Display for MatrixNode<'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'g> Node for MatrixNode<'g> {
    fn neighbors(&self) -> Vec<Self> {
        self.graph.edges[self.id]
            .iter()
            .map(|&(id, _)| MatrixNode {
                id,
                graph: self.graph,
            })
            .collect()
    }
}

/// Pick the endpoints named on the command line, defaulting
/// to the first and last nodes of the graph.
fn endpoints<'g>(
    graph: &'g MatrixGraph,
    options: &DemoOptions,
) -> Result<(MatrixNode<'g>, MatrixNode<'g>), DemoError> {
    let lookup = |label: Option<&String>, fallback: Option<MatrixNode<'g>>| match label {
        Some(label) => graph
            .node(label)
            .ok_or_else(|| DemoError::UnknownNode(label.clone())),
        None => fallback.ok_or_else(|| DemoError::UnknownNode("(empty graph)".to_string())),
    };

    let origin = lookup(options.origin.as_ref(), graph.nodes().next())?;
    let destination = lookup(options.destination.as_ref(), graph.nodes().last())?;
    Ok((origin, destination))
}

pub(crate) fn main(input: Option<BoxedRead>, options: &DemoOptions) -> Result<(), Error> {
    let graph: MatrixGraph = read_input(input, GRAPH)?.parse()?;
    let (origin, destination) = endpoints(&graph, options)?;

    if options.heuristic {
        warn!("matrix graphs have no heuristic, searching with dijkstra's algorithm");
    }
    info!("searching {} nodes from {} to {}", graph.len(), origin, destination);

    match dijkstra::run(&origin, &destination, &graph) {
        Ok(path) => {
            println!("{}", path);
            println!("Final matrix length: {}", path.total_weight());
        }
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}
