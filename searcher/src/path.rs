//! The result of a successful search.

use std::fmt;
use std::ops::Index;

/// A sequence of nodes from an origin to a destination, inclusive,
/// along with the total weight of the edges between them.
#[derive(Debug, Clone)]
pub struct WeightedPath<N, W> {
    nodes: Vec<N>,
    total_weight: W,
}

impl<N, W> WeightedPath<N, W> {
    pub(crate) fn new(nodes: Vec<N>, total_weight: W) -> Self {
        assert_ne!(nodes.len(), 0);
        WeightedPath {
            nodes,
            total_weight,
        }
    }

    /// Number of nodes in the path, including both endpoints.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Paths always hold at least the origin.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Iterate over the nodes in this path.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Where this path started
    pub fn origin(&self) -> &N {
        &self.nodes[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Sum of the edge weights along the path.
    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N, W> Index<usize> for WeightedPath<N, W> {
    type Output = N;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<N, W> fmt::Display for WeightedPath<N, W>
where
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        let mut separator = "";
        for node in &self.nodes {
            write!(f, "{}{}", separator, node)?;
            separator = ", ";
        }
        write!(f, "]")
    }
}
