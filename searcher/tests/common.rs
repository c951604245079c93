//! Random directed graphs and a Floyd–Warshall reference.

#![allow(dead_code)]

use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use searcher::Node;

/// Dense adjacency matrix of non-negative edge weights.
#[derive(Debug)]
pub struct Network {
    weights: Vec<Vec<Option<u64>>>,
}

impl Network {
    /// Build a graph where each ordered pair of distinct nodes is
    /// connected with the given probability.
    pub fn random(seed: u64, size: usize, density: f64, max_weight: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut weights = vec![vec![None; size]; size];
        for (tail, row) in weights.iter_mut().enumerate() {
            for (head, slot) in row.iter_mut().enumerate() {
                if tail != head && rng.gen_bool(density) {
                    *slot = Some(rng.gen_range(0..=max_weight));
                }
            }
        }
        Network { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn node(&self, id: usize) -> Station {
        Station { id, network: self }
    }

    pub fn weight(&self, tail: &Station, head: &Station) -> u64 {
        self.weights[tail.id][head.id].expect("not an edge")
    }

    pub fn is_edge(&self, tail: &Station, head: &Station) -> bool {
        self.weights[tail.id][head.id].is_some()
    }

    /// All pairs shortest distances.
    pub fn floyd_warshall(&self) -> Vec<Vec<Option<u64>>> {
        let n = self.len();
        let mut dist = self.weights.clone();
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |d| a + b < d) {
                            dist[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }
        dist
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Station<'n> {
    pub id: usize,
    network: &'n Network,
}

impl<'n> PartialEq for Station<'n> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<'n> Eq for Station<'n> {}

impl<'n> Hash for Station<'n> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<'n> Node for Station<'n> {
    fn neighbors(&self) -> Vec<Self> {
        self.network.weights[self.id]
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_some())
            .map(|(head, _)| self.network.node(head))
            .collect()
    }
}
