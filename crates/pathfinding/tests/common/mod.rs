#![allow(dead_code)]

use std::collections::HashMap;

use pathfinding::{Cost, PathCost, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Adjacency-list graph over integer node ids.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    pub node_count: u32,
    edges: HashMap<u32, Vec<(u32, Cost)>>,
}

impl AdjacencyGraph {
    pub fn new(node_count: u32) -> Self {
        Self {
            node_count,
            edges: HashMap::new(),
        }
    }

    pub fn add_edge(&mut self, from: u32, to: u32, cost: Cost) {
        self.edges.entry(from).or_default().push((to, cost));
    }

    /// Random directed graph without parallel edges or self-loops.
    ///
    /// Edge costs include zero so that equal-cost ties are common.
    pub fn random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let node_count = rng.gen_range(2..10);
        let mut graph = Self::new(node_count);
        for from in 0..node_count {
            for to in 0..node_count {
                if from != to && rng.gen_bool(0.3) {
                    graph.add_edge(from, to, rng.gen_range(0..10));
                }
            }
        }
        graph
    }

    pub fn path_cost(&self, path: &[u32]) -> PathCost {
        path.windows(2).map(|w| PathCost::from(self.cost(&w[0], &w[1]))).sum()
    }

    pub fn is_walk(&self, path: &[u32]) -> bool {
        path.windows(2).all(|w| self.neighbors(&w[0]).contains(&w[1]))
    }

    /// Shortest distances from `start` by Bellman-Ford relaxation.
    pub fn reference_distances(&self, start: u32) -> Vec<Option<PathCost>> {
        let mut dist = vec![None; self.node_count as usize];
        dist[start as usize] = Some(0);
        for _ in 0..self.node_count {
            for (&from, targets) in &self.edges {
                let Some(base) = dist[from as usize] else {
                    continue;
                };
                for &(to, cost) in targets {
                    let candidate = base + PathCost::from(cost);
                    if dist[to as usize].is_none_or(|d| candidate < d) {
                        dist[to as usize] = Some(candidate);
                    }
                }
            }
        }
        dist
    }
}

impl WeightedGraph<u32> for AdjacencyGraph {
    fn neighbors(&self, node: &u32) -> Vec<u32> {
        self.edges
            .get(node)
            .map(|targets| targets.iter().map(|&(to, _)| to).collect())
            .unwrap_or_default()
    }

    fn cost(&self, from: &u32, to: &u32) -> Cost {
        self.edges[from]
            .iter()
            .find(|&&(t, _)| t == *to)
            .map(|&(_, cost)| cost)
            .expect("cost queried for a non-edge")
    }
}
