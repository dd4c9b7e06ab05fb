//! Random graphs for stress and runtime tests.
use std::ops::Range;

use rand::Rng;

use crate::errors::{Result, WarshallError};
use crate::graph::DiGraph;

/// Configuration of random graphs.
///
/// The defaults keep negative cycles unlikely on sparse graphs, as in a road
/// network where a few edges carry a small bonus: 2% of edges are negative
/// and go down to -10 while positive weights go up to 100.
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    num_nodes: usize,
    num_edges: usize,
    negative_ratio: f64,
    negative_weights: Range<i32>,
    positive_weights: Range<i32>,
}

impl RandomGraphConfig {
    /// Creates a new configuration with default weights.
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            num_edges,
            negative_ratio: 0.02,
            negative_weights: -10..0,
            positive_weights: 0..100,
        }
    }

    /// Sets the probability of an edge to draw from the negative range.
    pub fn negative_ratio(mut self, negative_ratio: f64) -> Self {
        self.negative_ratio = negative_ratio;
        self
    }

    /// Sets the range of negative weights.
    pub fn negative_weights(mut self, weights: Range<i32>) -> Self {
        self.negative_weights = weights;
        self
    }

    /// Sets the range of non-negative weights.
    pub fn positive_weights(mut self, weights: Range<i32>) -> Self {
        self.positive_weights = weights;
        self
    }

    /// Returns the number of nodes.
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of edges.
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn validate(&self) -> Result<()> {
        let max_edges = self.num_nodes.saturating_mul(self.num_nodes.saturating_sub(1));
        if self.num_edges > max_edges {
            return Err(WarshallError::invalid_argument(
                "num_edges",
                format!(
                    "{} nodes admit at most {max_edges} edges without self loops",
                    self.num_nodes
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.negative_ratio) {
            return Err(WarshallError::invalid_argument(
                "negative_ratio",
                "The ratio must be in 0.0..=1.0",
            ));
        }
        if self.negative_ratio > 0.0 && self.negative_weights.is_empty() {
            return Err(WarshallError::invalid_argument(
                "negative_weights",
                "The range must not be empty.",
            ));
        }
        if self.negative_ratio < 1.0 && self.positive_weights.is_empty() {
            return Err(WarshallError::invalid_argument(
                "positive_weights",
                "The range must not be empty.",
            ));
        }
        Ok(())
    }
}

/// Generates a random graph with nodes named `Node0`, `Node1`, and so on.
///
/// The graph has exactly the configured numbers of nodes and edges, no self
/// loops and no parallel edges.
///
/// # Errors
///
/// [`WarshallError`] is returned when
///
///  - more edges are requested than `n * (n - 1)`,
///  - the negative ratio is not in `0.0..=1.0`, or
///  - a weight range in use is empty.
pub fn generate<R>(config: &RandomGraphConfig, rng: &mut R) -> Result<DiGraph<String>>
where
    R: Rng,
{
    config.validate()?;

    let n = config.num_nodes;
    let mut graph = DiGraph::new();
    for i in 0..n {
        graph.add_node(node_name(i))?;
    }

    let mut added = 0;
    while added < config.num_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to {
            continue;
        }
        let (from, to) = (node_name(from), node_name(to));
        if graph.has_edge(&from, &to) {
            continue;
        }
        let weight = if rng.gen_bool(config.negative_ratio) {
            rng.gen_range(config.negative_weights.clone())
        } else {
            rng.gen_range(config.positive_weights.clone())
        };
        graph.add_edge(from, to, weight)?;
        added += 1;
    }
    Ok(graph)
}

fn node_name(i: usize) -> String {
    format!("Node{i}")
}
