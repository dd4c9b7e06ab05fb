//! Directed weighted graphs consumed by the engine.
pub(crate) mod mapper;
mod parser;

use std::hash::Hash;

use hashbrown::HashMap;

use crate::common::INFINITE_COST;
use crate::errors::{Result, WarshallError};

pub use mapper::NodeMapper;

/// A finite directed graph with signed integer edge weights.
///
/// Nodes are identified by indices in `0..num_nodes()`.
pub trait Graph {
    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the weight of the edge `from -> to`, or `None` if it does not exist.
    fn edge_weight(&self, from: usize, to: usize) -> Option<i32>;

    /// Calls `f(from, to, weight)` for every edge.
    ///
    /// The default implementation scans all ordered pairs through
    /// [`Graph::edge_weight()`]. Graphs that store adjacency lists should
    /// override it to enumerate edges directly.
    fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, i32),
    {
        let n = self.num_nodes();
        for from in 0..n {
            for to in 0..n {
                if let Some(weight) = self.edge_weight(from, to) {
                    f(from, to, weight);
                }
            }
        }
    }
}

/// Directed graph over arbitrary node identities.
///
/// Self loops are not allowed, and at most one edge exists per ordered pair.
#[derive(Clone, Debug)]
pub struct DiGraph<N> {
    mapper: NodeMapper<N>,
    // Outgoing edges of each node, keyed by the target index.
    adjacency: Vec<HashMap<u32, i32>>,
    num_edges: usize,
}

impl<N> Default for DiGraph<N> {
    fn default() -> Self {
        Self {
            mapper: NodeMapper::default(),
            adjacency: vec![],
            num_edges: 0,
        }
    }
}

impl<N> DiGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its index.
    ///
    /// Adding a known node returns its existing index.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when the index space is exhausted.
    pub fn add_node(&mut self, id: N) -> Result<u32> {
        let idx = self.mapper.insert(id)?;
        if self.adjacency.len() <= idx as usize {
            self.adjacency.push(HashMap::new());
        }
        Ok(idx)
    }

    /// Sets the weight of the edge `from -> to`, adding missing nodes.
    ///
    /// Returns the previous weight if the edge already existed.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when
    ///
    ///  - `from` and `to` are the same node, or
    ///  - `weight` is [`INFINITE_COST`].
    pub fn add_edge(&mut self, from: N, to: N, weight: i32) -> Result<Option<i32>> {
        if from == to {
            return Err(WarshallError::invalid_argument(
                "to",
                "Self loops are not allowed.",
            ));
        }
        if weight == INFINITE_COST {
            return Err(WarshallError::invalid_argument(
                "weight",
                format!("The weight must be less than {INFINITE_COST}"),
            ));
        }
        let from = self.add_node(from)?;
        let to = self.add_node(to)?;
        let prev = self.adjacency[from as usize].insert(to, weight);
        if prev.is_none() {
            self.num_edges += 1;
        }
        Ok(prev)
    }

    /// Gets the index of the node `id`.
    #[inline(always)]
    pub fn node_index(&self, id: &N) -> Option<usize> {
        self.mapper.index(id).map(|idx| idx as usize)
    }

    /// Checks if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.mapper.index(from), self.mapper.index(to)) {
            (Some(from), Some(to)) => self.adjacency[from as usize].contains_key(&to),
            _ => false,
        }
    }
}

impl<N> DiGraph<N> {
    /// Gets the identity of the node at `idx`.
    #[inline(always)]
    pub fn node(&self, idx: usize) -> Option<&N> {
        self.mapper.id(idx)
    }

    /// Gets the mapping between identities and indices.
    #[inline(always)]
    pub const fn mapper(&self) -> &NodeMapper<N> {
        &self.mapper
    }

    /// Returns the number of edges.
    #[inline(always)]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub(crate) fn into_mapper(self) -> NodeMapper<N> {
        self.mapper
    }
}

impl<N> Graph for DiGraph<N> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.mapper.len()
    }

    #[inline(always)]
    fn edge_weight(&self, from: usize, to: usize) -> Option<i32> {
        let to = u32::try_from(to).ok()?;
        self.adjacency.get(from)?.get(&to).copied()
    }

    fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, i32),
    {
        for (from, edges) in self.adjacency.iter().enumerate() {
            for (&to, &weight) in edges {
                f(from, to as usize, weight);
            }
        }
    }
}
