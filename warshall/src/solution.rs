//! Shortest paths addressed by node names.
use std::io::{Read, Write};

use bincode::{
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};

use crate::common::{self, PathMode};
use crate::errors::{Result, WarshallError};
use crate::graph::{DiGraph, NodeMapper};
use crate::shortest_paths::ShortestPaths;

/// Shortest paths of a graph together with its node names.
pub struct Solution {
    mapper: NodeMapper<String>,
    paths: ShortestPaths,
}

impl Decode for Solution {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let names: Vec<String> = Decode::decode(decoder)?;
        let mapper = NodeMapper::from_ids(names)
            .map_err(|e| DecodeError::OtherString(e.to_string()))?;
        let paths = Decode::decode(decoder)?;
        Ok(Self { mapper, paths })
    }
}
bincode::impl_borrow_decode!(Solution);

impl Encode for Solution {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(self.mapper.ids(), encoder)?;
        Encode::encode(&self.paths, encoder)?;
        Ok(())
    }
}

impl Solution {
    /// Solves `graph`, keeping its node names for lookups.
    ///
    /// # Errors
    ///
    /// See [`ShortestPaths::solve()`].
    pub fn solve(graph: DiGraph<String>, mode: PathMode) -> Result<Self> {
        let paths = ShortestPaths::solve(&graph, mode)?;
        Ok(Self {
            mapper: graph.into_mapper(),
            paths,
        })
    }

    /// Gets the index-based shortest paths.
    #[inline(always)]
    pub const fn shortest_paths(&self) -> &ShortestPaths {
        &self.paths
    }

    /// Gets the index of the node `name`.
    #[inline(always)]
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.mapper.index(name).map(|idx| idx as usize)
    }

    /// Gets the name of the node at `idx`.
    #[inline(always)]
    pub fn node_name(&self, idx: usize) -> Option<&str> {
        self.mapper.id(idx).map(String::as_str)
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub const fn num_nodes(&self) -> usize {
        self.paths.num_nodes()
    }

    fn indices(&self, from: &str, to: &str) -> Result<(usize, usize)> {
        let from = self.node_index(from).ok_or_else(|| {
            WarshallError::invalid_argument("from", format!("Unknown node {from}"))
        })?;
        let to = self
            .node_index(to)
            .ok_or_else(|| WarshallError::invalid_argument("to", format!("Unknown node {to}")))?;
        Ok((from, to))
    }

    /// Gets the cost of a shortest path from `from` to `to`, or `None` if
    /// `to` is unreachable.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when a node name is unknown.
    pub fn cost(&self, from: &str, to: &str) -> Result<Option<i32>> {
        let (from, to) = self.indices(from, to)?;
        Ok(self.paths.cost(from, to))
    }

    /// Reconstructs a shortest path from `from` to `to` as node names.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when a node name is unknown, or see
    /// [`ShortestPaths::path()`].
    pub fn path(&self, from: &str, to: &str) -> Result<Vec<&str>> {
        let (from, to) = self.indices(from, to)?;
        Ok(self
            .paths
            .path(from, to)?
            .map(|idx| self.mapper.ids()[idx].as_str())
            .collect())
    }

    /// Exports the solution.
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        let num_bytes = bincode::encode_into_std_write(self, &mut wtr, common::bincode_config())?;
        Ok(num_bytes)
    }

    /// Creates a solution from a reader.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when bincode generates an error or when
    /// the data is not a consistent solution.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let solution: Self = bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        if solution.mapper.len() != solution.paths.num_nodes() {
            return Err(WarshallError::invalid_format(
                "solution",
                "The number of names must match the number of nodes.",
            ));
        }
        if !solution.paths.verify() {
            return Err(WarshallError::invalid_format(
                "solution",
                "The shortest-path matrices are inconsistent.",
            ));
        }
        Ok(solution)
    }
}
