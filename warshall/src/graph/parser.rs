use std::io::{prelude::*, BufReader, Read};

use crate::common::INFINITE_COST;
use crate::errors::{Result, WarshallError};
use crate::graph::DiGraph;
use crate::utils;

impl DiGraph<String> {
    /// Creates a new instance from a CSV edge list.
    ///
    /// Each row is either `node`, declaring an isolated node, or
    /// `from,to,weight`, declaring an edge. Empty rows and rows starting with
    /// `#` are skipped. Nodes are indexed in order of first appearance.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when
    ///
    ///  - a row has neither one nor three fields,
    ///  - a weight is not a valid integer or is [`INFINITE_COST`],
    ///  - an edge is a self loop or duplicates an earlier edge.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let reader = BufReader::new(rdr);
        let mut graph = Self::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = i + 1;
            let mut cols = utils::parse_csv_row(line)?;
            if cols.len() == 1 {
                graph.add_node(cols.swap_remove(0))?;
                continue;
            }
            let [from, to, weight] = <[String; 3]>::try_from(cols).map_err(|_| {
                let msg = format!(
                    "Line {lineno}: a row must be a node or three fields from,to,weight, {line}"
                );
                WarshallError::invalid_format("graph", msg)
            })?;
            let weight: i32 = weight.trim().parse().map_err(|_| {
                WarshallError::invalid_format(
                    "graph",
                    format!("Line {lineno}: the weight must be an integer, {line}"),
                )
            })?;
            if weight == INFINITE_COST {
                let msg = format!(
                    "Line {lineno}: the weight must be less than {INFINITE_COST}, {line}"
                );
                return Err(WarshallError::invalid_format("graph", msg));
            }
            if from == to {
                let msg = format!("Line {lineno}: self loops are not allowed, {line}");
                return Err(WarshallError::invalid_format("graph", msg));
            }
            if graph.add_edge(from, to, weight)?.is_some() {
                let msg = format!("Line {lineno}: the edge is defined twice, {line}");
                return Err(WarshallError::invalid_format("graph", msg));
            }
        }
        Ok(graph)
    }

    /// Exports the graph as a CSV edge list readable by [`DiGraph::from_reader()`].
    ///
    /// Nodes are listed first so that indices are preserved.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when writing fails.
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        for id in self.mapper.ids() {
            utils::quote_csv_cell(&mut wtr, id.as_bytes())?;
            wtr.write_all(b"\n")?;
        }
        for (from, edges) in self.adjacency.iter().enumerate() {
            let mut edges: Vec<_> = edges.iter().collect();
            edges.sort_unstable();
            for (&to, &weight) in edges {
                utils::quote_csv_cell(&mut wtr, self.mapper.ids()[from].as_bytes())?;
                wtr.write_all(b",")?;
                utils::quote_csv_cell(&mut wtr, self.mapper.ids()[to as usize].as_bytes())?;
                writeln!(wtr, ",{weight}")?;
            }
        }
        Ok(())
    }
}
