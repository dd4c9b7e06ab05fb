//! Floyd-Warshall all-pairs shortest paths.
mod path;
mod relaxation;

use bincode::{Decode, Encode};

use crate::common::{PathMode, INFINITE_COST, MAX_NUM_NODES, NO_SUCCESSOR};
use crate::errors::{Result, WarshallError};
use crate::graph::Graph;
use relaxation::CostsOnly;

pub use path::Path;

/// Shortest-path costs and next hops between all pairs of nodes.
///
/// An instance only exists for graphs without negative-weight cycles, so
/// every cost is exact and every path can be reconstructed.
#[derive(Clone, Debug, Eq, PartialEq, Decode, Encode)]
pub struct ShortestPaths {
    num_nodes: usize,
    // Row-major n x n matrix.
    costs: Vec<i32>,
    // Row-major n x n matrix, or None when built without paths.
    successors: Option<Vec<u32>>,
}

impl ShortestPaths {
    /// Computes the shortest paths between all pairs of nodes in `graph`.
    ///
    /// # Arguments
    ///
    ///  - `graph`: Graph to be solved.
    ///  - `mode`: Whether to build the successor matrix for path reconstruction.
    ///
    /// # Errors
    ///
    /// [`WarshallError::NegativeCycle`] is returned when `graph` contains a
    /// negative-weight cycle. [`WarshallError`] is also returned, before any
    /// relaxation, when `graph` reports edges out of range, edges of weight
    /// [`INFINITE_COST`], or too many nodes, and during relaxation when a
    /// shortest cost does not fit in `i32` below [`INFINITE_COST`].
    pub fn solve<G>(graph: &G, mode: PathMode) -> Result<Self>
    where
        G: Graph,
    {
        let num_nodes = graph.num_nodes();
        let mut paths = Self::init(graph, mode)?;
        match paths.successors.as_mut() {
            Some(successors) => {
                relaxation::relax(&mut paths.costs, num_nodes, successors.as_mut_slice())?
            }
            None => relaxation::relax(&mut paths.costs, num_nodes, &mut CostsOnly)?,
        }
        Ok(paths)
    }

    /// Builds the matrices of direct edges.
    fn init<G>(graph: &G, mode: PathMode) -> Result<Self>
    where
        G: Graph,
    {
        let num_nodes = graph.num_nodes();
        if num_nodes > MAX_NUM_NODES {
            return Err(WarshallError::invalid_argument(
                "graph",
                format!("The number of nodes must be less than {MAX_NUM_NODES}"),
            ));
        }
        let len = num_nodes.checked_mul(num_nodes).ok_or_else(|| {
            WarshallError::invalid_argument("graph", "The cost matrix is too large.")
        })?;

        let mut costs = vec![INFINITE_COST; len];
        let mut successors = mode.with_paths().then(|| vec![NO_SUCCESSOR; len]);
        for i in 0..num_nodes {
            costs[i * num_nodes + i] = 0;
        }

        let mut error = None;
        graph.for_each_edge(|from, to, weight| {
            if error.is_some() {
                return;
            }
            if from >= num_nodes || to >= num_nodes {
                error = Some(WarshallError::invalid_argument(
                    "graph",
                    format!("The edge {from} -> {to} is out of range 0..{num_nodes}"),
                ));
                return;
            }
            if weight == INFINITE_COST {
                error = Some(WarshallError::invalid_argument(
                    "graph",
                    format!("The weight of the edge {from} -> {to} must be less than {INFINITE_COST}"),
                ));
                return;
            }
            if from == to {
                // A non-negative self loop never shortens a path.
                if weight < 0 {
                    error = Some(WarshallError::negative_cycle(from));
                }
                return;
            }
            let ij = from * num_nodes + to;
            if weight < costs[ij] {
                costs[ij] = weight;
                if let Some(successors) = successors.as_mut() {
                    successors[ij] = to as u32;
                }
            }
        });
        if let Some(e) = error {
            return Err(e);
        }

        Ok(Self {
            num_nodes,
            costs,
            successors,
        })
    }

    /// Checks the consistency of deserialized matrices.
    pub(crate) fn verify(&self) -> bool {
        let n = self.num_nodes;
        if n > MAX_NUM_NODES || n.checked_mul(n) != Some(self.costs.len()) {
            return false;
        }
        if (0..n).any(|i| self.costs[i * n + i] != 0) {
            return false;
        }
        if let Some(successors) = self.successors.as_ref() {
            if successors.len() != self.costs.len() {
                return false;
            }
            for (ij, (&cost, &next)) in self.costs.iter().zip(successors).enumerate() {
                let (i, j) = (ij / n, ij % n);
                let has_next = i != j && cost != INFINITE_COST;
                if has_next != (next != NO_SUCCESSOR) || (has_next && next as usize >= n) {
                    return false;
                }
            }
            if !successors_reach_targets(successors, n) {
                return false;
            }
        }
        true
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        assert!(
            from < self.num_nodes && to < self.num_nodes,
            "node index out of range: ({from}, {to}) for {} nodes",
            self.num_nodes
        );
        from * self.num_nodes + to
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Checks if the successor matrix was built.
    #[inline(always)]
    pub const fn has_paths(&self) -> bool {
        self.successors.is_some()
    }

    /// Gets the cost of a shortest path from `from` to `to`, or `None` if
    /// `to` is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> Option<i32> {
        let cost = self.costs[self.index(from, to)];
        (cost != INFINITE_COST).then_some(cost)
    }

    /// Gets the node following `from` on a shortest path to `to`.
    ///
    /// Returns `None` if `from == to`, if `to` is unreachable, or if the
    /// successor matrix was not built.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline(always)]
    pub fn successor(&self, from: usize, to: usize) -> Option<usize> {
        let index = self.index(from, to);
        let next = self.successors.as_ref()?[index];
        (next != NO_SUCCESSOR).then_some(next as usize)
    }

    /// Gets the row-major cost matrix.
    ///
    /// Unreachable pairs hold [`INFINITE_COST`].
    #[inline(always)]
    pub fn costs(&self) -> &[i32] {
        &self.costs
    }

    /// Gets the row-major successor matrix if it was built.
    ///
    /// Pairs without a next hop hold [`NO_SUCCESSOR`].
    #[inline(always)]
    pub fn successors(&self) -> Option<&[u32]> {
        self.successors.as_deref()
    }

    /// Reconstructs a shortest path from `from` to `to`.
    ///
    /// The path starts with `from` and ends with `to`. If `from == to`, it
    /// consists of the single node.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when
    ///
    ///  - either index is out of range,
    ///  - the successor matrix was not built, or
    ///  - `to` is unreachable from `from` ([`WarshallError::NoPath`]).
    pub fn path(&self, from: usize, to: usize) -> Result<Path<'_>> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return Err(WarshallError::invalid_argument(
                "from/to",
                format!(
                    "The node indices ({from}, {to}) must be less than {}",
                    self.num_nodes
                ),
            ));
        }
        let successors = self.successors.as_deref().ok_or_else(|| {
            WarshallError::invalid_argument(
                "self",
                "The shortest paths were computed without the successor matrix.",
            )
        })?;
        if self.costs[from * self.num_nodes + to] == INFINITE_COST {
            return Err(WarshallError::no_path(from, to));
        }
        Ok(Path::new(successors, self.num_nodes, from, to))
    }
}

/// Checks that following next hops toward every node `j` ends at `j`
/// without revisiting a node.
///
/// Every next hop must be in `0..n`.
fn successors_reach_targets(successors: &[u32], n: usize) -> bool {
    const UNVISITED: u8 = 0;
    const ON_WALK: u8 = 1;
    const REACHES: u8 = 2;

    let mut states = vec![UNVISITED; n];
    let mut walk = vec![];
    for j in 0..n {
        states.fill(UNVISITED);
        states[j] = REACHES;
        for i in 0..n {
            if successors[i * n + j] == NO_SUCCESSOR {
                continue;
            }
            let mut node = i;
            while states[node] != REACHES {
                let next = successors[node * n + j];
                if states[node] == ON_WALK || next == NO_SUCCESSOR {
                    return false;
                }
                states[node] = ON_WALK;
                walk.push(node);
                node = next as usize;
            }
            for node in walk.drain(..) {
                states[node] = REACHES;
            }
        }
    }
    true
}
