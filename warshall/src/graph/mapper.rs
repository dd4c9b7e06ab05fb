use std::borrow::Borrow;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::common::MAX_NUM_NODES;
use crate::errors::{Result, WarshallError};

/// Bijection between node identities and dense indices `0..n`.
///
/// Indices are assigned in insertion order and never change.
#[derive(Clone, Debug)]
pub struct NodeMapper<N> {
    ids: Vec<N>,
    indices: HashMap<N, u32>,
}

impl<N> Default for NodeMapper<N> {
    fn default() -> Self {
        Self {
            ids: vec![],
            indices: HashMap::new(),
        }
    }
}

impl<N> NodeMapper<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper assigning `ids[i]` to index `i`.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when `ids` contains duplicates or
    /// exceeds the index space.
    pub fn from_ids(ids: Vec<N>) -> Result<Self> {
        if ids.len() > MAX_NUM_NODES {
            return Err(WarshallError::invalid_argument(
                "ids",
                format!("The number of nodes must be less than {MAX_NUM_NODES}"),
            ));
        }
        let mut indices = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if indices.insert(id.clone(), i as u32).is_some() {
                return Err(WarshallError::invalid_argument(
                    "ids",
                    format!("Node {i} duplicates an earlier identity"),
                ));
            }
        }
        Ok(Self { ids, indices })
    }

    /// Returns the index of `id`, assigning the next free one if it is new.
    ///
    /// # Errors
    ///
    /// [`WarshallError`] is returned when the index space is exhausted.
    pub fn insert(&mut self, id: N) -> Result<u32> {
        if let Some(&idx) = self.indices.get(&id) {
            return Ok(idx);
        }
        if self.ids.len() >= MAX_NUM_NODES {
            return Err(WarshallError::invalid_argument(
                "id",
                format!("The number of nodes must be less than {MAX_NUM_NODES}"),
            ));
        }
        let idx = self.ids.len() as u32;
        self.ids.push(id.clone());
        self.indices.insert(id, idx);
        Ok(idx)
    }

    /// Gets the index of `id`.
    #[inline(always)]
    pub fn index<Q>(&self, id: &Q) -> Option<u32>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.get(id).copied()
    }
}

impl<N> NodeMapper<N> {
    /// Gets the identity at `idx`.
    #[inline(always)]
    pub fn id(&self, idx: usize) -> Option<&N> {
        self.ids.get(idx)
    }

    /// Gets all identities ordered by index.
    #[inline(always)]
    pub fn ids(&self) -> &[N] {
        &self.ids
    }

    /// Gets the number of mapped nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if no node is mapped.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
