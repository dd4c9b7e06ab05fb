use std::iter::FusedIterator;

use crate::common::NO_SUCCESSOR;

/// Iterator over the node indices of a shortest path, including both ends.
///
/// It walks the successor matrix lazily and never mutates it, so any number
/// of paths can be walked concurrently over the same result.
#[derive(Clone, Debug)]
pub struct Path<'a> {
    successors: &'a [u32],
    num_nodes: usize,
    current: Option<usize>,
    to: usize,
}

impl<'a> Path<'a> {
    /// Both ends must be valid indices and `to` must be reachable from `from`.
    pub(crate) fn new(successors: &'a [u32], num_nodes: usize, from: usize, to: usize) -> Self {
        debug_assert!(from < num_nodes && to < num_nodes);
        Self {
            successors,
            num_nodes,
            current: Some(from),
            to,
        }
    }
}

impl Iterator for Path<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        self.current = if current == self.to {
            None
        } else {
            let next = self.successors[current * self.num_nodes + self.to];
            debug_assert_ne!(next, NO_SUCCESSOR);
            Some(next as usize)
        };
        Some(current)
    }
}

impl FusedIterator for Path<'_> {}
