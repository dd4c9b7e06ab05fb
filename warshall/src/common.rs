//! Common settings shared by the engine and its serialized form.
use bincode::config::{self, Fixint, LittleEndian};

/// Cost of an unreachable pair of nodes.
///
/// No edge may carry this weight, and relaxation never adds it to another cost.
pub const INFINITE_COST: i32 = i32::MAX;

/// Successor of a pair without a next hop, i.e., a self pair or an unreachable one.
pub const NO_SUCCESSOR: u32 = u32::MAX;

/// The largest number of nodes that can be indexed.
///
/// `u32::MAX` is reserved for [`NO_SUCCESSOR`].
pub const MAX_NUM_NODES: usize = NO_SUCCESSOR as usize;

/// Whether a computation builds the successor matrix.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum PathMode {
    /// Builds and returns the successor matrix so that paths can be reconstructed.
    WithPaths,
    /// Returns costs only, saving the memory and time of the successor matrix.
    WithoutPaths,
}

impl PathMode {
    /// Returns `true` if the successor matrix is built.
    #[inline(always)]
    pub const fn with_paths(self) -> bool {
        matches!(self, Self::WithPaths)
    }
}

impl Default for PathMode {
    fn default() -> Self {
        Self::WithPaths
    }
}

pub(crate) fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}
