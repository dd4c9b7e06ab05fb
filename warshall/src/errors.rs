//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for Warshall.
pub type Result<T, E = WarshallError> = std::result::Result<T, E>;

/// The error type for Warshall.
#[derive(Debug)]
pub enum WarshallError {
    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`InvalidFormatError`].
    InvalidFormat(InvalidFormatError),

    /// The error variant for [`NegativeCycleError`].
    NegativeCycle(NegativeCycleError),

    /// The error variant for [`NoPathError`].
    NoPath(NoPathError),

    /// The error variant for [`TryFromIntError`](std::num::TryFromIntError).
    TryFromInt(std::num::TryFromIntError),

    /// The error variant for [`ParseIntError`](std::num::ParseIntError).
    ParseInt(std::num::ParseIntError),

    /// The error variant for [`DecodeError`](bincode::error::DecodeError).
    BincodeDecode(bincode::error::DecodeError),

    /// The error variant for [`EncodeError`](bincode::error::EncodeError).
    BincodeEncode(bincode::error::EncodeError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl WarshallError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) const fn negative_cycle(node: usize) -> Self {
        Self::NegativeCycle(NegativeCycleError { node })
    }

    pub(crate) const fn no_path(from: usize, to: usize) -> Self {
        Self::NoPath(NoPathError { from, to })
    }

    /// Returns `true` if the error reports a negative-weight cycle.
    ///
    /// This is the only failure expected during normal operation, e.g., when
    /// solving randomly generated graphs in a retry loop.
    pub const fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle(_))
    }
}

impl fmt::Display for WarshallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::InvalidFormat(e) => e.fmt(f),
            Self::NegativeCycle(e) => e.fmt(f),
            Self::NoPath(e) => e.fmt(f),
            Self::TryFromInt(e) => e.fmt(f),
            Self::ParseInt(e) => e.fmt(f),
            Self::BincodeDecode(e) => e.fmt(f),
            Self::BincodeEncode(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for WarshallError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when the input format is invalid.
#[derive(Debug)]
pub struct InvalidFormatError {
    /// Name of the format.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// Error used when the input graph contains a negative-weight cycle.
///
/// Shortest-path costs are undefined for such a graph. The error is
/// recoverable: callers typically reject the input or retry with another graph.
#[derive(Debug)]
pub struct NegativeCycleError {
    pub(crate) node: usize,
}

impl NegativeCycleError {
    /// Index of a node with a negative-cost walk back to itself.
    pub const fn node(&self) -> usize {
        self.node
    }
}

impl fmt::Display for NegativeCycleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NegativeCycleError: node {} lies on a negative-weight cycle",
            self.node
        )
    }
}

impl Error for NegativeCycleError {}

/// Error used when a path is requested between disconnected nodes.
#[derive(Debug)]
pub struct NoPathError {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

impl NoPathError {
    /// Index of the source node.
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Index of the destination node.
    pub const fn to(&self) -> usize {
        self.to
    }
}

impl fmt::Display for NoPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NoPathError: node {} is not reachable from node {}",
            self.to, self.from
        )
    }
}

impl Error for NoPathError {}

impl From<std::num::TryFromIntError> for WarshallError {
    fn from(error: std::num::TryFromIntError) -> Self {
        Self::TryFromInt(error)
    }
}

impl From<std::num::ParseIntError> for WarshallError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::ParseInt(error)
    }
}

impl From<bincode::error::DecodeError> for WarshallError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::BincodeDecode(error)
    }
}

impl From<bincode::error::EncodeError> for WarshallError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::BincodeEncode(error)
    }
}

impl From<std::io::Error> for WarshallError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
