use thiserror::Error;

/// Errors reported while constructing a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// No combining operator was supplied.
    #[error("no combining operator was supplied")]
    MissingOperator,

    /// No identity element was supplied; padding and empty ranges need one.
    #[error("no identity element was supplied")]
    MissingIdentity,

    /// The padded backing buffer (`2n` slots) does not fit in `usize`.
    #[error("capacity overflow for {len} input values")]
    CapacityOverflow {
        /// Number of input values.
        len: usize,
    },
}

/// Errors reported by tree operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Point access outside of `[0, capacity)`.
    #[error("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Padded leaf count of the tree.
        capacity: usize,
    },

    /// Range query with `start > stop`.
    #[error("invalid range: start {start} > stop {stop}")]
    InvalidRange { start: usize, stop: usize },

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
