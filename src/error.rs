//! Error types for Fenwick tree operations.

use thiserror::Error;

/// Error variants for Fenwick tree operations and the command shell.
#[derive(Debug, Error)]
pub enum Error {
    /// An index outside `[1, capacity)` was passed to a mutating operation.
    ///
    /// An uninitialized tree has capacity 0, so every index reports this.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The requested number of slots could not be allocated.
    #[error("cannot allocate {0} slots")]
    CapacityOverflow(usize),

    /// A shell command line could not be parsed.
    #[error("invalid command: {0}")]
    Parse(String),

    /// An I/O error occurred while driving the shell.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Fenwick tree operations.
pub type Result<T> = std::result::Result<T, Error>;
