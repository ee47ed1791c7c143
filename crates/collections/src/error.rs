use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tried to add a key that is already stored,
    /// the map is left untouched
    #[error("key already present: {0:?}")]
    DuplicateKey(String),

    /// The key is not stored in the map
    #[error("key not found: {0:?}")]
    NotFound(String),

    /// A map needs at least one bucket to hash into
    #[error("invalid capacity {0}, a map needs at least one bucket")]
    InvalidCapacity(usize),

    #[error("index out of bounds, got: {index}, len: {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
