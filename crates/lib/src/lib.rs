//!
//! pathmap: path-addressable key/value containers.
//!
//! ## Core Concepts
//!
//! * **PathMap (`collection::PathMap`)**: A tree of nested mappings navigated with slash-delimited
//!   paths such as `"three/A-one"`. Reads return copies, `get_ref` returns live aliases, and writes
//!   create missing intermediate levels.
//! * **Values (`collection::Value`)**: A closed sum of scalars (null, bool, int, float, text) and
//!   nested mappings. JSON is the text format; arrays are read as index-keyed mappings.
//! * **PriorityMap (`priority::PriorityMap`)**: A flat map where every key carries an integer
//!   priority. Keys and values are always enumerated in ascending priority order.
//!
//! Neither container is synchronized. Share one across threads only behind external locking.

pub mod collection;
pub mod priority;

/// Re-export the container types for easier access.
pub use collection::PathMap;
pub use priority::PriorityMap;

/// Result type used throughout the pathmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathmap library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Collection(_) => "collection",
        }
    }

    /// Check if this error indicates a path was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            Error::Collection(err) => err.is_not_found(),
            Error::Serialize(_) => false,
        }
    }

    /// Check if this error came from decoding JSON.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Collection(err) => err.is_parse_error(),
            Error::Io(_) => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
