//! Core of the hop directory jumper.
//!
//! Provides:
//! - Frecency score model
//! - In-memory entry store with pruning
//! - Pattern-to-path matcher
//! - JSON data file storage

pub mod error;
pub mod matcher;
pub mod paths;
pub mod score;
pub mod storage;
pub mod store;

pub use error::PathError;
pub use matcher::best_match;
pub use score::score;
pub use storage::DataFile;
pub use store::{Entry, Store, unix_now};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::matcher::best_match;
    pub use crate::score::score;
    pub use crate::storage::DataFile;
    pub use crate::store::{Entry, Store, unix_now};
    pub use anyhow::{Context, Result};
}
