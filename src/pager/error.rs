//! Error definitions for the pager module

use thiserror::Error;

/// Error types for the pager subsystem
#[derive(Debug, Error)]
pub enum PagerError {
    /// A pager was constructed over an empty item sequence
    #[error("carousel needs at least one item")]
    EmptyDeck,

    /// A caller asked for an index outside the deck; contract violation,
    /// never produced by the adapters
    #[error("target index {index} outside deck of {len} items")]
    OutOfRange { index: usize, len: usize },

    /// Command or snapshot channel failure
    #[error("channel error: {0}")]
    ChannelError(String),

    /// Engine task management failure
    #[error("task error: {0}")]
    TaskError(String),
}
