//! Error types for seed validation.

use thiserror::Error;

use crate::seed::MAX_ENTITY_COUNT;

/// Errors raised when a seed cannot describe a generatable network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The seed asked for no groups at all.
    #[error("seed must describe at least one group")]
    NoGroups,
    /// The seed asked for empty groups.
    #[error("groups must hold at least one member")]
    EmptyGroups,
    /// A per-entity count exceeds the generator bound.
    #[error("seed counts must stay at or below {MAX_ENTITY_COUNT}")]
    TooLarge,
}
