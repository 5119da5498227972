//! Error types for Chronogram operations.
//!
//! Drawing itself never fails; errors surface at the configuration boundary,
//! where externally supplied strings are validated.

use thiserror::Error;

use chronogram_core::draw::UnknownActorRole;

/// The main error type for Chronogram operations.
#[derive(Debug, Error)]
pub enum ChronogramError {
    /// A configured color string failed to parse.
    #[error("invalid color in config: {0}")]
    InvalidColor(String),

    /// A configured actor role name falls outside the known set.
    #[error(transparent)]
    UnknownActorRole(#[from] UnknownActorRole),
}
