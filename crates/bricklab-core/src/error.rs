//! Error types

use uuid::Uuid;

/// Errors from world mutation operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("part not found: {0}")]
    PartNotFound(Uuid),
    #[error("cannot weld a part to itself: {0}")]
    SelfWeld(Uuid),
}
