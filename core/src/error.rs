//! Error types for the todo-list client.
//!
//! # Design
//! Three layers: `ValidationError` is raised locally before any request is
//! built, `ApiError` covers everything that can go wrong around one HTTP
//! round-trip, and `TodoError` is what controller operations return. `NotFound`
//! keeps its own variant because a 404 usually means another client already
//! removed the item, which callers treat differently from a server fault.

use thiserror::Error;

use crate::types::ItemId;

/// Local input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Errors produced around a single request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("item not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Coarse classification used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Decode,
}

/// Error returned by `TodoController` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// At least one delete of a bulk delete failed. Deletes that went
    /// through are not rolled back.
    #[error("{} of {} deletes failed", .failed.len(), .failed.len() + .deleted.len())]
    BulkDelete {
        failed: Vec<(ItemId, ApiError)>,
        deleted: Vec<ItemId>,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::DeserializationError(_) => ErrorKind::Decode,
            _ => ErrorKind::Transport,
        }
    }
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::Validation(_) => ErrorKind::Validation,
            TodoError::Api(e) => e.kind(),
            TodoError::BulkDelete { .. } => ErrorKind::Transport,
        }
    }
}
