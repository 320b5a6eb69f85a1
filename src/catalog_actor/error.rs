//! Error types for the catalog.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// `NotFound` means the id was not live in the catalog when the request was processed;
/// callers should treat it as "no such product" and not retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Page number or page size was zero.
    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    /// A submitted product form failed validation.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::InvalidPage(msg) => CatalogError::InvalidPage(msg),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
