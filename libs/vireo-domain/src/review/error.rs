//! Domain errors for the video review module
//!
//! Every failure the module can observe is one of these types. None of them is
//! fatal to a session: the interactor degrades the screen instead.

use thiserror::Error;

/// Errors raised while building review domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// A review must reference at least one product
    #[error("Review must reference at least one product")]
    EmptyProductIds,
}

/// Failure to obtain enriched product data
///
/// The variants exist for logging only. The interactor treats them all the
/// same way: one generic error notification, no retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    /// The request never produced a response
    #[error("Enrichment transport failed: {0}")]
    Transport(String),

    /// A response arrived but did not have the expected shape
    #[error("Malformed enrichment response: {0}")]
    MalformedResponse(String),
}

impl EnrichmentError {
    /// Create a transport error with a message
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a malformed response error with a message
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

/// Failure reported by the navigation collaborator
///
/// The router absorbs these; they never reach the interactor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// There is no screen stack to act on (screen already gone)
    #[error("Navigation stack unavailable")]
    Detached,

    /// The collaborator refused the transition
    #[error("Navigation rejected: {0}")]
    Rejected(String),
}

impl NavigationError {
    /// Create a rejected error with a message
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}

/// Result type alias for review construction
pub type Result<T> = std::result::Result<T, ReviewError>;
