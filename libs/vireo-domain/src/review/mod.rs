//! Review domain module
//!
//! Entities, identifiers and errors for one video review session.

pub mod entity;
pub mod error;
pub mod ids;
pub mod links;

pub use entity::{EnrichedProduct, ReviewSource, ReviewSourceBuilder, SessionState};
pub use error::{EnrichmentError, NavigationError, Result, ReviewError};
pub use ids::{ProductId, SessionId};
pub use links::ProductLinks;
