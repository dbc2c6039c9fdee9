//! Ports (trait definitions) for the collaborators of a review screen
//!
//! The review module owns state and decisions; everything that touches the
//! outside world goes through one of these traits:
//!
//! - [`EnrichmentClient`]: resolves product ids into display records
//! - [`ReviewView`]: the rendering surface
//! - [`Navigator`]: the screen stack
//! - [`Localizer`]: text lookup
//!
//! ## Static Dispatch
//!
//! The async port uses a native `impl Future` return type, so every consumer
//! is monomorphized over the concrete adapter.

use std::future::Future;

use url::Url;

use crate::presenter::ReviewViewModel;
use crate::review::{EnrichedProduct, EnrichmentError, NavigationError};

/// Port for batch product enrichment
///
/// Implementations must:
/// - Issue a single request for the whole batch
/// - Return records in the order the backend produced them
/// - Convert every failure, including an unexpected response shape, into
///   `EnrichmentError`
///
/// Timeouts, if any, are the implementation's business.
pub trait EnrichmentClient: Send + Sync {
    /// Resolve decimal-string product ids into enriched products
    ///
    /// # Errors
    ///
    /// Returns `EnrichmentError` if the batch could not be resolved
    fn fetch_enriched(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<EnrichedProduct>, EnrichmentError>> + Send;
}

/// Port for the rendering surface
///
/// Assigning a model and redrawing are separate calls; a surface must not
/// redraw on `set_model` alone.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewView: Send + Sync {
    /// Store the latest view model snapshot
    fn set_model(&self, model: ReviewViewModel);

    /// Redraw from the latest stored snapshot
    fn reload(&self);
}

/// Visual flavour of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Info,
}

/// Port for the navigation stack hosting the review screen
///
/// Every call reports whether the transition happened. `present_video_player`
/// returns once presentation has completed.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Pop the review screen
    fn pop(&self) -> Result<(), NavigationError>;

    /// Push a product card screen titled `title` for `location`
    fn push_product_card(&self, title: &str, location: &str) -> Result<(), NavigationError>;

    /// Present the modal video player for `url`
    fn present_video_player(&self, url: &Url) -> Result<(), NavigationError>;

    /// Start playback in the presented video player
    fn start_playback(&self) -> Result<(), NavigationError>;

    /// Show a non-blocking alert over the review screen
    fn show_alert(&self, text: &str, kind: AlertKind) -> Result<(), NavigationError>;
}

/// Port for localized text lookup
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    /// Text for `key` in the current locale
    fn localized(&self, key: &str) -> String;
}
