//! # Vireo Domain Layer
//!
//! Presentation core of the video review screen: one review, its video, its
//! description and a carousel of products enriched from a remote service.
//! It follows hexagonal architecture principles:
//!
//! - **Entities**: `ReviewSource`, `EnrichedProduct`, `SessionState`
//! - **Ports**: traits for the enrichment service, the rendering surface,
//!   the navigation stack and text lookup
//! - **Interactor**: the single owner of session state
//! - **Presenter / Router**: state → view model, commands → navigation
//!
//! ## Architecture
//!
//! This layer has NO dependency on HTTP or on any UI toolkit. Adapters
//! implement the ports; `vireo-enrichment` provides the HTTP enrichment client.
//!
//! ## Example
//!
//! ```rust
//! use vireo_domain::presenter::ReviewMapper;
//! use vireo_domain::review::{ProductId, ReviewSource, SessionState};
//!
//! let source = ReviewSource::builder("https://cdn.example/v.m3u8", vec![ProductId::new(1)])
//!     .view_count("12K views")
//!     .date_text("2 days ago")
//!     .build()
//!     .unwrap();
//! let model = ReviewMapper::default().map_to_view_model(&SessionState::new(source), "Products");
//! assert!(model.is_single_product_mode);
//! ```

pub mod builder;
pub mod interactor;
pub mod localization;
pub mod ports;
pub mod presenter;
pub mod review;
pub mod router;
pub mod session;

// Re-export commonly used types
pub use builder::ReviewModuleBuilder;
pub use interactor::{EnrichmentRequest, ReviewInteractor};
pub use ports::{EnrichmentClient, Localizer, Navigator, ReviewView};
pub use presenter::{ReviewViewModel, Section};
pub use review::{EnrichedProduct, EnrichmentError, ProductId, ReviewSource, SessionState};
pub use session::{ReviewIntent, ReviewSession};
