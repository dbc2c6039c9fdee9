//! Assembly of a review module from its collaborators

use std::sync::Arc;

use crate::interactor::ReviewInteractor;
use crate::ports::{EnrichmentClient, Localizer, Navigator, ReviewView};
use crate::presenter::{ReviewMapper, ReviewPresenter};
use crate::review::{ProductLinks, ReviewSource, SessionState};
use crate::router::ReviewRouter;
use crate::session::ReviewSession;

/// Localization key of the carousel title
pub const PRODUCTS_TITLE_KEY: &str = "products_from_video";

/// Wires presenter, router and interactor for one review
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use vireo_domain::builder::ReviewModuleBuilder;
/// # use vireo_domain::ports::{EnrichmentClient, Navigator, ReviewView};
/// # use vireo_domain::localization::StaticLocalizer;
/// # use vireo_domain::review::{ProductLinks, ReviewSource};
/// # async fn example<V: ReviewView + 'static, N: Navigator + 'static, E: EnrichmentClient + 'static>(
/// #     source: ReviewSource, view: V, navigator: N, client: Arc<E>,
/// # ) {
/// let session = ReviewModuleBuilder::new(source, ProductLinks::default())
///     .start(view, navigator, StaticLocalizer::english(), client);
/// session.select_product(0);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReviewModuleBuilder {
    source: ReviewSource,
    links: ProductLinks,
}

impl ReviewModuleBuilder {
    pub fn new(source: ReviewSource, links: ProductLinks) -> Self {
        Self { source, links }
    }

    /// Spawn the session and activate it
    ///
    /// Must be called inside a tokio runtime.
    pub fn start<V, N, L, E>(
        self,
        view: V,
        navigator: N,
        localizer: L,
        client: Arc<E>,
    ) -> ReviewSession
    where
        V: ReviewView + 'static,
        N: Navigator + 'static,
        L: Localizer + 'static,
        E: EnrichmentClient + 'static,
    {
        let products_title = localizer.localized(PRODUCTS_TITLE_KEY);
        let presenter = ReviewPresenter::new(
            view,
            ReviewMapper::new(self.links.clone()),
            products_title,
        );
        let router = ReviewRouter::new(navigator, localizer, self.links);
        let interactor = ReviewInteractor::new(SessionState::new(self.source), presenter, router);

        let session = ReviewSession::spawn(interactor, client);
        session.activate();
        session
    }
}
