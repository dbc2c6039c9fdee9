//! Review interactor - state owner and intent handler
//!
//! The interactor is the only writer of [`SessionState`]. It stays
//! synchronous: it decides *what* to fetch and reacts to *what came back*,
//! while [`crate::session::ReviewSession`] owns the actual async fetch.

use tracing::{debug, info, trace, warn};

use crate::presenter::Presenter;
use crate::review::{EnrichedProduct, EnrichmentError, SessionId, SessionState};
use crate::router::Router;

/// The one enrichment batch a session asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    /// Product ids as decimal strings, in review order
    pub product_ids: Vec<String>,
}

/// Coordinates one review session
///
/// ## Failure policy
///
/// - Enrichment failure: state untouched, one generic error notification
/// - Invalid selection (index or url): silently ignored
///
/// Nothing is retried.
pub struct ReviewInteractor<P, R> {
    session_id: SessionId,
    state: SessionState,
    presenter: P,
    router: R,
    enrichment_requested: bool,
}

impl<P, R> ReviewInteractor<P, R>
where
    P: Presenter,
    R: Router,
{
    pub fn new(state: SessionState, presenter: P, router: R) -> Self {
        Self {
            session_id: SessionId::new(),
            state,
            presenter,
            router,
            enrichment_requested: false,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Publish the current view model and hand out the enrichment request
    ///
    /// The view model is published before the request is returned, so the
    /// screen has content while enrichment is in flight. Only the first
    /// call yields a request; later calls just republish.
    pub fn activate(&mut self) -> Option<EnrichmentRequest> {
        self.presenter.update(&self.state);

        if self.enrichment_requested {
            debug!(session_id = %self.session_id, "Session already activated");
            return None;
        }
        self.enrichment_requested = true;

        let product_ids: Vec<String> = self
            .state
            .review_source()
            .product_ids()
            .iter()
            .map(ToString::to_string)
            .collect();

        info!(
            session_id = %self.session_id,
            product_count = product_ids.len(),
            "Requesting product enrichment"
        );

        Some(EnrichmentRequest { product_ids })
    }

    /// Apply the outcome of the enrichment request
    pub fn on_enrichment_resolved(&mut self, result: Result<Vec<EnrichedProduct>, EnrichmentError>) {
        match result {
            Ok(products) => {
                info!(
                    session_id = %self.session_id,
                    product_count = products.len(),
                    "Enrichment resolved"
                );
                self.state.replace_enriched_products(products);
                self.presenter.update(&self.state);
            }
            Err(err) => {
                warn!(session_id = %self.session_id, error = %err, "Enrichment failed");
                self.router.show_error_notification();
            }
        }
    }

    pub fn on_back_requested(&self) {
        self.router.dismiss();
    }

    /// Open the product at `index` in the review's own id list
    ///
    /// Out-of-range indices (including negative ones) are ignored.
    pub fn on_product_selected(&self, index: isize) {
        let source = self.state.review_source();
        let Some(id) = usize::try_from(index)
            .ok()
            .and_then(|index| source.product_ids().get(index))
        else {
            trace!(session_id = %self.session_id, index, "Ignoring out-of-range product selection");
            return;
        };

        self.router
            .open_product(*id, source.brand_name().unwrap_or_default());
    }

    pub fn on_video_play_requested(&self) {
        self.router
            .present_video_overlay(self.state.review_source().media_url());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReviewView;
    use crate::presenter::{
        MockPresenter, ReviewMapper, ReviewPresenter, ReviewViewModel, Section,
        DEFAULT_CONTENT_INSET, SINGLE_PRODUCT_CONTENT_INSET,
    };
    use crate::review::{ProductId, ReviewSource};
    use crate::router::MockRouter;
    use mockall::predicate::eq;
    use std::sync::{Arc, Mutex};

    /// Rendering surface recording every published snapshot
    #[derive(Clone, Default)]
    struct RecordingView {
        models: Arc<Mutex<Vec<ReviewViewModel>>>,
        reloads: Arc<Mutex<usize>>,
    }

    impl RecordingView {
        fn models(&self) -> Vec<ReviewViewModel> {
            self.models.lock().unwrap().clone()
        }

        fn reloads(&self) -> usize {
            *self.reloads.lock().unwrap()
        }
    }

    impl ReviewView for RecordingView {
        fn set_model(&self, model: ReviewViewModel) {
            self.models.lock().unwrap().push(model);
        }

        fn reload(&self) {
            *self.reloads.lock().unwrap() += 1;
        }
    }

    fn source(ids: &[u64], brand: Option<&str>) -> ReviewSource {
        ReviewSource::builder(
            "https://cdn.example/review.m3u8",
            ids.iter().copied().map(ProductId::new).collect(),
        )
        .title("Review")
        .brand_name(brand.map(str::to_string))
        .view_count("12K views")
        .date_text("2 days ago")
        .build()
        .unwrap()
    }

    fn product(id: u64) -> EnrichedProduct {
        EnrichedProduct::new(ProductId::new(id), "Acme", format!("Item {id}"), "99 ₽", false, id)
    }

    fn interactor(
        ids: &[u64],
        router: MockRouter,
    ) -> (
        ReviewInteractor<ReviewPresenter<RecordingView>, MockRouter>,
        RecordingView,
    ) {
        let view = RecordingView::default();
        let presenter = ReviewPresenter::new(view.clone(), ReviewMapper::default(), "Products");
        let interactor =
            ReviewInteractor::new(SessionState::new(source(ids, Some("Acme"))), presenter, router);
        (interactor, view)
    }

    #[test]
    fn test_activate_publishes_empty_carousel_and_requests_ids() {
        let (mut interactor, view) = interactor(&[101, 202, 303], MockRouter::new());

        let request = interactor.activate().expect("first activation requests enrichment");

        assert_eq!(request.product_ids, vec!["101", "202", "303"]);
        let models = view.models();
        assert_eq!(models.len(), 1);
        assert_eq!(view.reloads(), 1);
        assert!(matches!(
            models[0].sections[2],
            Section::ProductsCarousel { ref items, .. } if items.is_empty()
        ));
    }

    #[test]
    fn test_activate_requests_enrichment_once() {
        let (mut interactor, view) = interactor(&[1, 2], MockRouter::new());

        assert!(interactor.activate().is_some());
        assert!(interactor.activate().is_none());
        assert_eq!(view.models().len(), 2);
    }

    #[test]
    fn test_activate_publishes_pre_enrichment_state() {
        let mut presenter = MockPresenter::new();
        presenter
            .expect_update()
            .withf(|state| state.enriched_products().is_empty())
            .times(1)
            .return_const(());
        let mut interactor = ReviewInteractor::new(
            SessionState::new(source(&[1], None)),
            presenter,
            MockRouter::new(),
        );

        let request = interactor.activate();
        assert_eq!(request.map(|r| r.product_ids), Some(vec!["1".to_string()]));
    }

    #[test]
    fn test_single_and_multi_product_modes() {
        let (mut single, single_view) = interactor(&[1], MockRouter::new());
        single.activate();
        let model = &single_view.models()[0];
        assert!(model.is_single_product_mode);
        assert_eq!(model.content_inset_bottom, SINGLE_PRODUCT_CONTENT_INSET);

        let (mut multi, multi_view) = interactor(&[1, 2], MockRouter::new());
        multi.activate();
        let model = &multi_view.models()[0];
        assert!(!model.is_single_product_mode);
        assert_eq!(model.content_inset_bottom, DEFAULT_CONTENT_INSET);
    }

    #[test]
    fn test_enrichment_success_republishes_in_client_order() {
        let (mut interactor, view) = interactor(&[1, 2, 3], MockRouter::new());
        interactor.activate();

        interactor.on_enrichment_resolved(Ok(vec![product(3), product(2), product(1)]));

        let ids: Vec<u64> = interactor
            .state()
            .enriched_products()
            .iter()
            .map(|p| p.id().get())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let models = view.models();
        assert_eq!(models.len(), 2);
        let subtitles: Vec<&str> = models[1]
            .carousel_items()
            .iter()
            .map(|item| item.subtitle.as_str())
            .collect();
        assert_eq!(subtitles, vec!["Item 3", "Item 2", "Item 1"]);
    }

    #[test]
    fn test_enrichment_keeps_duplicates_and_extra_records() {
        let (mut interactor, view) = interactor(&[1, 2], MockRouter::new());
        interactor.activate();

        interactor.on_enrichment_resolved(Ok(vec![product(1), product(1), product(9)]));

        assert_eq!(view.models()[1].carousel_items().len(), 3);
    }

    #[test]
    fn test_enrichment_failure_shows_one_error_and_keeps_state() {
        let mut router = MockRouter::new();
        router.expect_show_error_notification().times(1).return_const(());
        let (mut interactor, view) = interactor(&[1, 2], router);
        interactor.activate();

        interactor.on_enrichment_resolved(Err(EnrichmentError::transport("timeout")));

        assert!(interactor.state().enriched_products().is_empty());
        assert_eq!(view.models().len(), 1, "failure must not republish");
    }

    #[test]
    fn test_back_dismisses() {
        let mut router = MockRouter::new();
        router.expect_dismiss().times(1).return_const(());
        let (interactor, _) = interactor(&[1], router);

        interactor.on_back_requested();
    }

    #[test]
    fn test_product_selection_resolves_against_review_ids() {
        let mut router = MockRouter::new();
        router
            .expect_open_product()
            .with(eq(ProductId::new(20)), eq("Acme"))
            .times(1)
            .return_const(());
        let (mut interactor, _) = interactor(&[10, 20, 30], router);

        // Enriched list order must not matter for selection
        interactor.on_enrichment_resolved(Ok(vec![product(30), product(20), product(10)]));
        interactor.on_product_selected(1);
    }

    #[test]
    fn test_product_selection_without_brand_uses_empty_context() {
        let mut router = MockRouter::new();
        router
            .expect_open_product()
            .with(eq(ProductId::new(5)), eq(""))
            .times(1)
            .return_const(());
        let presenter = ReviewPresenter::new(
            RecordingView::default(),
            ReviewMapper::default(),
            "Products",
        );
        let interactor =
            ReviewInteractor::new(SessionState::new(source(&[5], None)), presenter, router);

        interactor.on_product_selected(0);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut router = MockRouter::new();
        router.expect_open_product().never();
        let (interactor, _) = interactor(&[10, 20, 30], router);

        interactor.on_product_selected(3);
        interactor.on_product_selected(-1);
        interactor.on_product_selected(isize::MAX);
    }

    #[test]
    fn test_video_play_forwards_media_url() {
        let mut router = MockRouter::new();
        router
            .expect_present_video_overlay()
            .with(eq("https://cdn.example/review.m3u8"))
            .times(1)
            .return_const(());
        let (interactor, _) = interactor(&[1], router);

        interactor.on_video_play_requested();
    }
}
