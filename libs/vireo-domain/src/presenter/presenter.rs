use tracing::debug;

use crate::ports::ReviewView;
use crate::presenter::mapper::ReviewMapper;
use crate::review::SessionState;

/// Receiver of fresh session state
///
/// The interactor calls `update` after every state change.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter: Send {
    fn update(&self, state: &SessionState);
}

/// Presenter pushing mapped view models to a [`ReviewView`]
pub struct ReviewPresenter<V> {
    view: V,
    mapper: ReviewMapper,
    products_title: String,
}

impl<V> ReviewPresenter<V>
where
    V: ReviewView,
{
    /// Create a presenter; `products_title` is the already localized carousel title
    pub fn new(view: V, mapper: ReviewMapper, products_title: impl Into<String>) -> Self {
        Self {
            view,
            mapper,
            products_title: products_title.into(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V> Presenter for ReviewPresenter<V>
where
    V: ReviewView,
{
    fn update(&self, state: &SessionState) {
        let model = self.mapper.map_to_view_model(state, &self.products_title);
        debug!(
            carousel_items = model.carousel_items().len(),
            single_product = model.is_single_product_mode,
            "Publishing review view model"
        );
        self.view.set_model(model);
        self.view.reload();
    }
}
