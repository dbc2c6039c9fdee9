//! Presentation layer: state → view model → rendering surface

mod mapper;
#[allow(clippy::module_inception)]
mod presenter;
mod view_model;

pub use mapper::{ReviewMapper, DEFAULT_CONTENT_INSET, SINGLE_PRODUCT_CONTENT_INSET};
#[cfg(test)]
pub use presenter::MockPresenter;
pub use presenter::{Presenter, ReviewPresenter};
pub use view_model::{CarouselItem, ReviewViewModel, Section, INFO_LINE_SEPARATOR};
