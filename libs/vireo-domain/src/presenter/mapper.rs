//! Mapping from session state to view model
//!
//! Pure code: no I/O, no logging, same input always gives the same output.

use crate::presenter::view_model::{CarouselItem, ReviewViewModel, Section, INFO_LINE_SEPARATOR};
use crate::review::{EnrichedProduct, ProductLinks, SessionState};

/// Bottom inset when the persistent "open product" button is shown
/// (44pt button + 8pt margin)
pub const SINGLE_PRODUCT_CONTENT_INSET: f64 = 52.0;

/// Bottom inset in multi-product mode
pub const DEFAULT_CONTENT_INSET: f64 = 32.0;

/// Builds [`ReviewViewModel`] values from [`SessionState`]
#[derive(Debug, Clone, Default)]
pub struct ReviewMapper {
    links: ProductLinks,
}

impl ReviewMapper {
    pub fn new(links: ProductLinks) -> Self {
        Self { links }
    }

    /// Map the full state into a fresh view model
    ///
    /// The three sections are always present; the carousel is simply empty
    /// before enrichment succeeds.
    pub fn map_to_view_model(
        &self,
        state: &SessionState,
        localized_products_title: &str,
    ) -> ReviewViewModel {
        let is_single_product_mode = state.is_single_product_mode();

        ReviewViewModel {
            is_single_product_mode,
            sections: vec![
                Self::video_preview(state),
                Self::description(state),
                self.products_carousel(state, localized_products_title),
            ],
            content_inset_bottom: if is_single_product_mode {
                SINGLE_PRODUCT_CONTENT_INSET
            } else {
                DEFAULT_CONTENT_INSET
            },
        }
    }

    fn video_preview(state: &SessionState) -> Section {
        let source = state.review_source();
        Section::VideoPreview {
            media_url: source.media_url().to_string(),
            thumbnail_url: source.thumbnail_url().to_string(),
        }
    }

    fn description(state: &SessionState) -> Section {
        let source = state.review_source();
        Section::Description {
            title: source.title().to_string(),
            body_text: source.description().unwrap_or_default().to_string(),
            // Empty parts still get the separator.
            info_line: format!(
                "{}{}{}",
                source.view_count(),
                INFO_LINE_SEPARATOR,
                source.date_text()
            ),
            brand_name: source.brand_name().unwrap_or_default().to_string(),
        }
    }

    fn products_carousel(&self, state: &SessionState, title: &str) -> Section {
        Section::ProductsCarousel {
            title: title.to_string(),
            items: state
                .enriched_products()
                .iter()
                .map(|product| self.carousel_item(product))
                .collect(),
        }
    }

    fn carousel_item(&self, product: &EnrichedProduct) -> CarouselItem {
        CarouselItem {
            image_url: self.links.image_url(product.image_key()),
            title: product.brand_name().to_string(),
            subtitle: product.name().to_string(),
            caption: product.sale_price().to_string(),
            needs_content_blur: product.is_adult(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{ProductId, ReviewSource};

    fn source_with(ids: &[u64], view_count: &str, date_text: &str) -> ReviewSource {
        ReviewSource::builder(
            "https://cdn.example/review.m3u8",
            ids.iter().copied().map(ProductId::new).collect(),
        )
        .thumbnail_url("https://cdn.example/review.jpg")
        .title("Autumn jacket review")
        .description(Some("Warm and light".to_string()))
        .brand_name(Some("Acme".to_string()))
        .view_count(view_count)
        .date_text(date_text)
        .build()
        .unwrap()
    }

    fn product(id: u64, adult: bool) -> EnrichedProduct {
        EnrichedProduct::new(
            ProductId::new(id),
            format!("Brand {id}"),
            format!("Item {id}"),
            format!("{id} ₽"),
            adult,
            id,
        )
    }

    fn info_line(model: &ReviewViewModel) -> &str {
        match &model.sections[1] {
            Section::Description { info_line, .. } => info_line,
            other => panic!("expected description, got {other:?}"),
        }
    }

    #[test]
    fn test_sections_are_in_fixed_order() {
        let state = SessionState::new(source_with(&[1, 2], "1 view", "today"));
        let model = ReviewMapper::default().map_to_view_model(&state, "Products");

        assert_eq!(model.sections.len(), 3);
        assert!(matches!(model.sections[0], Section::VideoPreview { .. }));
        assert!(matches!(model.sections[1], Section::Description { .. }));
        assert!(matches!(model.sections[2], Section::ProductsCarousel { .. }));
    }

    #[test]
    fn test_single_product_mode_uses_larger_inset() {
        let state = SessionState::new(source_with(&[1], "", ""));
        let model = ReviewMapper::default().map_to_view_model(&state, "Products");

        assert!(model.is_single_product_mode);
        assert_eq!(model.content_inset_bottom, SINGLE_PRODUCT_CONTENT_INSET);
    }

    #[test]
    fn test_multi_product_mode_uses_default_inset() {
        let state = SessionState::new(source_with(&[1, 2, 3], "", ""));
        let model = ReviewMapper::default().map_to_view_model(&state, "Products");

        assert!(!model.is_single_product_mode);
        assert_eq!(model.content_inset_bottom, DEFAULT_CONTENT_INSET);
    }

    #[test]
    fn test_info_line_joins_count_and_date() {
        let state = SessionState::new(source_with(&[1], "12K views", "2 days ago"));
        let model = ReviewMapper::default().map_to_view_model(&state, "Products");

        assert_eq!(info_line(&model), "12K views • 2 days ago");
    }

    #[test]
    fn test_info_line_keeps_separator_for_empty_parts() {
        let mapper = ReviewMapper::default();

        let no_count = SessionState::new(source_with(&[1], "", "2 days ago"));
        assert_eq!(
            info_line(&mapper.map_to_view_model(&no_count, "P")),
            " • 2 days ago"
        );

        let no_date = SessionState::new(source_with(&[1], "12K views", ""));
        assert_eq!(
            info_line(&mapper.map_to_view_model(&no_date, "P")),
            "12K views • "
        );
    }

    #[test]
    fn test_missing_optional_text_maps_to_empty_strings() {
        let source = ReviewSource::builder("https://cdn.example/v.m3u8", vec![ProductId::new(1)])
            .build()
            .unwrap();
        let model = ReviewMapper::default().map_to_view_model(&SessionState::new(source), "P");

        match &model.sections[1] {
            Section::Description {
                body_text,
                brand_name,
                ..
            } => {
                assert_eq!(body_text, "");
                assert_eq!(brand_name, "");
            }
            other => panic!("expected description, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_carousel_before_enrichment() {
        let state = SessionState::new(source_with(&[1, 2], "", ""));
        let model = ReviewMapper::default().map_to_view_model(&state, "Products from video");

        match &model.sections[2] {
            Section::ProductsCarousel { title, items } => {
                assert_eq!(title, "Products from video");
                assert!(items.is_empty());
            }
            other => panic!("expected carousel, got {other:?}"),
        }
    }

    #[test]
    fn test_carousel_projects_products_in_order() {
        let links = ProductLinks::new("https://shop.example", "https://img.example");
        let mut state = SessionState::new(source_with(&[10, 20, 30], "", ""));
        state.replace_enriched_products(vec![product(30, true), product(10, false), product(20, false)]);

        let model = ReviewMapper::new(links.clone()).map_to_view_model(&state, "P");
        let items = model.carousel_items();

        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            CarouselItem {
                image_url: links.image_url(30),
                title: "Brand 30".to_string(),
                subtitle: "Item 30".to_string(),
                caption: "30 ₽".to_string(),
                needs_content_blur: true,
            }
        );
        assert_eq!(items[1].title, "Brand 10");
        assert_eq!(items[2].title, "Brand 20");
        assert!(!items[1].needs_content_blur);
    }

    #[test]
    fn test_video_preview_carries_urls() {
        let state = SessionState::new(source_with(&[1], "", ""));
        let model = ReviewMapper::default().map_to_view_model(&state, "P");

        assert_eq!(
            model.sections[0],
            Section::VideoPreview {
                media_url: "https://cdn.example/review.m3u8".to_string(),
                thumbnail_url: "https://cdn.example/review.jpg".to_string(),
            }
        );
    }
}
