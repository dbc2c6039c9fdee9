//! Renderable snapshot of a review screen

/// Complete, immutable description of what the review screen shows
///
/// A new value is produced for every state change; nothing patches an
/// existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewViewModel {
    pub is_single_product_mode: bool,
    /// Always `VideoPreview`, `Description`, `ProductsCarousel`, in that order
    pub sections: Vec<Section>,
    /// Bottom inset of the scrolling content, in points
    pub content_inset_bottom: f64,
}

impl ReviewViewModel {
    /// Items of the products carousel, empty until enrichment succeeds
    pub fn carousel_items(&self) -> &[CarouselItem] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::ProductsCarousel { items, .. } => Some(items.as_slice()),
                Section::VideoPreview { .. } | Section::Description { .. } => None,
            })
            .unwrap_or(&[])
    }
}

/// One block of the review screen
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    VideoPreview {
        media_url: String,
        thumbnail_url: String,
    },
    Description {
        title: String,
        body_text: String,
        /// View count and date joined by [`INFO_LINE_SEPARATOR`]
        info_line: String,
        brand_name: String,
    },
    ProductsCarousel {
        title: String,
        items: Vec<CarouselItem>,
    },
}

/// Separator between view count and date in the description info line
pub const INFO_LINE_SEPARATOR: &str = " • ";

/// One product tile in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub image_url: String,
    /// Brand name
    pub title: String,
    /// Product name
    pub subtitle: String,
    /// Formatted sale price
    pub caption: String,
    pub needs_content_blur: bool,
}
