//! Domain entities for a video review session
//!
//! A [`ReviewSource`] describes the review as handed to the screen. It is
//! immutable for the whole session. [`EnrichedProduct`] records are produced
//! by the enrichment port, and [`SessionState`] ties both together under the
//! interactor's exclusive ownership.

use serde::{Deserialize, Serialize};

use crate::review::error::{Result, ReviewError};
use crate::review::ids::ProductId;

/// Immutable description of one video review
///
/// Guaranteed to reference at least one product. A review referencing
/// exactly one product puts the screen in single-product mode.
///
/// # Example
///
/// ```rust
/// use vireo_domain::review::{ProductId, ReviewSource};
///
/// let source = ReviewSource::builder("https://cdn.example/v.m3u8", vec![ProductId::new(42)])
///     .title("Unboxing")
///     .build()
///     .unwrap();
/// assert_eq!(source.product_ids().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ReviewSourceRecord")]
pub struct ReviewSource {
    media_url: String,
    thumbnail_url: String,
    title: String,
    description: Option<String>,
    brand_name: Option<String>,
    view_count: String,
    date_text: String,
    product_ids: Vec<ProductId>,
}

/// Wire shape of a review; validated into [`ReviewSource`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewSourceRecord {
    media_url: String,
    #[serde(default)]
    thumbnail_url: String,
    #[serde(default)]
    title: String,
    description: Option<String>,
    brand_name: Option<String>,
    #[serde(default)]
    view_count: String,
    #[serde(default)]
    date_text: String,
    product_ids: Vec<ProductId>,
}

impl TryFrom<ReviewSourceRecord> for ReviewSource {
    type Error = ReviewError;

    fn try_from(record: ReviewSourceRecord) -> Result<Self> {
        ReviewSource::builder(record.media_url, record.product_ids)
            .thumbnail_url(record.thumbnail_url)
            .title(record.title)
            .description(record.description)
            .brand_name(record.brand_name)
            .view_count(record.view_count)
            .date_text(record.date_text)
            .build()
    }
}

impl ReviewSource {
    /// Start building a review from its two required parts
    pub fn builder(
        media_url: impl Into<String>,
        product_ids: Vec<ProductId>,
    ) -> ReviewSourceBuilder {
        ReviewSourceBuilder {
            source: ReviewSource {
                media_url: media_url.into(),
                thumbnail_url: String::new(),
                title: String::new(),
                description: None,
                brand_name: None,
                view_count: String::new(),
                date_text: String::new(),
                product_ids,
            },
        }
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn brand_name(&self) -> Option<&str> {
        self.brand_name.as_deref()
    }

    /// Display-ready view counter, e.g. "12K views"
    pub fn view_count(&self) -> &str {
        &self.view_count
    }

    /// Display-ready publication date, e.g. "2 days ago"
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Referenced products, in the order the review lists them (never empty)
    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }
}

/// Builder for [`ReviewSource`]; `build` enforces the non-empty id invariant
#[derive(Debug, Clone)]
pub struct ReviewSourceBuilder {
    source: ReviewSource,
}

impl ReviewSourceBuilder {
    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.source.thumbnail_url = url.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.source.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.source.description = description;
        self
    }

    pub fn brand_name(mut self, brand_name: Option<String>) -> Self {
        self.source.brand_name = brand_name;
        self
    }

    pub fn view_count(mut self, view_count: impl Into<String>) -> Self {
        self.source.view_count = view_count.into();
        self
    }

    pub fn date_text(mut self, date_text: impl Into<String>) -> Self {
        self.source.date_text = date_text.into();
        self
    }

    /// Finish the review
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::EmptyProductIds` if no product is referenced
    pub fn build(self) -> Result<ReviewSource> {
        if self.source.product_ids.is_empty() {
            return Err(ReviewError::EmptyProductIds);
        }
        Ok(self.source)
    }
}

/// One product resolved by the enrichment port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    id: ProductId,
    brand_name: String,
    name: String,
    sale_price: String,
    is_adult: bool,
    image_key: u64,
}

impl EnrichedProduct {
    pub fn new(
        id: ProductId,
        brand_name: impl Into<String>,
        name: impl Into<String>,
        sale_price: impl Into<String>,
        is_adult: bool,
        image_key: u64,
    ) -> Self {
        Self {
            id,
            brand_name: brand_name.into(),
            name: name.into(),
            sale_price: sale_price.into(),
            is_adult,
            image_key,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formatted sale price, ready for display
    pub fn sale_price(&self) -> &str {
        &self.sale_price
    }

    /// Whether the product image must be blurred until the user opts in
    pub fn is_adult(&self) -> bool {
        self.is_adult
    }

    /// Key used to address the product's images
    pub fn image_key(&self) -> u64 {
        self.image_key
    }
}

/// Mutable state of one review session
///
/// Owned by exactly one interactor. `enriched_products` starts empty and is
/// only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    review_source: ReviewSource,
    enriched_products: Vec<EnrichedProduct>,
}

impl SessionState {
    /// Create the initial state for a review: nothing enriched yet
    pub fn new(review_source: ReviewSource) -> Self {
        Self {
            review_source,
            enriched_products: Vec::new(),
        }
    }

    pub fn review_source(&self) -> &ReviewSource {
        &self.review_source
    }

    pub fn enriched_products(&self) -> &[EnrichedProduct] {
        &self.enriched_products
    }

    /// Single-product mode is decided by the review, not by what enrichment returned
    pub fn is_single_product_mode(&self) -> bool {
        self.review_source.product_ids.len() == 1
    }

    /// Replace the enriched products, keeping the given order
    pub(crate) fn replace_enriched_products(&mut self, products: Vec<EnrichedProduct>) {
        self.enriched_products = products;
    }
}
