//! Map-backed [`Localizer`]

use std::collections::HashMap;

use crate::builder::PRODUCTS_TITLE_KEY;
use crate::ports::Localizer;
use crate::router::GENERIC_ERROR_KEY;

/// Localizer serving a fixed table of strings
///
/// Unknown keys resolve to the key itself so a missing translation is visible
/// rather than blank.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    strings: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }

    /// English strings for every key the review module uses
    pub fn english() -> Self {
        Self::default()
            .with(PRODUCTS_TITLE_KEY, "Products from the video")
            .with(GENERIC_ERROR_KEY, "Something went wrong. Please try again later")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl Localizer for StaticLocalizer {
    fn localized(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
