//! Catalog and image locations derived from product identifiers

use crate::review::ids::ProductId;

/// Hosts used to address product cards and product images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLinks {
    /// Catalog host, without trailing slash
    pub catalog_host: String,
    /// Image CDN host, without trailing slash
    pub image_host: String,
}

impl Default for ProductLinks {
    fn default() -> Self {
        Self {
            catalog_host: "https://www.wildberries.ru".to_string(),
            image_host: "https://images.wbstatic.net".to_string(),
        }
    }
}

impl ProductLinks {
    /// Create links for the given hosts; trailing slashes are dropped
    pub fn new(catalog_host: impl Into<String>, image_host: impl Into<String>) -> Self {
        Self {
            catalog_host: catalog_host.into().trim_end_matches('/').to_string(),
            image_host: image_host.into().trim_end_matches('/').to_string(),
        }
    }

    /// Location of the product card screen for `id`
    pub fn product_card_url(&self, id: ProductId) -> String {
        format!("{}/catalog/{}/detail.aspx", self.catalog_host, id)
    }

    /// Preview image for an image key; images are sharded by key / 10000
    pub fn image_url(&self, image_key: u64) -> String {
        format!(
            "{}/c246x328/new/{}0000/{}-1.jpg",
            self.image_host,
            image_key / 10_000,
            image_key
        )
    }
}
