//! HTTP Enrichment Client Implementation
//!
//! This module implements the `EnrichmentClient` port on top of `reqwest`.
//! It sends one batch request per call and converts every transport or
//! payload problem into a domain `EnrichmentError`.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, info_span, Instrument};
use vireo_domain::{
    ports::EnrichmentClient,
    review::{EnrichedProduct, EnrichmentError, ProductId},
};

/// Configuration for the HTTP enrichment client
#[derive(Debug, Clone)]
pub struct HttpEnrichmentConfig {
    /// Base URL of the enrichment service, without trailing slash
    pub base_url: String,
    /// Whole-request timeout (default: 30s)
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpEnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("vireo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Adapter-level failures, collapsed into `EnrichmentError` at the port
#[derive(Error, Debug)]
pub enum EnrichmentClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Enrichment service returned status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Response has no products field")]
    MissingProducts,
}

impl From<EnrichmentClientError> for EnrichmentError {
    fn from(err: EnrichmentClientError) -> Self {
        match err {
            EnrichmentClientError::Build(_)
            | EnrichmentClientError::Transport(_)
            | EnrichmentClientError::Status(_) => EnrichmentError::transport(err.to_string()),
            EnrichmentClientError::Decode(_) | EnrichmentClientError::MissingProducts => {
                EnrichmentError::malformed_response(err.to_string())
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrichmentParams<'a> {
    product_ids: &'a [String],
}

#[derive(Deserialize)]
struct EnrichmentResponse {
    products: Option<Vec<ProductRecord>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: u64,
    brand_name: String,
    name: String,
    sale_price_string: String,
    #[serde(default)]
    is_adult: bool,
    #[serde(rename = "cod1S")]
    image_key: u64,
}

impl From<ProductRecord> for EnrichedProduct {
    fn from(record: ProductRecord) -> Self {
        EnrichedProduct::new(
            ProductId::new(record.id),
            record.brand_name,
            record.name,
            record.sale_price_string,
            record.is_adult,
            record.image_key,
        )
    }
}

/// Decode an enrichment response body, keeping the record order
pub fn parse_products(body: &[u8]) -> Result<Vec<EnrichedProduct>, EnrichmentClientError> {
    let response: EnrichmentResponse = serde_json::from_slice(body)
        .map_err(|err| EnrichmentClientError::Decode(err.to_string()))?;

    let records = response
        .products
        .ok_or(EnrichmentClientError::MissingProducts)?;

    Ok(records.into_iter().map(EnrichedProduct::from).collect())
}

/// reqwest-based implementation of the EnrichmentClient port
///
/// ## Wire format
///
/// `POST {base_url}/enrichment` with `{"productIds": ["1", "2"]}`; the
/// response must carry a `products` array of camelCase records.
#[derive(Clone)]
pub struct HttpEnrichmentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpEnrichmentClient {
    /// Create a new HTTP enrichment client
    ///
    /// # Errors
    ///
    /// Returns `EnrichmentClientError::Build` if the TLS backend cannot be
    /// initialized
    pub fn new(config: HttpEnrichmentConfig) -> Result<Self, EnrichmentClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|err| EnrichmentClientError::Build(err.to_string()))?;

        let endpoint = format!("{}/enrichment", config.base_url.trim_end_matches('/'));
        info!(endpoint = %endpoint, "Initializing HttpEnrichmentClient");

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(
        http: reqwest::Client,
        endpoint: String,
        ids: Vec<String>,
    ) -> Result<Vec<EnrichedProduct>, EnrichmentClientError> {
        let response = http
            .post(&endpoint)
            .json(&EnrichmentParams { product_ids: &ids })
            .send()
            .await
            .map_err(|err| EnrichmentClientError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentClientError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| EnrichmentClientError::Transport(err.to_string()))?;

        parse_products(&body)
    }
}

impl EnrichmentClient for HttpEnrichmentClient {
    fn fetch_enriched(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<EnrichedProduct>, EnrichmentError>> + Send {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let ids = ids.to_vec();
        let span = info_span!("fetch_enriched", batch_size = ids.len());

        async move {
            debug!(endpoint = %endpoint, "Requesting product enrichment");

            match Self::request(http, endpoint, ids).await {
                Ok(products) => {
                    info!(product_count = products.len(), "Enrichment succeeded");
                    Ok(products)
                }
                Err(err) => {
                    error!(error = %err, "Enrichment failed");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
    }
}
