//! Infrastructure adapters for the enrichment port

mod http_client;

pub use http_client::{
    parse_products, EnrichmentClientError, HttpEnrichmentClient, HttpEnrichmentConfig,
};
