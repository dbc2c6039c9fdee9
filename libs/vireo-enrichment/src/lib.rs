//! # Vireo Enrichment Adapter
//!
//! HTTP implementation of the `EnrichmentClient` port defined in
//! `vireo-domain`. Owns the wire format, the request timeout and the mapping
//! of transport errors into domain errors.

pub mod infrastructure;

pub use infrastructure::{HttpEnrichmentClient, HttpEnrichmentConfig};
