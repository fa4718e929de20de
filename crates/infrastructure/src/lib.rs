//! Dnsmon Infrastructure Layer
pub mod http;

pub use http::RestAggregationGateway;
