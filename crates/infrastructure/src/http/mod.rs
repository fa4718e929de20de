mod aggregation_client;

pub use aggregation_client::RestAggregationGateway;
