mod aggregation_gateway;

pub use aggregation_gateway::{AggregationGateway, ClientWindowQuery, StatisticsQuery};
