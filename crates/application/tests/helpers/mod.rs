#![allow(unused_imports)]

pub mod mock_gateway;

pub use mock_gateway::{sample_statistics, Gate, MockAggregationGateway};
