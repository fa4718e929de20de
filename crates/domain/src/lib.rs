//! Dnsmon Domain Layer
pub mod client;
pub mod config;
pub mod errors;
pub mod filter_scope;
pub mod period;
pub mod statistics;
pub mod time_range;

pub use client::ClientCandidate;
pub use config::{CliOverrides, DashboardConfig};
pub use errors::DomainError;
pub use filter_scope::{FilterScope, ServerScope};
pub use period::Period;
pub use statistics::Statistics;
pub use time_range::TimeRange;
