mod coordinator;
mod filter_state;
mod pending;

pub use coordinator::{StatsCoordinator, StatsView};
pub use filter_state::FilterState;
pub use pending::{ClientEditor, PendingSelection};
