pub mod filter;
pub mod pool;
pub mod types;

pub use filter::{IssueFilter, StatusFilter, ALL_STATUSES};
pub use pool::{ReportPool, SolveOutcome, UnassignedPool};
pub use types::*;
