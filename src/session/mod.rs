pub mod lifecycle;
pub mod state;
pub mod store;

pub use lifecycle::{resolve, SESSION_ID_KEY};
pub use state::{DashboardSession, DepartmentsView, IssueView};
pub use store::SessionStore;
