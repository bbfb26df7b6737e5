mod overview;

pub use overview::{DashboardService, DashboardSummary};
