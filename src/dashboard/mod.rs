//! Dashboard landing screen: aggregate counts and the latest orders.

mod service;

pub use service::{DashboardMetrics, DashboardService, RECENT_ORDER_LIMIT, RecentOrder};
