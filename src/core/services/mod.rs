pub mod dashboard_service;
pub mod metrics_service;
pub mod sales_service;

pub use dashboard_service::{DashboardService, DashboardView, PaceBar};
pub use metrics_service::{MetricsService, ProgressSplit, SalesMetrics, DEFAULT_WINDOW_DAYS};
pub use sales_service::SalesService;

#[cfg(test)]
mod tests;
