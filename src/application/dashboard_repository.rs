// Repository trait for dashboard access
use crate::domain::dashboard::{DashboardBody, DashboardSummary};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// List every dashboard, in the order the server returns them
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>>;

    /// Fetch the full definition of one listed dashboard
    async fn fetch_dashboard(&self, summary: &DashboardSummary) -> Result<DashboardBody>;
}
