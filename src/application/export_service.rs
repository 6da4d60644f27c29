// Export service - Use case for writing every dashboard to disk
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::DashboardSummary;
use crate::error::{ExportError, Result};
use crate::infrastructure::dashboard_store::DashboardStore;
use std::path::PathBuf;
use std::sync::Arc;

/// What to do when a single dashboard cannot be fetched or written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run on the first failure
    #[default]
    Abort,
    /// Record the failure and move on to the next dashboard
    Continue,
}

#[derive(Debug)]
pub struct ExportFailure {
    pub title: String,
    pub error: ExportError,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Clone)]
pub struct ExportService {
    repository: Arc<dyn DashboardRepository>,
    store: DashboardStore,
    policy: FailurePolicy,
}

impl ExportService {
    pub fn new(
        repository: Arc<dyn DashboardRepository>,
        store: DashboardStore,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            repository,
            store,
            policy,
        }
    }

    /// Export every listed dashboard, one at a time, in listing order.
    ///
    /// A failed listing is always fatal and leaves the output directory
    /// untouched. Per-dashboard failures follow the configured policy;
    /// files written before a failure stay on disk.
    pub async fn run(&self) -> Result<ExportReport> {
        let summaries = self.repository.list_dashboards().await?;
        tracing::info!("Found {} dashboards", summaries.len());

        self.store.ensure_root().await;

        let mut report = ExportReport::default();
        for summary in &summaries {
            match self.export_one(summary).await {
                Ok(path) => report.written.push(path),
                Err(e) if self.policy == FailurePolicy::Continue => {
                    tracing::warn!("Skipping dashboard {:?}: {}", summary.title, e);
                    report.failures.push(ExportFailure {
                        title: summary.title.clone(),
                        error: e,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            "Export finished: {} written, {} failed",
            report.written.len(),
            report.failures.len()
        );
        Ok(report)
    }

    async fn export_one(&self, summary: &DashboardSummary) -> Result<PathBuf> {
        let body = self.repository.fetch_dashboard(summary).await?;
        self.store.write(summary, &body).await
    }
}
