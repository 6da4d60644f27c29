// Filesystem output for exported dashboards
use crate::domain::dashboard::{DashboardBody, DashboardSummary};
use crate::error::{ExportError, Result};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

#[derive(Debug, Clone)]
pub struct DashboardStore {
    root: PathBuf,
}

impl DashboardStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory if missing.
    /// Failure is only logged; an unusable directory surfaces on the first write.
    pub async fn ensure_root(&self) {
        if let Err(e) = tokio::fs::create_dir_all(&self.root).await {
            tracing::warn!("Could not create {}: {}", self.root.display(), e);
        }
    }

    /// `<root>/<file name>`. Appended rather than joined so that a title
    /// starting with `/` still lands under `root`.
    pub fn path_for(&self, summary: &DashboardSummary) -> PathBuf {
        let mut path = self.root.clone().into_os_string();
        path.push(MAIN_SEPARATOR_STR);
        path.push(summary.file_name());
        PathBuf::from(path)
    }

    /// Write the raw dashboard definition, replacing any existing file
    pub async fn write(
        &self,
        summary: &DashboardSummary,
        body: &DashboardBody,
    ) -> Result<PathBuf> {
        let path = self.path_for(summary);
        tracing::info!("Writing dashboard to {}", path.display());

        tokio::fs::write(&path, body.payload())
            .await
            .map_err(|source| ExportError::Filesystem { path: path.clone(), source })?;

        Ok(path)
    }
}
