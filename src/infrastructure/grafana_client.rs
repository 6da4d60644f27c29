// Grafana HTTP API client
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::{DashboardBody, DashboardSummary};
use crate::error::{ExportError, Result};
use async_trait::async_trait;

const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
pub struct GrafanaClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GrafanaClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated GET, decoding the full body with `decode`
    async fn get<T>(
        &self,
        path: &str,
        decode: impl FnOnce(&[u8]) -> serde_json::Result<T>,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::info!("Requesting GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ExportError::Network { url: url.clone(), source })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = truncate_body(response.text().await.unwrap_or_default());
            return Err(ExportError::Status { url, status, body });
        }

        let raw = response
            .bytes()
            .await
            .map_err(|source| ExportError::Network { url: url.clone(), source })?;

        decode(&raw[..]).map_err(|source| ExportError::Decode { url, source })
    }
}

/// Keep at most `MAX_ERROR_BODY` bytes of an error response, cut on a char boundary
fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}

#[async_trait]
impl DashboardRepository for GrafanaClient {
    async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>> {
        let summaries: Vec<DashboardSummary> = self
            .get("/api/search", |raw| serde_json::from_slice(raw))
            .await?;
        tracing::debug!("Search returned {} dashboards", summaries.len());
        Ok(summaries)
    }

    async fn fetch_dashboard(&self, summary: &DashboardSummary) -> Result<DashboardBody> {
        let path = format!("/api/dashboards/{}", summary.uri);
        let body = self.get(&path, DashboardBody::from_slice).await?;
        tracing::debug!("Fetched dashboard {} (slug {:?})", summary.id, body.slug);
        Ok(body)
    }
}
