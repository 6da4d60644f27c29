// Dashboard domain model
use serde::Deserialize;
use serde_json::value::RawValue;

/// One entry of the search listing
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSummary {
    pub id: i64,
    pub title: String,
    pub uri: String,
    #[allow(dead_code)]
    #[serde(rename = "type", default)]
    pub kind: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub tags: Vec<String>,
    #[allow(dead_code)]
    #[serde(rename = "isStarred", default)]
    pub is_starred: bool,
}

impl DashboardSummary {
    /// File name the dashboard is exported under.
    ///
    /// Lossy: titles differing only in case or in space vs underscore map
    /// to the same name, and the later export overwrites the earlier one.
    pub fn file_name(&self) -> String {
        format!("{}.json", Self::slugify(&self.title))
    }

    fn slugify(title: &str) -> String {
        title.to_lowercase().replace(' ', "_")
    }
}

#[derive(Debug, Default, Deserialize)]
struct DashboardMeta {
    #[serde(default)]
    slug: String,
}

#[derive(Debug, Deserialize)]
struct DashboardEnvelope {
    #[serde(default)]
    meta: DashboardMeta,
    dashboard: Box<RawValue>,
}

/// Full dashboard as returned by the per-dashboard endpoint.
/// The definition itself is kept byte-for-byte as received.
#[derive(Debug, Clone)]
pub struct DashboardBody {
    pub slug: String,
    dashboard: Box<RawValue>,
}

impl DashboardBody {
    pub fn from_slice(raw: &[u8]) -> serde_json::Result<Self> {
        let envelope: DashboardEnvelope = serde_json::from_slice(raw)?;
        Ok(Self {
            slug: envelope.meta.slug,
            dashboard: envelope.dashboard,
        })
    }

    pub fn payload(&self) -> &[u8] {
        self.dashboard.get().as_bytes()
    }
}
