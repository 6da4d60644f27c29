use crate::application::export_service::FailurePolicy;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = "./dashboards";

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub url: String,
    pub token: String,
    pub path: PathBuf,
    pub keep_going: bool,
}

impl ExportConfig {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        }
    }
}

/// Values supplied on the command line; unset ones fall back to defaults
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub path: Option<PathBuf>,
    pub keep_going: bool,
}

pub fn load_export_config(overrides: ConfigOverrides) -> anyhow::Result<ExportConfig> {
    let path = overrides.path.map(|p| p.to_string_lossy().into_owned());

    let settings = config::Config::builder()
        .set_default("url", "")?
        .set_default("token", "")?
        .set_default("path", DEFAULT_PATH)?
        .set_default("keep_going", false)?
        .set_override_option("url", overrides.url)?
        .set_override_option("token", overrides.token)?
        .set_override_option("path", path)?
        .set_override("keep_going", overrides.keep_going)?
        .build()?;

    Ok(settings.try_deserialize()?)
}
