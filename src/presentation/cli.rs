// Command-line arguments
use crate::infrastructure::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Export every dashboard from a Grafana server to local JSON files
#[derive(Parser, Debug, Clone)]
#[command(name = "dashboard-export")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export Grafana dashboards to local JSON files")]
pub struct CliArgs {
    /// Grafana URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Grafana API token, sent as a bearer token
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Path to save dashboards [default: ./dashboards]
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Keep exporting the remaining dashboards after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Log filter directive (e.g. info, debug, dashboard_export=trace)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl CliArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            token: self.token.clone(),
            path: self.path.clone(),
            keep_going: self.keep_going,
        }
    }
}
