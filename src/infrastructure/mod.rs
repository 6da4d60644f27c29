// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod dashboard_store;
pub mod grafana_client;
