// Application layer - Export use case and repository seam
pub mod dashboard_repository;
pub mod export_service;
