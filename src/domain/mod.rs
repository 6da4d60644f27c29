// Domain layer - Dashboard models
pub mod dashboard;
