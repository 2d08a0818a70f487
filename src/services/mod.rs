pub mod analysis_service;
pub mod chart_service;
