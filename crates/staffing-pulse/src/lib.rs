//! Weekly workforce vacancy tracking: capture-sheet ingest, compliance
//! evaluation against national targets, and dashboard rollups by region.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod ingest;
pub mod telemetry;
