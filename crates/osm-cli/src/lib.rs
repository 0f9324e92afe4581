//! CLI library components for the OSM address auditor.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
