//! Capitol Hill Siege case dashboard.
//!
//! Loads the federal case spreadsheet, summarizes cases by state and by
//! gender/age at arrest, and serves both summaries as interactive charts.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod web;

pub use config::DashboardSettings;
pub use dashboard::Dashboard;
