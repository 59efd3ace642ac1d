//! Dashboard assembly
//! Runs load -> summarize -> chart -> render once and keeps the result.

use crate::charts::ChartPlotter;
use crate::config::DashboardSettings;
use crate::data::{CaseLoader, CaseSummary, DataProcessor};
use crate::web;
use anyhow::{Context, Result};
use tracing::info;

/// Everything computed at startup.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: CaseSummary,
    pub page: String,
}

impl Dashboard {
    /// Build the dashboard from the configured spreadsheet.
    pub fn build(settings: &DashboardSettings) -> Result<Self> {
        let cases = CaseLoader::from_settings(settings).with_context(|| {
            format!(
                "loading sheet '{}' from {}",
                settings.sheet_name,
                settings.data_file.display()
            )
        })?;

        let summary = DataProcessor::summarize(&cases).context("summarizing cases")?;
        info!(
            cases = summary.total_cases,
            states = summary.states.len(),
            gender_age_groups = summary.gender_ages.len(),
            "case summaries ready"
        );

        let map = ChartPlotter::state_map(&summary.states);
        let bar = ChartPlotter::age_gender_bars(&summary.gender_ages);
        let page = web::render_page(&summary, &map, &bar).context("rendering dashboard page")?;
        info!(bytes = page.len(), "dashboard page rendered");

        Ok(Self { summary, page })
    }

    /// Serve the page on the configured address until shutdown.
    pub async fn serve(self, settings: &DashboardSettings) -> Result<()> {
        web::serve(settings.socket_addr(), self.page)
            .await
            .context("serving dashboard")
    }
}
