//! Siege Dashboard - Capitol Hill case summaries served as interactive charts

use anyhow::Result;
use siege_dashboard::{Dashboard, DashboardSettings};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let settings = DashboardSettings::default();
    info!(?settings, "startup");

    // Everything is computed before the runtime starts serving
    let dashboard = Dashboard::build(&settings)?;

    tokio::runtime::Runtime::new()?.block_on(dashboard.serve(&settings))
}
