//! Dashboard Settings
//! Fixed input location and listen address.
//!
//! The spreadsheet is looked up in the crate's own directory, not the
//! working directory, so the binary can be started from anywhere.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Spreadsheet shipped alongside the dashboard.
pub const DATA_FILE: &str = "CapitolHillTracker11721.xlsx";
/// Directory the data file is resolved against.
pub const DATA_DIR: &str = env!("CARGO_MANIFEST_DIR");
/// Worksheet holding the federal cases.
pub const SHEET_NAME: &str = "Capitol Hill";
pub const DEFAULT_PORT: u16 = 8055;

/// Settings for one dashboard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub data_file: PathBuf,
    pub sheet_name: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_file: Path::new(DATA_DIR).join(DATA_FILE),
            sheet_name: SHEET_NAME.to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl DashboardSettings {
    /// Address the page is served on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serves_on_local_port_8055() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.socket_addr().to_string(), "127.0.0.1:8055");
        assert_eq!(settings.sheet_name, "Capitol Hill");
        assert!(settings.data_file.ends_with("CapitolHillTracker11721.xlsx"));
    }

    #[test]
    fn data_file_does_not_depend_on_working_directory() {
        let settings = DashboardSettings::default();
        assert!(settings.data_file.is_absolute());
        assert_eq!(settings.data_file.parent(), Some(Path::new(DATA_DIR)));
    }
}
