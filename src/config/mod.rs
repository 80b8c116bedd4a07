mod loader;

pub use loader::{Config, ConfigError, LicenseEntry, ReportConfig};
