use crate::license::{DirectoryTextProvider, License, LicenseResolver};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    #[diagnostic(code(noticesdialog::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {}", path.display())]
    #[diagnostic(code(noticesdialog::config::yaml))]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML config {}", path.display())]
    #[diagnostic(code(noticesdialog::config::toml))]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for noticesdialog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding license texts as `<key>.txt`
    pub license_texts: Option<PathBuf>,

    /// Extra licenses to recognize in <license> elements
    pub licenses: Vec<LicenseEntry>,

    /// Report configuration
    pub report: ReportConfig,
}

/// A license registered through configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseEntry {
    /// Identifier used in notices files
    pub key: String,

    /// Display name
    pub name: String,

    pub url: String,

    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Include license summary text in output
    pub show_summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            show_summary: false,
        }
    }
}

impl LicenseEntry {
    pub fn to_license(&self) -> License {
        let name = if self.name.is_empty() {
            self.key.clone()
        } else {
            self.name.clone()
        };

        License::Custom {
            name,
            url: self.url.clone(),
            version: self.version.clone(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_yaml = |contents: &str| -> Result<Self, ConfigError> {
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        };
        let parse_toml = |contents: &str| -> Result<Self, ConfigError> {
            toml::from_str(contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => parse_yaml(&contents),
            "toml" => parse_toml(&contents),
            // Try YAML first, then TOML
            _ => parse_yaml(&contents).or_else(|_| parse_toml(&contents)),
        }
    }

    /// Try to load configuration from default locations in `dir`
    pub fn from_default_locations(dir: &Path) -> Result<Self, ConfigError> {
        let default_names = [
            ".notices.yml",
            ".notices.yaml",
            ".notices.toml",
            "notices.yml",
            "notices.yaml",
            "notices.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Build a resolver that knows the configured licenses
    pub fn resolver(&self) -> LicenseResolver {
        let mut resolver = LicenseResolver::new();
        for entry in self.licenses.iter().filter(|e| !e.key.trim().is_empty()) {
            resolver.register(&entry.key, entry.to_license());
        }
        resolver
    }

    pub fn text_provider(&self) -> Option<DirectoryTextProvider> {
        self.license_texts.as_ref().map(DirectoryTextProvider::new)
    }
}
