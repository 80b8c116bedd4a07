// License text providers
//
// License records only carry content keys; the text itself lives with
// whoever displays it. A provider turns a content key into text.

use miette::Diagnostic;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from looking up license text
#[derive(Error, Debug, Diagnostic)]
pub enum TextError {
    #[error("No license text for key '{0}'")]
    #[diagnostic(code(noticesdialog::text::missing))]
    Missing(String),

    #[error("Failed to read license text {}", path.display())]
    #[diagnostic(code(noticesdialog::text::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of license summary and full text, keyed by content key
pub trait LicenseTextProvider {
    fn text(&self, key: &str) -> Result<String, TextError>;
}

/// Reads `<root>/<key>.txt`
#[derive(Debug, Clone)]
pub struct DirectoryTextProvider {
    root: PathBuf,
}

impl DirectoryTextProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LicenseTextProvider for DirectoryTextProvider {
    fn text(&self, key: &str) -> Result<String, TextError> {
        // Keys are plain identifiers; refuse anything that would leave the root
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(TextError::Missing(key.to_string()));
        }

        let path = self.root.join(format!("{}.txt", key));
        debug!("Loading license text {}", path.display());

        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TextError::Missing(key.to_string())
            } else {
                TextError::Io { path, source }
            }
        })
    }
}

/// In-memory provider
#[derive(Debug, Clone, Default)]
pub struct StaticTextProvider {
    texts: HashMap<String, String>,
}

impl StaticTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(key.into(), text.into());
    }
}

impl LicenseTextProvider for StaticTextProvider {
    fn text(&self, key: &str) -> Result<String, TextError> {
        self.texts
            .get(key)
            .cloned()
            .ok_or_else(|| TextError::Missing(key.to_string()))
    }
}
