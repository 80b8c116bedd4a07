// License model
//
// A license is either an entry from the built-in catalog, a custom license
// built from freeform text, or the unknown-license fallback.

mod catalog;
mod resolver;
mod text;

pub use catalog::LicenseKind;
pub use resolver::LicenseResolver;
pub use text::{DirectoryTextProvider, LicenseTextProvider, StaticTextProvider, TextError};

use tracing::warn;

/// Name reported for the unknown-license fallback
pub const UNKNOWN_LICENSE_NAME: &str = "Unknown License";

/// A resolved license
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum License {
    /// Entry from the built-in catalog
    Known(LicenseKind),

    /// License described only by freeform name and URL
    Custom {
        name: String,
        url: String,
        version: Option<String>,
    },

    /// Blank identifier
    Unknown,
}

impl License {
    pub fn custom(name: impl Into<String>, url: impl Into<String>) -> Self {
        License::Custom {
            name: name.into(),
            url: url.into(),
            version: None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            License::Known(kind) => kind.name(),
            License::Custom { name, .. } => name,
            License::Unknown => UNKNOWN_LICENSE_NAME,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            License::Known(kind) => kind.version(),
            License::Custom { version, .. } => version.as_deref().unwrap_or(""),
            License::Unknown => "",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            License::Known(kind) => kind.url(),
            License::Custom { url, .. } => url,
            License::Unknown => "",
        }
    }

    /// Catalog entry, if this is a known license
    pub fn kind(&self) -> Option<LicenseKind> {
        match self {
            License::Known(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, License::Known(_))
    }

    /// Short summary text.
    ///
    /// Catalog licenses fetch their text from `provider`; a failed lookup is
    /// logged and yields an empty string. Custom licenses summarize to their
    /// name.
    pub fn summary_text(&self, provider: &dyn LicenseTextProvider) -> String {
        match self {
            License::Known(kind) => load_text(provider, &kind.summary_key()),
            License::Custom { name, .. } => name.clone(),
            License::Unknown => String::new(),
        }
    }

    /// Full license text, resolved the same way as [`License::summary_text`].
    /// Custom licenses render as their name followed by the URL.
    pub fn full_text(&self, provider: &dyn LicenseTextProvider) -> String {
        match self {
            License::Known(kind) => load_text(provider, &kind.full_text_key()),
            License::Custom { name, url, .. } if url.is_empty() || url == name => name.clone(),
            License::Custom { name, url, .. } => format!("{}\n{}", name, url),
            License::Unknown => String::new(),
        }
    }
}

impl From<LicenseKind> for License {
    fn from(kind: LicenseKind) -> Self {
        License::Known(kind)
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn load_text(provider: &dyn LicenseTextProvider, key: &str) -> String {
    match provider.text(key) {
        Ok(text) => text,
        Err(e) => {
            warn!("Error loading license text: {}", e);
            String::new()
        }
    }
}
