// License resolution
//
// Maps the identifier found in a <license> element to a License. Resolution
// never fails: anything the catalog does not know becomes a custom license,
// and a blank identifier becomes License::Unknown.

use super::{License, LicenseKind};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::trace;

/// Matches freeform "Name (url)", "Name <url>" and "Name url" identifiers
fn freeform_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>.*?)\s*[(<]?(?P<url>https?://[^\s()<>]+)[)>]?$")
            .expect("freeform license pattern is valid")
    })
}

/// Resolves license identifiers against the catalog plus any registered
/// licenses
#[derive(Debug, Clone, Default)]
pub struct LicenseResolver {
    /// Extra licenses keyed by lowercase identifier
    registered: HashMap<String, License>,
}

impl LicenseResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a license under `key`. Registered keys win over the catalog.
    pub fn register(&mut self, key: &str, license: License) {
        self.registered
            .insert(key.trim().to_lowercase(), license);
    }

    pub fn with_license(mut self, key: &str, license: License) -> Self {
        self.register(key, license);
        self
    }

    /// Number of registered (non-catalog) licenses
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Resolve an identifier to a license
    pub fn resolve(&self, identifier: &str) -> License {
        let identifier = identifier.trim();

        if let Some(license) = self.registered.get(&identifier.to_lowercase()) {
            trace!("License '{}' resolved from registered licenses", identifier);
            return license.clone();
        }

        if let Some(kind) = LicenseKind::lookup(identifier) {
            trace!("License '{}' resolved to {}", identifier, kind.code());
            return License::Known(kind);
        }

        if identifier.is_empty() {
            return License::Unknown;
        }

        trace!("License '{}' not in catalog, using custom license", identifier);
        freeform_license(identifier)
    }
}

/// Build a custom license from text that matched nothing
fn freeform_license(text: &str) -> License {
    match freeform_pattern().captures(text) {
        Some(caps) => {
            let url = caps.name("url").map_or("", |m| m.as_str());
            let name = caps.name("name").map_or("", |m| m.as_str()).trim();
            let name = if name.is_empty() { url } else { name };
            License::custom(name, url)
        }
        None => License::custom(text, ""),
    }
}
