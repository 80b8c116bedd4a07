// License catalog
//
// The fixed set of licenses the resolver recognizes. Each entry is keyed by
// a short code (the form used in notices.xml files), its display name, its
// SPDX identifier and its canonical URL.

/// A license from the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseKind {
    Apache2,
    Mit,
    Bsd2Clause,
    Bsd3Clause,
    Gpl20,
    Gpl30,
    Lgpl21,
    Lgpl30,
    Mpl11,
    Mpl20,
    Epl10,
    Isc,
    CcByNd30,
    SilOfl11,
    Cddl10,
}

impl LicenseKind {
    /// Every catalog entry, in display order
    pub const ALL: [LicenseKind; 15] = [
        LicenseKind::Apache2,
        LicenseKind::Mit,
        LicenseKind::Bsd2Clause,
        LicenseKind::Bsd3Clause,
        LicenseKind::Gpl20,
        LicenseKind::Gpl30,
        LicenseKind::Lgpl21,
        LicenseKind::Lgpl30,
        LicenseKind::Mpl11,
        LicenseKind::Mpl20,
        LicenseKind::Epl10,
        LicenseKind::Isc,
        LicenseKind::CcByNd30,
        LicenseKind::SilOfl11,
        LicenseKind::Cddl10,
    ];

    /// Short code used in notices files (e.g., "apache2")
    pub fn code(&self) -> &'static str {
        match self {
            LicenseKind::Apache2 => "apache2",
            LicenseKind::Mit => "mit",
            LicenseKind::Bsd2Clause => "bsd2",
            LicenseKind::Bsd3Clause => "bsd3",
            LicenseKind::Gpl20 => "gpl20",
            LicenseKind::Gpl30 => "gpl30",
            LicenseKind::Lgpl21 => "lgpl21",
            LicenseKind::Lgpl30 => "lgpl30",
            LicenseKind::Mpl11 => "mpl11",
            LicenseKind::Mpl20 => "mpl20",
            LicenseKind::Epl10 => "epl10",
            LicenseKind::Isc => "isc",
            LicenseKind::CcByNd30 => "ccbynd30",
            LicenseKind::SilOfl11 => "ofl11",
            LicenseKind::Cddl10 => "cddl10",
        }
    }

    /// Older short codes still accepted by lookup
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LicenseKind::Lgpl30 => &["lgpl3"],
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LicenseKind::Apache2 => "Apache Software License 2.0",
            LicenseKind::Mit => "MIT License",
            LicenseKind::Bsd2Clause => "BSD 2-Clause License",
            LicenseKind::Bsd3Clause => "BSD 3-Clause License",
            LicenseKind::Gpl20 => "GNU General Public License 2.0",
            LicenseKind::Gpl30 => "GNU General Public License 3",
            LicenseKind::Lgpl21 => "GNU Lesser General Public License 2.1",
            LicenseKind::Lgpl30 => "GNU Lesser General Public License 3",
            LicenseKind::Mpl11 => "Mozilla Public License 1.1",
            LicenseKind::Mpl20 => "Mozilla Public License 2.0",
            LicenseKind::Epl10 => "Eclipse Public License 1.0",
            LicenseKind::Isc => "ISC License",
            LicenseKind::CcByNd30 => "Creative Commons Attribution-NoDerivs 3.0 Unported",
            LicenseKind::SilOfl11 => "SIL Open Font License v1.1",
            LicenseKind::Cddl10 => "Common Development and Distribution License 1.0",
        }
    }

    /// License version, empty for unversioned licenses
    pub fn version(&self) -> &'static str {
        match self {
            LicenseKind::Apache2 | LicenseKind::Gpl20 | LicenseKind::Mpl20 => "2.0",
            LicenseKind::Gpl30 | LicenseKind::Lgpl30 => "3",
            LicenseKind::Lgpl21 => "2.1",
            LicenseKind::Mpl11 | LicenseKind::SilOfl11 => "1.1",
            LicenseKind::Epl10 | LicenseKind::Cddl10 => "1.0",
            LicenseKind::CcByNd30 => "3.0",
            LicenseKind::Mit | LicenseKind::Bsd2Clause | LicenseKind::Bsd3Clause | LicenseKind::Isc => "",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            LicenseKind::Apache2 => "http://www.apache.org/licenses/LICENSE-2.0",
            LicenseKind::Mit => "http://opensource.org/licenses/MIT",
            LicenseKind::Bsd2Clause => "http://opensource.org/licenses/BSD-2-Clause",
            LicenseKind::Bsd3Clause => "http://opensource.org/licenses/BSD-3-Clause",
            LicenseKind::Gpl20 => "http://www.gnu.org/licenses/old-licenses/gpl-2.0.txt",
            LicenseKind::Gpl30 => "http://www.gnu.org/licenses/gpl.txt",
            LicenseKind::Lgpl21 => "http://www.gnu.org/licenses/old-licenses/lgpl-2.1.txt",
            LicenseKind::Lgpl30 => "http://www.gnu.org/licenses/lgpl.txt",
            LicenseKind::Mpl11 => "https://www.mozilla.org/MPL/1.1",
            LicenseKind::Mpl20 => "https://www.mozilla.org/MPL/2.0",
            LicenseKind::Epl10 => "http://www.eclipse.org/legal/epl-v10.html",
            LicenseKind::Isc => "http://opensource.org/licenses/isc-license.txt",
            LicenseKind::CcByNd30 => "http://creativecommons.org/licenses/by-nd/3.0/",
            LicenseKind::SilOfl11 => "http://scripts.sil.org/OFL",
            LicenseKind::Cddl10 => "http://opensource.org/licenses/CDDL-1.0",
        }
    }

    pub fn spdx_id(&self) -> &'static str {
        match self {
            LicenseKind::Apache2 => "Apache-2.0",
            LicenseKind::Mit => "MIT",
            LicenseKind::Bsd2Clause => "BSD-2-Clause",
            LicenseKind::Bsd3Clause => "BSD-3-Clause",
            LicenseKind::Gpl20 => "GPL-2.0",
            LicenseKind::Gpl30 => "GPL-3.0",
            LicenseKind::Lgpl21 => "LGPL-2.1",
            LicenseKind::Lgpl30 => "LGPL-3.0",
            LicenseKind::Mpl11 => "MPL-1.1",
            LicenseKind::Mpl20 => "MPL-2.0",
            LicenseKind::Epl10 => "EPL-1.0",
            LicenseKind::Isc => "ISC",
            LicenseKind::CcByNd30 => "CC-BY-ND-3.0",
            LicenseKind::SilOfl11 => "OFL-1.1",
            LicenseKind::Cddl10 => "CDDL-1.0",
        }
    }

    /// Content key for the short summary text
    pub fn summary_key(&self) -> String {
        format!("{}_summary", self.code())
    }

    /// Content key for the full license text
    pub fn full_text_key(&self) -> String {
        format!("{}_full", self.code())
    }

    /// Find the catalog entry for an identifier.
    ///
    /// Matches short codes and their aliases, display names, SPDX identifiers and URLs,
    /// ignoring ASCII case. URLs also match regardless of scheme, a leading
    /// `www.` or a trailing slash.
    pub fn lookup(identifier: &str) -> Option<LicenseKind> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        let url_form = normalize_url(identifier);

        Self::ALL.iter().copied().find(|kind| {
            kind.code().eq_ignore_ascii_case(identifier)
                || kind.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(identifier))
                || kind.name().eq_ignore_ascii_case(identifier)
                || kind.spdx_id().eq_ignore_ascii_case(identifier)
                || url_form
                    .as_deref()
                    .is_some_and(|url| normalize_url(kind.url()).as_deref() == Some(url))
        })
    }
}

impl std::fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduce a URL to a comparable form, or None if the text is not a URL
pub(crate) fn normalize_url(text: &str) -> Option<String> {
    let lower = text.trim().to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    Some(rest.trim_end_matches('/').to_string())
}
