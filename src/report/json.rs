use crate::license::{License, LicenseTextProvider};
use crate::notice::Notices;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter<'a> {
    output_path: Option<PathBuf>,
    summaries: Option<&'a dyn LicenseTextProvider>,
}

impl<'a> JsonReporter<'a> {
    pub fn new(output_path: Option<PathBuf>, summaries: Option<&'a dyn LicenseTextProvider>) -> Self {
        Self {
            output_path,
            summaries,
        }
    }

    pub fn report(&self, notices: &Notices) -> Result<()> {
        let json = self.render(notices)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(&self, notices: &Notices) -> Result<String> {
        let report = JsonReport::from_notices(notices, self.summaries);
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_notices: usize,
    notices: Vec<JsonNotice>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonNotice {
    name: String,
    url: String,
    copyright: String,
    license: Option<JsonLicense>,
}

#[derive(Serialize)]
struct JsonLicense {
    kind: &'static str,
    code: Option<&'static str>,
    name: String,
    version: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    known: usize,
    custom: usize,
    unknown: usize,
    unlicensed: usize,
}

impl JsonLicense {
    fn from_license(license: &License, summaries: Option<&dyn LicenseTextProvider>) -> Self {
        let kind = match license {
            License::Known(_) => "known",
            License::Custom { .. } => "custom",
            License::Unknown => "unknown",
        };

        Self {
            kind,
            code: license.kind().map(|k| k.code()),
            name: license.name().to_string(),
            version: license.version().to_string(),
            url: license.url().to_string(),
            summary: summaries.map(|provider| license.summary_text(provider)),
        }
    }
}

impl JsonReport {
    fn from_notices(notices: &Notices, summaries: Option<&dyn LicenseTextProvider>) -> Self {
        let mut known = 0;
        let mut custom = 0;
        let mut unknown = 0;
        let mut unlicensed = 0;

        let entries: Vec<JsonNotice> = notices
            .iter()
            .map(|notice| {
                match notice.license() {
                    Some(License::Known(_)) => known += 1,
                    Some(License::Custom { .. }) => custom += 1,
                    Some(License::Unknown) => unknown += 1,
                    None => unlicensed += 1,
                }

                JsonNotice {
                    name: notice.name().to_string(),
                    url: notice.url().to_string(),
                    copyright: notice.copyright().to_string(),
                    license: notice
                        .license()
                        .map(|license| JsonLicense::from_license(license, summaries)),
                }
            })
            .collect();

        Self {
            version: "1.0",
            total_notices: notices.len(),
            notices: entries,
            summary: JsonSummary {
                known,
                custom,
                unknown,
                unlicensed,
            },
        }
    }
}
