mod terminal;
mod json;

pub use terminal::TerminalReporter;
pub use json::JsonReporter;

use crate::license::LicenseTextProvider;
use crate::notice::Notices;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl ReportFormat {
    /// Parse a format name from configuration
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "terminal" | "text" => Some(ReportFormat::Terminal),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Reporter for outputting parsed notices
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    summaries: Option<Box<dyn LicenseTextProvider>>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            summaries: None,
        }
    }

    /// Include license summaries, loaded from `provider`
    pub fn with_summaries(mut self, provider: Box<dyn LicenseTextProvider>) -> Self {
        self.summaries = Some(provider);
        self
    }

    /// Report the parsed notices
    pub fn report(&self, notices: &Notices) -> Result<()> {
        let summaries = self.summaries.as_deref();
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new(summaries);
                reporter.report(notices)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone(), summaries);
                reporter.report(notices)
            }
        }
    }
}
