use crate::license::{License, LicenseTextProvider};
use crate::notice::{Notice, Notices};
use colored::Colorize;
use miette::Result;
use std::fmt::Write;

/// Terminal reporter with colored output
pub struct TerminalReporter<'a> {
    summaries: Option<&'a dyn LicenseTextProvider>,
}

impl<'a> TerminalReporter<'a> {
    pub fn new(summaries: Option<&'a dyn LicenseTextProvider>) -> Self {
        Self { summaries }
    }

    pub fn report(&self, notices: &Notices) -> Result<()> {
        print!("{}", self.render(notices));
        Ok(())
    }

    pub fn render(&self, notices: &Notices) -> String {
        let mut out = String::new();

        if notices.is_empty() {
            let _ = writeln!(out, "{}", "No notices found.".yellow().bold());
            return out;
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!("{} notices:", notices.len()).green().bold()
        );
        let _ = writeln!(out);

        for notice in notices {
            self.render_notice(&mut out, notice);
        }

        self.render_summary(&mut out, notices);
        out
    }

    fn render_notice(&self, out: &mut String, notice: &Notice) {
        let name = if notice.name().is_empty() {
            "(unnamed)".dimmed().to_string()
        } else {
            notice.name().cyan().bold().to_string()
        };
        let _ = writeln!(out, "{}", name);

        if !notice.url().is_empty() {
            let _ = writeln!(out, "  {} {}", "→".dimmed(), notice.url());
        }
        if !notice.copyright().is_empty() {
            let _ = writeln!(out, "  {}", notice.copyright().dimmed());
        }

        match notice.license() {
            Some(license) => {
                let label = match license {
                    License::Known(_) => license.name().green(),
                    License::Custom { .. } => license.name().yellow(),
                    License::Unknown => license.name().red(),
                };
                let version = if license.version().is_empty() {
                    String::new()
                } else {
                    format!(" ({})", license.version())
                };
                let _ = writeln!(out, "  License: {}{}", label, version);

                if !license.url().is_empty() && license.url() != license.name() {
                    let _ = writeln!(out, "           {}", license.url().dimmed());
                }

                if let Some(provider) = self.summaries {
                    let summary = license.summary_text(provider);
                    if !summary.is_empty() {
                        for line in summary.lines() {
                            let _ = writeln!(out, "    {}", line);
                        }
                    }
                }
            }
            None => {
                let _ = writeln!(out, "  License: {}", "none".red());
            }
        }

        let _ = writeln!(out);
    }

    fn render_summary(&self, out: &mut String, notices: &Notices) {
        let mut known = 0;
        let mut custom = 0;
        let mut unknown = 0;
        let mut unlicensed = 0;

        for notice in notices {
            match notice.license() {
                Some(License::Known(_)) => known += 1,
                Some(License::Custom { .. }) => custom += 1,
                Some(License::Unknown) => unknown += 1,
                None => unlicensed += 1,
            }
        }

        let _ = writeln!(out, "{}", "─".repeat(60).dimmed());

        let mut parts = vec![format!("{} known", known).green().to_string()];
        if custom > 0 {
            parts.push(format!("{} custom", custom).yellow().to_string());
        }
        if unknown > 0 {
            parts.push(format!("{} unknown", unknown).red().to_string());
        }
        if unlicensed > 0 {
            parts.push(format!("{} without license", unlicensed).red().to_string());
        }
        let _ = writeln!(out, "Summary: {}", parts.join(", "));
    }
}
