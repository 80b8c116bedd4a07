use clap::Parser;
use miette::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use noticesdialog::config::Config;
use noticesdialog::report::{ReportFormat, Reporter};
use noticesdialog::NoticesXmlParser;

/// noticesdialog - Parse open-source notices and resolve their licenses
#[derive(Parser, Debug)]
#[command(name = "noticesdialog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the notices XML file
    #[arg(default_value = "notices.xml")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory with license texts (<key>.txt)
    #[arg(long, value_name = "DIR")]
    license_texts: Option<PathBuf>,

    /// Include license summaries in the output
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("noticesdialog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Directory the notices file lives in, used for default config lookup
fn input_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(input_dir(&cli.path))?
    };

    // Override with CLI arguments
    if let Some(texts) = &cli.license_texts {
        config.license_texts = Some(texts.clone());
    }
    if let Some(format) = &cli.format {
        config.report.format = match format {
            OutputFormat::Terminal => "terminal".to_string(),
            OutputFormat::Json => "json".to_string(),
        };
    }
    if cli.summary {
        config.report.show_summary = true;
    }

    Ok(config)
}

fn run(config: &Config, cli: &Cli) -> Result<()> {
    let resolver = config.resolver();
    debug!("{} licenses registered from config", resolver.registered_count());

    let parser = NoticesXmlParser::with_resolver(resolver);
    let notices = parser
        .parse_file(&cli.path)
        .wrap_err_with(|| format!("Failed to parse notices file: {}", cli.path.display()))?;

    info!("Found {} notices in {}", notices.len(), cli.path.display());

    let format = ReportFormat::from_name(&config.report.format).ok_or_else(|| {
        miette::miette!("Unknown report format: {}", config.report.format)
    })?;

    let mut reporter = Reporter::new(format, cli.output.clone());
    if config.report.show_summary {
        match config.text_provider() {
            Some(provider) => reporter = reporter.with_summaries(Box::new(provider)),
            None => debug!("No license text directory configured, skipping summaries"),
        }
    }

    reporter.report(&notices)
}
