use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shipnotes::{
    Changelog, ChangelogRenderer, ChangelogSource, FileSource, HtmlOptions, OutputFormat,
    SectionKind, ShipnotesConfig, ensure_valid, validate_changelog, write_file, write_to,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shipnotes")]
#[command(version, about = "render a changelog page from release entries", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// configuration file (defaults to ./shipnotes.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// report format for check and list (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: ReportFormat,

    /// increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum ReportFormat {
    Json,
    Human,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "human" => Ok(ReportFormat::Human),
            _ => Err(format!(
                "invalid report format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// render the changelog page
    Render {
        /// changelog file (.toml or .json); overrides the configured source
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// output encoding: html, markdown, text or json
        #[arg(short = 't', long = "to", default_value = "html")]
        to: OutputFormat,

        /// write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// emit only the page body (html)
        #[arg(long)]
        fragment: bool,

        /// refuse to render when validation reports errors
        #[arg(long)]
        strict: bool,
    },

    /// check the changelog for duplicate versions, ordering and other data problems
    Check {
        /// changelog file (.toml or .json); overrides the configured source
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// list releases with their section sizes
    List {
        /// changelog file (.toml or .json); overrides the configured source
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Without `-v` only warnings reach stderr; `RUST_LOG` always wins.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,shipnotes=info".to_string(),
            2 => "info,shipnotes=debug".to_string(),
            _ => "debug,shipnotes=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            to,
            output,
            fragment,
            strict,
        } => {
            handle_render(&config, input.as_deref(), to, output.as_deref(), fragment, strict)?;
        }
        Commands::Check { input } => {
            handle_check(&config, &cli.format, input.as_deref())?;
        }
        Commands::List { input } => {
            handle_list(&config, &cli.format, input.as_deref())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ShipnotesConfig> {
    match path {
        Some(path) => ShipnotesConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ShipnotesConfig::load_or_default(".")),
    }
}

fn load_changelog(config: &ShipnotesConfig, input: Option<&Path>) -> Result<Changelog> {
    let source: Box<dyn ChangelogSource> = match input {
        Some(path) => Box::new(FileSource::new(path)),
        None => config.changelog_source(),
    };

    source
        .load()
        .with_context(|| format!("failed to load changelog from {}", source.describe()))
}

fn handle_render(
    config: &ShipnotesConfig,
    input: Option<&Path>,
    to: OutputFormat,
    output: Option<&Path>,
    fragment: bool,
    strict: bool,
) -> Result<()> {
    let changelog = load_changelog(config, input)?;

    if strict && let Err(e) = ensure_valid(&changelog, &config.validation) {
        validate_changelog(&changelog, &config.validation)
            .iter()
            .filter(|i| i.is_error())
            .for_each(|issue| eprintln!("{}", issue));
        return Err(e).context("refusing to render");
    }

    let document = ChangelogRenderer::new(config.page.clone()).render(&changelog);
    let duplicates = document.duplicate_keys();
    if !duplicates.is_empty() {
        tracing::warn!(keys = ?duplicates, "rendered cards share or lack a version key");
    }

    let html_options = if fragment {
        HtmlOptions::fragment()
    } else {
        HtmlOptions::default()
    };

    match output {
        Some(path) => {
            write_file(path, &document, to, &html_options)
                .context("failed to write changelog")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_to(&mut stdout, &document, to, &html_options)
                .context("failed to render changelog")?;
        }
    }

    Ok(())
}

fn handle_check(
    config: &ShipnotesConfig,
    format: &ReportFormat,
    input: Option<&Path>,
) -> Result<()> {
    let changelog = load_changelog(config, input)?;
    let issues = validate_changelog(&changelog, &config.validation);

    let total_errors = issues.iter().filter(|i| i.is_error()).count();
    let total_warnings = issues.iter().filter(|i| i.is_warning()).count();

    match format {
        ReportFormat::Json => {
            let output = serde_json::json!({
                "releases": changelog.len(),
                "total_errors": total_errors,
                "total_warnings": total_warnings,
                "valid": total_errors == 0,
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ReportFormat::Human => {
            println!("checked {} release(s)", changelog.len());
            if issues.is_empty() {
                println!("no issues found");
            } else {
                println!();
                for issue in &issues {
                    println!("  {}", issue);
                }
            }
        }
    }

    if total_errors > 0 {
        if matches!(format, ReportFormat::Human) {
            println!();
            println!(
                "validation failed: {} error(s), {} warning(s)",
                total_errors, total_warnings
            );
        }

        // return error to cause non-zero exit code
        anyhow::bail!("validation failed with {} error(s)", total_errors);
    }

    Ok(())
}

fn handle_list(
    config: &ShipnotesConfig,
    format: &ReportFormat,
    input: Option<&Path>,
) -> Result<()> {
    let changelog = load_changelog(config, input)?;

    match format {
        ReportFormat::Json => {
            let output: Vec<_> = changelog
                .iter()
                .map(|entry| {
                    let mut counts = serde_json::Map::new();
                    for kind in SectionKind::ALL {
                        let count = entry.section(kind).map(|s| s.len()).unwrap_or(0);
                        counts.insert(kind.to_string(), serde_json::json!(count));
                    }
                    serde_json::json!({
                        "version": entry.version(),
                        "date": entry.date(),
                        "sections": counts,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ReportFormat::Human => {
            const MIN_VERSION_WIDTH: usize = 8;
            let version_width = changelog
                .iter()
                .map(|e| e.version().len() + 1)
                .max()
                .unwrap_or(MIN_VERSION_WIDTH)
                .max(MIN_VERSION_WIDTH);

            println!("releases ({}):", changelog.len());
            println!(
                "  {:<version_width$}  {:<20}  {:>8}  {:>12}  {:>9}",
                "Version",
                "Date",
                "Features",
                "Improvements",
                "Bug Fixes",
                version_width = version_width
            );
            for entry in &changelog {
                let count = |kind| entry.section(kind).map(|s| s.len()).unwrap_or(0);
                println!(
                    "  {:<version_width$}  {:<20}  {:>8}  {:>12}  {:>9}",
                    format!("v{}", entry.version()),
                    entry.date(),
                    count(SectionKind::Features),
                    count(SectionKind::Improvements),
                    count(SectionKind::BugFixes),
                    version_width = version_width
                );
            }
        }
    }

    Ok(())
}
