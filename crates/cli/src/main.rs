use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mta_rust_docgen_core::{format_output, DocsConfig, DocsGenerator, OutputFormat};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Regenerate component docs and the docs table of contents")]
#[command(long_about = "Scans the component index files of a project for named re-exports \
    (export { x } from './module'), resolves each module to its source file, writes one \
    Markdown stub per component into docs/components/<route>/ and rebuilds the table of \
    contents. Existing generated docs are removed first; README.md files are kept.\n\n\
    Without --config the standard layout below PATH is used: packages/components/src, \
    client/analytics/components and docs/components.")]
pub struct Args {
    /// Project root directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// TOML config file (paths inside resolve against its directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Docs output folder (overrides the config)
    #[arg(long)]
    pub docs_root: Option<PathBuf>,

    /// Table of contents file (overrides the config)
    #[arg(long)]
    pub toc_path: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Summary)]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scan and resolve only; do not clear folders or write docs
    #[arg(long)]
    pub dry_run: bool,

    /// Print the table of contents instead of a report (implies --dry-run)
    #[arg(long)]
    pub print_toc: bool,

    /// Show a progress spinner
    #[arg(long)]
    pub progress: bool,

    /// Log debug details (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => DocsConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DocsConfig::from_project_root(args.path.clone()),
    };
    let config = match args.docs_root.clone() {
        Some(docs_root) => config.with_docs_root(docs_root),
        None => config,
    };
    let config = match args.toc_path.clone() {
        Some(toc_path) => config.with_toc_path(toc_path),
        None => config,
    };
    let config = config.with_dry_run(args.dry_run || args.print_toc);

    let generator = DocsGenerator::new(config)?;

    if args.print_toc {
        let toc = generator.render_toc()?;
        return write_output(args.output.as_ref(), &toc);
    }

    let spinner = if args.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Generating docs...");
        Some(pb)
    } else {
        None
    };

    let report = generator
        .generate()
        .context("docs generation failed; files written before the failure remain on disk")?;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Generated {} docs in {}ms",
            report.stats.docs_written, report.metadata.duration_ms
        ));
    }

    let output = format_output(&report, args.format.into())?;
    write_output(args.output.as_ref(), &output)
}

fn write_output(path: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(file = %path.display(), "output written");
        }
        None => print!("{}", content),
    }
    Ok(())
}
