//! tvtuner - television channel list manager CLI.

/// Application configuration (TOML).
mod config;
/// Command scripts.
mod script;
/// Terminal UI components.
mod tui;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use tvtuner_core::registry::format_list_line;
use tvtuner_core::{Band, TunerRegistry};

use crate::config::{AppConfig, resolve_config_path};
use crate::script::run_script;
use crate::tui::run_channel_list;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the configured channel lineup.
    List(ListArgs),
    /// Run a command script (file or stdin) against the lineup.
    Run(RunArgs),
    /// Edit the lineup interactively.
    Tui,
    /// Write a default config file.
    Init(InitArgs),
    /// Print shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Only show channels in this band.
    #[arg(long, value_enum)]
    band: Option<BandArg>,
}

/// Band filter accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum BandArg {
    /// 54-88 MHz.
    VhfLow,
    /// 174-216 MHz.
    VhfHigh,
    /// 470-608 MHz.
    Uhf,
}

impl From<BandArg> for Band {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::VhfLow => Self::VhfLow,
            BandArg::VhfHigh => Self::VhfHigh,
            BandArg::Uhf => Self::Uhf,
        }
    }
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
struct RunArgs {
    /// Script file; reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: Shell,
}

/// Loads the config and builds the registry it describes.
///
/// # Errors
///
/// Returns an error if the config cannot be resolved, read, or applied.
fn load_registry(dir: Option<&PathBuf>) -> Result<TunerRegistry> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    tracing::debug!(
        path = %config_path.display(),
        policy = ?config.tuner.duplicate_frequency,
        extra = config.channels.extra.len(),
        "Loaded config"
    );
    config
        .build_registry()
        .context("failed to build channel lineup")
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded.
#[instrument(skip_all)]
fn run_list(args: &ListArgs, dir: Option<&PathBuf>) -> Result<()> {
    let registry = load_registry(dir)?;
    let band = args.band.map(Band::from);

    let mut shown = 0usize;
    for (pos, ch) in registry.channels().enumerate() {
        if band.is_some_and(|b| ch.band() != b) {
            continue;
        }
        tracing::info!("{}", format_list_line(pos, ch).trim_end());
        shown = shown.saturating_add(1);
    }
    tracing::info!("Total: {} of {} channels", shown, registry.count());

    Ok(())
}

/// Runs the `run` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the script cannot be read.
#[instrument(skip_all)]
fn run_run(args: &RunArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut registry = load_registry(dir)?;

    let stats = if let Some(path) = &args.script {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        run_script(&mut registry, BufReader::new(file))?
    } else {
        run_script(&mut registry, io::stdin().lock())?
    };

    tracing::info!("{}", registry.render_summary());
    tracing::info!(
        "Script finished: {} succeeded, {} failed",
        stats.succeeded,
        stats.failed
    );

    Ok(())
}

/// Runs the `tui` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the TUI fails.
#[instrument(skip_all)]
fn run_tui(dir: Option<&PathBuf>) -> Result<()> {
    let registry = load_registry(dir)?;

    tracing::info!(
        "Loaded {} channels. Launching TUI...",
        registry.count()
    );
    let registry = run_channel_list(registry).context("channel list TUI failed")?;
    tracing::info!("{}", registry.render_summary());

    Ok(())
}

/// Runs the `init` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file cannot be written.
#[instrument(skip_all)]
fn run_init(args: &InitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() && !args.force {
        tracing::warn!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .context("failed to save config")?;
    tracing::info!("Wrote default config to {}", config_path.display());

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => run_list(&args, cli.dir.as_ref()),
        Commands::Run(args) => run_run(&args, cli.dir.as_ref()),
        Commands::Tui => run_tui(cli.dir.as_ref()),
        Commands::Init(args) => run_init(&args, cli.dir.as_ref()),
        Commands::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "tvtuner",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
