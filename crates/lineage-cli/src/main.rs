#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use lineage_core::config::{EffectiveConfig, resolve_config};
use lineage_core::error::ErrorCode;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "lineage: explore creative influence between authors and screenwriters",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Creator dataset (JSON array). Defaults to `[data] path` in
    /// .lineage/config.toml, then `creators.json`.
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and resolved configuration.
    fn output_mode(&self, config: Option<&EffectiveConfig>) -> OutputMode {
        if let Some(mode) = self.format {
            return mode;
        }
        config
            .and_then(|c| OutputMode::from_name(&c.resolved_output))
            .unwrap_or_else(|| resolve_output_mode(None, self.json))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Network",
        about = "Analyze the whole influence network",
        long_about = "Compute influence, centrality, clustering, components, chains, and bridges.",
        after_help = "EXAMPLES:\n    # Full report\n    lineage analyze\n\n    # Top 5 per ranking from a specific dataset\n    lineage analyze --top 5 --data authors.json\n\n    # Emit machine-readable output\n    lineage analyze --format json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        next_help_heading = "Network",
        about = "Show network statistics",
        after_help = "EXAMPLES:\n    # Counts, density, and degree extremes\n    lineage stats"
    )]
    Stats,

    #[command(
        next_help_heading = "Paths",
        about = "Degrees of separation between two creators",
        long_about = "Shortest path between two creators, treating influence in either direction as a connection.",
        after_help = "EXAMPLES:\n    # How far apart are they?\n    lineage path wolff faulkner"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Directed influence lineage between two creators",
        long_about = "Shortest path following influence forward only, from influencer to influenced.",
        after_help = "EXAMPLES:\n    # Did Hemingway's influence reach Wolff?\n    lineage lineage hemingway wolff"
    )]
    Lineage(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Degrees of separation for every connected pair",
        after_help = "EXAMPLES:\n    # Full table as JSON\n    lineage separation --format json"
    )]
    Separation,

    #[command(
        next_help_heading = "Structure",
        about = "Longest influence chains",
        after_help = "EXAMPLES:\n    # All chains of 2+ steps\n    lineage chains\n\n    # Only long chains\n    lineage chains --min-length 4"
    )]
    Chains(cmd::chains::ChainsArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Creators bridging separate circles",
        after_help = "EXAMPLES:\n    # Top 3 bridges\n    lineage bridges --limit 3"
    )]
    Bridges(cmd::bridges::BridgesArgs),

    #[command(
        next_help_heading = "Structure",
        about = "Connected groups presented as movements",
        after_help = "EXAMPLES:\n    # List movements with their era\n    lineage clusters"
    )]
    Clusters,

    #[command(
        next_help_heading = "Structure",
        about = "Works ranked by their creator's connectedness",
        after_help = "EXAMPLES:\n    # Top 20 works\n    lineage works --limit 20"
    )]
    Works(cmd::works::WorksArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    lineage completions bash\n\n    # Generate zsh completions\n    lineage completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LINEAGE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "lineage=debug,info"
        } else {
            "lineage=info,warn"
        })
    });

    let format = env::var("LINEAGE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Commands::Completions(ref args) = cli.command {
        return cmd::completions::run_completions(args.shell, &mut Cli::command());
    }

    let project_root = env::current_dir()?;
    let wants_json = cli.json || cli.format.is_some_and(OutputMode::is_json);
    let config = match resolve_config(&project_root, wants_json, cli.data.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            render_error(
                cli.output_mode(None),
                &CliError::from_code(ErrorCode::ConfigParseError, format!("{err:#}")),
            )?;
            return Err(err);
        }
    };
    let output = cli.output_mode(Some(&config));
    let top = config.project.output.top;

    let creators = cmd::load_dataset(&config, output)?;

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &creators, top, output),
        Commands::Stats => cmd::stats::run_stats(&creators, output),
        Commands::Path(ref args) => {
            cmd::path::run_path(args, cmd::path::PathKind::Separation, &creators, output)
        }
        Commands::Lineage(ref args) => {
            cmd::path::run_path(args, cmd::path::PathKind::Lineage, &creators, output)
        }
        Commands::Separation => cmd::separation::run_separation(&creators, output),
        Commands::Chains(ref args) => cmd::chains::run_chains(args, &creators, output),
        Commands::Bridges(ref args) => cmd::bridges::run_bridges(args, &creators, output),
        Commands::Clusters => cmd::clusters::run_clusters(&creators, output),
        Commands::Works(ref args) => cmd::works::run_works(args, &creators, top, output),
        Commands::Completions(_) => Ok(()),
    }
}
