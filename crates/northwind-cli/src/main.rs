//! Northwind query runner.
//!
//! Loads the trading dataset once and runs the registered query routines
//! against it.
//!
//! # Quick Start
//!
//! ```bash
//! # See what can be run
//! northwind list
//!
//! # Run one routine, optionally with a threshold
//! northwind run high-value-customers 10000
//!
//! # Run everything with configured defaults
//! northwind all
//! ```

mod commands;
mod style;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use northwind_config::{ConfigLoader, NorthwindConfig};
use northwind_data::DataSource;
use northwind_query::QueryContext;
use tracing::debug;

/// Northwind - query routines over a static trading dataset.
#[derive(Parser)]
#[command(name = "northwind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory searched for northwind.toml and northwind.local.toml.
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Read this config file alone instead of the layered sources.
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "config_dir")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered routines.
    List,

    /// Run a single routine by name.
    Run {
        /// Routine name (see `northwind list`).
        name: String,

        /// Literal parameter, for routines that take a threshold.
        value: Option<String>,
    },

    /// Run every routine with its default parameter.
    All,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            commands::list::run();
            Ok(())
        }
        Commands::Run { name, value } => {
            let session = Session::open(cli.config.as_deref(), cli.config_dir.as_deref())?;
            commands::run::run(&session.context(), &name, value.as_deref())
        }
        Commands::All => {
            let session = Session::open(cli.config.as_deref(), cli.config_dir.as_deref())?;
            commands::all::run(&session.context())
        }
    }
}

/// Configuration plus the dataset it points at, loaded once per invocation.
struct Session {
    config: NorthwindConfig,
    data: DataSource,
}

impl Session {
    fn open(config_file: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let config = load_config(config_file, config_dir)?;
        if !config.output.color {
            style::set_no_color(true);
        }
        let data = load_data(&config)?;
        Ok(Self { config, data })
    }

    fn context(&self) -> QueryContext<'_> {
        QueryContext::new(&self.data, &self.config.queries)
    }
}

fn load_config(config_file: Option<&Path>, config_dir: Option<&Path>) -> Result<NorthwindConfig> {
    if let Some(file) = config_file {
        return NorthwindConfig::from_file(file)
            .with_context(|| format!("Failed to load configuration from {}", file.display()));
    }

    let mut loader = ConfigLoader::new();
    if let Some(dir) = config_dir {
        loader = loader.with_project_dir(dir);
    }
    loader.load().context("Failed to load configuration")
}

fn load_data(config: &NorthwindConfig) -> Result<DataSource> {
    match &config.data.path {
        Some(path) => {
            debug!(path = %path.display(), "Loading dataset from disk");
            DataSource::from_path(path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))
        }
        None => DataSource::embedded().context("Failed to load embedded dataset"),
    }
}
