//! hconfig - Project Config Tool
//!
//! Usage:
//!   hconfig init                       # Clone the shared project config repo
//!   hconfig update                     # Pull the latest project config
//!   hconfig ls                         # List known projects
//!   hconfig info --projectname NAME    # Show a project's merged config
//!   hconfig setlocal --projectname NAME --localpath PATH
//!   hconfig setlocalwd                 # Use the current folder as local path

mod interactive;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hconfig_core::git::{RefreshAction, RepoSync};
use hconfig_core::local::LocalOverrideWriter;
use hconfig_core::project::{render_json, render_text};
use hconfig_core::settings::Settings;
use hconfig_core::store::ProjectStore;

use crate::interactive::PromptSelector;

#[derive(Parser)]
#[command(name = "hconfig")]
#[command(about = "Project Config Tool", version, long_about = None)]
struct Cli {
    /// Settings file (defaults to <config dir>/hconfig/hconfig.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Storage root (defaults to HCONFIG_ROOT, then settings, then ~/.hconfig)
    #[arg(long, global = true, value_name = "PATH")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage project configuration (clone or update the shared repo)
    Init,

    /// Get latest project updates
    Update,

    /// Show list of known projects
    Ls {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Select project and show config details
    Info {
        /// Project to show; prompts when omitted
        #[arg(long = "projectname", value_name = "NAME")]
        project_name: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Set local codebase path for project
    #[command(name = "setlocal")]
    SetLocal {
        /// Project config to update
        #[arg(long = "projectname", value_name = "NAME")]
        project_name: String,

        /// Local environment codebase folder
        #[arg(long = "localpath", value_name = "PATH")]
        local_path: String,
    },

    /// Set project local codebase path using current folder path
    #[command(name = "setlocalwd")]
    SetLocalWd,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run_cli(cli) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let layout = settings.layout(cli.root.as_deref())?;
    tracing::debug!(root = %layout.root().display(), "using storage root");

    match cli.command {
        Commands::Init | Commands::Update => {
            let sync = RepoSync::new(layout, settings.repository.clone());
            let report = sync.refresh()?;
            let verb = match report.action {
                RefreshAction::Cloned => "Cloned",
                RefreshAction::Updated => "Updated",
            };
            println!(
                "{} {} project config ({})",
                style("✓").green(),
                verb,
                report.commit
            );
        }
        Commands::Ls { format } => {
            let mut projects = ProjectStore::new(layout).list_projects()?;
            projects.sort();
            match format {
                OutputFormat::Text => {
                    for project in &projects {
                        println!("{project}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
            }
        }
        Commands::Info {
            project_name,
            format,
        } => {
            let store = ProjectStore::new(layout);
            let config = store.resolve_project(
                project_name.as_deref().unwrap_or_default(),
                &mut PromptSelector::default(),
            )?;
            match format {
                OutputFormat::Text => println!("{}", render_text(&config)),
                OutputFormat::Json => print!("{}", render_json(&config)?),
            }
        }
        Commands::SetLocal {
            project_name,
            local_path,
        } => {
            let writer = LocalOverrideWriter::new(layout);
            let path = writer.set_local(&project_name, &local_path)?;
            println!(
                "{} Local config file created: {}",
                style("✓").green(),
                path.display()
            );
        }
        Commands::SetLocalWd => {
            let store = ProjectStore::new(layout.clone());
            let writer = LocalOverrideWriter::new(layout);
            let (project, path) =
                writer.set_local_from_working_directory(&store, &mut PromptSelector::default())?;
            println!(
                "{} Local config file created for {}: {}",
                style("✓").green(),
                style(project).bold(),
                path.display()
            );
        }
    }

    Ok(())
}

fn load_settings(explicit: Option<&std::path::Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Settings::default_path(),
    };
    let settings = match path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    Ok(settings.with_env_overrides())
}
