//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use stats_view_domain::{Granularity, StatsViewType};
use std::path::PathBuf;

/// stats-view: resolve and assemble view-all statistics screens
#[derive(Parser, Debug)]
#[command(name = "stats-view")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a view type and assemble its view-all view model
    Resolve(ResolveArgs),

    /// List the view catalog
    Catalog(CatalogArgs),

    /// Check that every catalog entry resolves against the configured wiring
    Doctor(DoctorArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// View type, e.g. clicks, video-plays, INSIGHTS_TODAY
    pub view: StatsViewType,

    /// Time bucket (day, week, month, year); omit for insights views
    #[arg(short, long)]
    pub granularity: Option<Granularity>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
