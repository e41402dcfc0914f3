//! Command-line client for the kart combination search.
//!
//! # Architecture
//!
//! ```text
//! main
//!   ├─→ ClientConfig (env + flags)
//!   ├─→ ContentFactory (kart-content) → Session (kart-core)
//!   └─→ Command::execute(&Session) → stdout
//! ```
//!
//! Each invocation is one request: the catalogs are loaded, one query runs
//! against them, and the process exits. Nothing is cached between runs.

pub mod commands;
pub mod config;
pub mod labels;
pub mod logging;
pub mod render;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use commands::{Command, Context};
pub use config::ClientConfig;
pub use labels::Locale;

/// Find character/machine combinations matching a target performance profile
#[derive(Parser, Debug)]
#[command(name = "kart")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Directory containing characters.ron, machines.ron and optional config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output language
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Locale>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Applies flag overrides on top of an environment-derived config.
    pub fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(locale) = self.lang {
            config.locale = locale;
        }
        config
    }
}
