use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::theme::Theme;

/// encomendas - terminal form for recording bakery orders
#[derive(Parser, Debug)]
#[command(name = "encomendas")]
#[command(about = "A terminal form for recording bakery order requests")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Theme to use, overriding the configuration file
    #[arg(long)]
    pub theme: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print the item catalog and exit
    #[arg(long)]
    pub catalog: bool,

    /// List the built-in themes and exit
    #[arg(long)]
    pub themes: bool,
}

impl Cli {
    /// Load the configuration file and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let path = self.config.clone().or_else(AppConfig::default_path);
        let mut config = match &path {
            Some(path) => AppConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => {
                tracing::warn!("No configuration directory available, using defaults");
                AppConfig::default()
            }
        };

        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(AppConfig::default_log_path)
    }

    /// Handle the options that print something and exit.
    ///
    /// Returns `true` when the caller should exit without starting the UI.
    pub fn run_one_shot(&self, config: &AppConfig) -> Result<bool> {
        if self.catalog {
            for item in Catalog.items() {
                println!("{}", item);
            }
            return Ok(true);
        }

        if self.themes {
            print!("{}", theme_list());
            return Ok(true);
        }

        if self.print_config {
            print!("{}", config.to_toml()?);
            return Ok(true);
        }

        Ok(false)
    }
}

/// One "name - description" line per built-in theme
fn theme_list() -> String {
    Theme::builtin()
        .iter()
        .map(|theme| format!("{} - {}\n", theme.name, theme.description))
        .collect()
}

/// Initialize tracing, writing to `path` since stdout belongs to the UI
pub fn init_logging(path: &Path, debug: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    Ok(())
}
