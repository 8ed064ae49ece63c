use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "miniblog", version, about = "Browse and publish posts from a REST backend")]
pub struct Cli {
    /// Path to a config file (defaults to the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override how many posts a fetch requests
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Write logs to this file instead of the user cache dir
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, applies flag overrides and validates the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            config.api.fetch_limit = limit;
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(Config::log_path)
    }
}
