use clap::Parser;
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::error::{ConfigFileSnafu, ConfigParseSnafu, ConfigSnafu};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub db: DbConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub url: String,
}

impl Config {
    pub fn build(filename: &PathBuf) -> Result<Self> {
        let toml_string = fs::read_to_string(filename).context(ConfigFileSnafu)?;
        Self::parse(toml_string.as_str())
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context(ConfigParseSnafu)?;

        // Validate config values
        ensure!(
            config.server.port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );
        ensure!(
            config.db.url.len() > 0,
            ConfigSnafu {
                msg: "Database URL is required.".to_string()
            }
        );

        Ok(config)
    }
}

/// Organizations directory website
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "config.toml")]
    pub config: PathBuf,
}
