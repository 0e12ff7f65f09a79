use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, AdvisorConfig};

/// Look up MEC contraceptive eligibility by medical condition.
#[derive(Debug, Parser)]
#[command(name = "contracare", version)]
pub struct Cli {
    /// CSV reference table; overrides the config file. Without either, the
    /// table is read from `data/contraceptive_data.csv` under the working
    /// directory.
    #[arg(long, env = "CONTRACARE_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Config file location.
    #[arg(long, env = "CONTRACARE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the conditions that can be chosen.
    Conditions,
    /// List the sub-conditions of a condition.
    SubConditions { condition: String },
    /// Show per-method recommendations for a condition and sub-condition.
    Recommend {
        condition: String,
        sub_condition: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Characters in a full-length (category 4) chart bar.
        #[arg(long)]
        chart_width: Option<usize>,
    },
    /// Describe each contraceptive method.
    Methods,
    /// Explain the risk score categories.
    Legend,
    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Config file contents merged with command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub config: AdvisorConfig,
    pub data_path: PathBuf,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> eyre::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => config::default_config_path()?,
        };
        let config = config::load_config(&config_path)?;
        let data_path = cli.data.clone().unwrap_or_else(|| config.data_path.clone());

        Ok(Self {
            config_path,
            config,
            data_path,
        })
    }
}
