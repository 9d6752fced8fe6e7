use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tpfoyer")]
#[command(about = "Manage foyer (residence) records")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override storage.data_dir from config
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Override storage.backend from config
    #[arg(long, global = true, value_enum)]
    pub backend: Option<Backend>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Memory,
    File,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every foyer
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one foyer
    Get { id: i64 },
    /// Add a foyer from flags or a JSON payload
    Add {
        #[arg(long)]
        nom: Option<String>,
        #[arg(long)]
        capacite: Option<i64>,
        /// JSON foyer; `null` is rejected
        #[arg(long, conflicts_with_all = ["nom", "capacite"])]
        json: Option<String>,
    },
    /// Change the name and/or capacity of a foyer
    Modify {
        id: i64,
        #[arg(long)]
        nom: Option<String>,
        #[arg(long)]
        capacite: Option<i64>,
    },
    /// Remove a foyer
    Remove { id: i64 },
}

impl CliConfig {
    /// 載入配置檔（若有指定），再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(backend) = self.backend {
            config.storage.backend = backend.as_str().to_string();
        }

        config.validate()?;
        Ok(config)
    }
}
