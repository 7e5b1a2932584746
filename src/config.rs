use crate::storage::{StorageLayout, DEFAULT_BASE_NAME, DEFAULT_METADATA_FILE};
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "./flatsql.toml";
pub const ENV_PREFIX: &str = "FLATSQL";

/// flatsql interactive shell
#[derive(Parser, Debug, Default)]
#[command(name = "flatsql")]
#[command(about = "Interactive record-store shell backed by flat text files", long_about = None)]
pub struct Args {
    /// Config file (defaults to ./flatsql.toml when present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Directory holding the metadata file and table files
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// Prefix of per-table data files (`<base>_<table>.txt`)
    #[arg(short = 'b', long)]
    pub base_name: Option<String>,

    /// Name of the file listing table names
    #[arg(short = 'm', long)]
    pub metadata_file: Option<String>,

    /// Prompt shown before each line
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `flatsql=trace`)
    #[arg(short = 'l', long)]
    pub log_level: Option<String>,

    /// Do not load or save line-editor history
    #[arg(long)]
    pub no_history: bool,
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_base_name")]
    pub base_name: String,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_history")]
    pub history: bool,
    /// Config file that was read, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf { PathBuf::from(".") }
fn default_base_name() -> String { DEFAULT_BASE_NAME.to_string() }
fn default_metadata_file() -> String { DEFAULT_METADATA_FILE.to_string() }
fn default_prompt() -> String { "SQLite> ".to_string() }
fn default_log_level() -> String { "warn".to_string() }
const fn default_history() -> bool { true }

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            base_name: default_base_name(),
            metadata_file: default_metadata_file(),
            prompt: default_prompt(),
            log_level: default_log_level(),
            history: default_history(),
            source: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration with priority: CLI args > ENV > config file > defaults
    pub fn load(args: &Args) -> Result<Self, config::ConfigError> {
        let file = args
            .config
            .clone()
            .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()));
        Self::load_from(args, file.as_deref(), Some(ENV_PREFIX))
    }

    /// Layered load with an explicit config file and environment prefix
    /// (`None` skips that layer).
    pub fn load_from(
        args: &Args,
        file: Option<&Path>,
        env_prefix: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        if let Some(prefix) = env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix).try_parsing(true));
        }

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.source = file.map(Path::to_path_buf);

        // CLI args override everything
        if let Some(dir) = &args.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(base) = &args.base_name {
            config.base_name.clone_from(base);
        }
        if let Some(meta) = &args.metadata_file {
            config.metadata_file.clone_from(meta);
        }
        if let Some(prompt) = &args.prompt {
            config.prompt.clone_from(prompt);
        }
        if let Some(level) = &args.log_level {
            config.log_level.clone_from(level);
        }
        if args.no_history {
            config.history = false;
        }

        Ok(config)
    }

    #[must_use]
    pub fn storage_layout(&self) -> StorageLayout {
        StorageLayout::new(&self.data_dir, &self.base_name, &self.metadata_file)
    }
}
