//! Configuration management for faqbot.
//!
//! Configuration is merged from several layers, later layers winning:
//! - Built-in defaults
//! - Config file (`.faqbot/config.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The configuration is workspace-centric: the database and config file live
//! under `<workspace>/.faqbot/` unless told otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Name of the per-workspace state directory.
pub const DATA_DIR: &str = ".faqbot";

/// Default database file name inside [`DATA_DIR`].
pub const DEFAULT_DB_FILE: &str = "chatbot.db";

/// When the built-in seed records are written during store initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Insert the seed set only when the table holds no records.
    #[default]
    IfEmpty,
    /// Insert the seed set on every initialization, duplicating it across runs.
    Always,
    /// Never insert seed records.
    Never,
}

impl SeedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IfEmpty => "if-empty",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "if-empty" | "if_empty" | "ifempty" => Ok(Self::IfEmpty),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(AppError::Config(format!(
                "Unknown seed policy: {}. Supported: if-empty, always, never",
                other
            ))),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .faqbot/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Database file; relative paths resolve against the workspace
    pub db_path: PathBuf,

    /// Seed behavior on store initialization
    pub seed: SeedPolicy,

    /// Commit bulk imports all-or-nothing
    pub atomic_import: bool,

    /// Log level override
    pub log_level: Option<String>,

    /// Emit logs as JSON
    pub log_json: bool,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    store: Option<StoreSection>,
    import: Option<ImportSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreSection {
    path: Option<String>,
    seed: Option<SeedPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImportSection {
    atomic: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
    json: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            db_path: Path::new(DATA_DIR).join(DEFAULT_DB_FILE),
            seed: SeedPolicy::default(),
            atomic_import: false,
            log_level: None,
            log_json: false,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// `workspace` and `config_file` take precedence over their environment
    /// variables when given.
    ///
    /// Environment variables:
    /// - `FAQBOT_WORKSPACE`: Override workspace path
    /// - `FAQBOT_CONFIG`: Path to config file
    /// - `FAQBOT_DB`: Database file
    /// - `FAQBOT_SEED`: Seed policy (if-empty, always, never)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use faqbot_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None, None).expect("Failed to load config");
    /// println!("Database: {:?}", config.resolved_db_path());
    /// ```
    pub fn load(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = workspace.or_else(|| env_path("FAQBOT_WORKSPACE")) {
            config.workspace = workspace;
        }

        config.config_file = config_file.or_else(|| env_path("FAQBOT_CONFIG"));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.data_dir().join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        // Environment variables override the config file
        if let Some(db) = env_path("FAQBOT_DB") {
            config.db_path = db;
        }

        if let Ok(seed) = std::env::var("FAQBOT_SEED") {
            config.seed = seed.parse()?;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();

        if let Some(store) = config_file.store {
            if let Some(path) = store.path {
                result.db_path = PathBuf::from(path);
            }
            if let Some(seed) = store.seed {
                result.seed = seed;
            }
        }

        if let Some(import) = config_file.import {
            if let Some(atomic) = import.atomic {
                result.atomic_import = atomic;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
            if let Some(json) = logging.json {
                result.log_json = json;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the config file.
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        seed: Option<SeedPolicy>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(db_path) = db_path {
            self.db_path = db_path;
        }

        if let Some(seed) = seed {
            self.seed = seed;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .faqbot directory.
    pub fn data_dir(&self) -> PathBuf {
        self.workspace.join(DATA_DIR)
    }

    /// Database path, resolved against the workspace when relative.
    pub fn resolved_db_path(&self) -> PathBuf {
        if self.db_path.is_absolute() {
            self.db_path.clone()
        } else {
            self.workspace.join(&self.db_path)
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        if !self.workspace.is_dir() {
            return Err(AppError::Config(format!(
                "Workspace is not a directory: {:?}",
                self.workspace
            )));
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path must not be empty".to_string()));
        }

        let db_path = self.resolved_db_path();
        if db_path.is_dir() {
            return Err(AppError::Config(format!(
                "Database path points at a directory: {:?}",
                db_path
            )));
        }

        Ok(())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
