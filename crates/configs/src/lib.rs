use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Env var overriding `storage.path`.
pub const DATA_PATH_ENV: &str = "DIRECTORY_DATA_PATH";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file on disk, survives restarts.
    #[default]
    File,
    /// Process-local map, lost on exit.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::File, path: default_data_path() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::Compact, filter: default_filter() }
    }
}

fn default_data_path() -> String { "data/directory.json".to_string() }
fn default_filter() -> String { "info".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `CONFIG_PATH`, falling back to defaults when no file exists.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.logging.normalize();
        Ok(())
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        self.normalize_path(std::env::var(DATA_PATH_ENV).ok());
    }

    fn normalize_path(&mut self, override_path: Option<String>) {
        if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
            self.path = path;
        }
        self.path = self.path.trim().to_string();
        if self.path.is_empty() {
            self.path = default_data_path();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::File && (self.path.ends_with('/') || self.path.ends_with('\\')) {
            return Err(anyhow!("storage.path must name a file, got directory {}", self.path));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.filter.trim().is_empty() {
            self.filter = default_filter();
        }
    }
}
