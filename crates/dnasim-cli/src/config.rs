use std::path::{Path, PathBuf};

use serde::Deserialize;

use dnasim_core::storage::StoreBackend;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Default, Deserialize)]
pub struct DnaSimConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: BackendKind,
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Memory,
    Sqlite,
}

impl DnaSimConfig {
    /// Backend named by the config file alone.
    pub fn store_backend(&self) -> anyhow::Result<StoreBackend> {
        match self.storage.backend {
            BackendKind::Memory => Ok(StoreBackend::Memory),
            BackendKind::Sqlite => {
                let path = match self.storage.path.as_deref() {
                    Some(path) if !path.trim().is_empty() => PathBuf::from(path),
                    _ => default_database_path()?,
                };
                Ok(StoreBackend::Sqlite(path))
            }
        }
    }
}

/// Pick the store: `--memory` wins, then `--db`/`DNASIM_DATABASE`, then config.
pub fn resolve_backend(
    config: &DnaSimConfig,
    db: Option<&str>,
    memory: bool,
) -> anyhow::Result<StoreBackend> {
    if memory {
        return Ok(StoreBackend::Memory);
    }
    if let Some(path) = db.filter(|path| !path.trim().is_empty()) {
        return Ok(StoreBackend::Sqlite(PathBuf::from(path)));
    }
    config.store_backend()
}

pub fn resolve_config_path(cli_path: Option<&str>) -> anyhow::Result<PathBuf> {
    match cli_path {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

/// Read the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<DnaSimConfig> {
    if !path.exists() {
        return Ok(DnaSimConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<DnaSimConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_database_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("presets.db"))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dnasim"));
        }
    }
    Ok(home_dir()?.join(".config").join("dnasim"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dnasim"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("dnasim"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
