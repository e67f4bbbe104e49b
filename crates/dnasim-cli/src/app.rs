use dnasim_core::storage::{open_store, StoreBackend};
use dnasim_core::{DnaSimError, PresetStore};

use crate::cli::Cli;
use crate::config::{load_config, resolve_backend, resolve_config_path, DnaSimConfig};

/// Settings shared by every command.
pub struct AppContext {
    pub config: DnaSimConfig,
    db: Option<String>,
    quiet: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref())?;
        let config = load_config(&config_path)?;
        Ok(Self {
            config,
            db: cli.db.clone(),
            quiet: cli.quiet,
        })
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn backend(&self, memory: bool) -> anyhow::Result<StoreBackend> {
        resolve_backend(&self.config, self.db.as_deref(), memory)
    }

    /// Open the configured store, refusing the in-memory backend: presets
    /// saved by one CLI invocation must be there for the next.
    pub fn open_durable_store(&self) -> anyhow::Result<Box<dyn PresetStore>> {
        let backend = self.backend(false)?;
        if !backend.is_durable() {
            return Err(DnaSimError::InvalidInput(
                "Preset commands need a SQLite store; pass --db PATH, set DNASIM_DATABASE, or set storage.backend = \"sqlite\" in the config".to_string(),
            )
            .into());
        }
        Ok(open_store(&backend)?)
    }
}
