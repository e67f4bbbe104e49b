//! Preset storage.
//!
//! Two interchangeable backends implement [`PresetStore`]: a transient
//! [`MemoryStore`] and a durable [`SqliteStore`]. [`open_store`] picks one
//! from a [`StoreBackend`] chosen by configuration at start-up.

pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod traits;
pub mod types;

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

pub use memory::MemoryStore;
pub use seed::{default_preset, seed_defaults, DEFAULT_PRESET_NAME};
pub use sqlite::SqliteStore;
pub use traits::PresetStore;
pub use types::{NewPreset, Preset};

/// Which backend to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite(PathBuf),
}

impl StoreBackend {
    pub fn is_durable(&self) -> bool {
        matches!(self, StoreBackend::Sqlite(_))
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Sqlite(path) => write!(f, "sqlite ({})", path.display()),
        }
    }
}

/// Open the preset store for `backend`.
pub fn open_store(backend: &StoreBackend) -> Result<Box<dyn PresetStore>> {
    debug!(%backend, "opening preset store");
    match backend {
        StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StoreBackend::Sqlite(path) => Ok(Box::new(SqliteStore::open(path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory_backend() {
        let store = open_store(&StoreBackend::Memory).unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.list_presets().unwrap().is_empty());
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(StoreBackend::Memory.to_string(), "memory");
        let sqlite = StoreBackend::Sqlite(PathBuf::from("/tmp/presets.db"));
        assert_eq!(sqlite.to_string(), "sqlite (/tmp/presets.db)");
        assert!(sqlite.is_durable());
    }
}
