//! Transient in-memory preset store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::error::{DnaSimError, Result};
use crate::storage::traits::PresetStore;
use crate::storage::types::{NewPreset, Preset};

#[derive(Debug)]
struct Inner {
    next_id: i64,
    presets: BTreeMap<i64, Preset>,
}

/// Preset store held in process memory; contents are lost on exit.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                presets: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| DnaSimError::Storage("Memory store poisoned".to_string()))
    }
}

impl PresetStore for MemoryStore {
    fn list_presets(&self) -> Result<Vec<Preset>> {
        // Ids are handed out in creation order, so key order is creation order.
        Ok(self.lock()?.presets.values().cloned().collect())
    }

    fn get_preset(&self, id: i64) -> Result<Option<Preset>> {
        Ok(self.lock()?.presets.get(&id).cloned())
    }

    fn create_preset(&self, preset: &NewPreset) -> Result<Preset> {
        preset.validate()?;

        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = Preset::from_new(id, preset, Utc::now());
        inner.presets.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete_preset(&self, id: i64) -> Result<bool> {
        Ok(self.lock()?.presets.remove(&id).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
