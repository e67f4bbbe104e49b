//! Default preset created on first start.

use tracing::info;

use crate::codec::SymbolMapping;
use crate::error::Result;
use crate::storage::traits::PresetStore;
use crate::storage::types::{NewPreset, Preset};

pub const DEFAULT_PRESET_NAME: &str = "Standard DNA Encoding";
pub const DEFAULT_PRESET_TEXT: &str = "Hello World";

/// The preset seeded into an empty store.
pub fn default_preset() -> NewPreset {
    NewPreset::new(
        DEFAULT_PRESET_NAME,
        DEFAULT_PRESET_TEXT,
        &SymbolMapping::default(),
    )
}

/// Create the default preset if the store holds none.
///
/// Returns the created preset, or `None` when the store already had data.
pub fn seed_defaults(store: &dyn PresetStore) -> Result<Option<Preset>> {
    if !store.list_presets()?.is_empty() {
        return Ok(None);
    }

    let preset = store.create_preset(&default_preset())?;
    info!(id = preset.id, name = %preset.name, "seeded default preset");
    Ok(Some(preset))
}
