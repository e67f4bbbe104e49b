//! Preset store trait definition.
//!
//! The `PresetStore` trait defines the interface every preset backend
//! implements, so the server and CLI can run against the in-memory store or
//! the SQLite store without changing their logic.

use super::types::{NewPreset, Preset};
use crate::error::Result;

/// Persistence interface for presets.
///
/// All implementations must ensure:
/// - Each call is atomic on its own
/// - Ids are unique and increase with creation order
/// - A created preset is visible to every later `list_presets`/`get_preset`
///
/// Presets are never updated in place; they are created and deleted.
pub trait PresetStore: Send + Sync {
    /// List every preset in creation order.
    fn list_presets(&self) -> Result<Vec<Preset>>;

    /// Get a preset by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(preset))` if found, `Ok(None)` if not found.
    fn get_preset(&self, id: i64) -> Result<Option<Preset>>;

    /// Save a new preset, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DnaSimError::Validation` if the name is blank or a mapping
    /// field is not two binary digits.
    fn create_preset(&self, preset: &NewPreset) -> Result<Preset>;

    /// Delete a preset.
    ///
    /// # Returns
    ///
    /// Returns `true` if a preset was removed and `false` if no preset had
    /// that id; deleting a missing id is not an error.
    fn delete_preset(&self, id: i64) -> Result<bool>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
