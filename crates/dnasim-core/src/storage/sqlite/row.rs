//! Preset row type for database queries.

use chrono::{DateTime, Utc};

use crate::error::{DnaSimError, Result};
use crate::storage::types::Preset;

/// Columns selected for every preset query, in [`PresetRow::from_row`] order.
pub const PRESET_COLUMNS: &str =
    "id, name, text_input, mapping_a, mapping_c, mapping_g, mapping_t, created_at";

/// Raw row data from the simulations table, before parsing into domain types.
#[derive(Debug)]
pub struct PresetRow {
    pub id: i64,
    pub name: String,
    pub text_input: String,
    pub mapping_a: String,
    pub mapping_c: String,
    pub mapping_g: String,
    pub mapping_t: String,
    pub created_at: String,
}

impl PresetRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            text_input: row.get(2)?,
            mapping_a: row.get(3)?,
            mapping_c: row.get(4)?,
            mapping_g: row.get(5)?,
            mapping_t: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}

impl TryFrom<PresetRow> for Preset {
    type Error = DnaSimError;

    fn try_from(row: PresetRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| DnaSimError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Preset {
            id: row.id,
            name: row.name,
            text_input: row.text_input,
            mapping_a: row.mapping_a,
            mapping_c: row.mapping_c,
            mapping_g: row.mapping_g,
            mapping_t: row.mapping_t,
            created_at,
        })
    }
}
