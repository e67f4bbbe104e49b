//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::mapping::is_binary;
use crate::codec::{Base, SymbolMapping, BITS_PER_BASE};
use crate::error::{DnaSimError, Result};

/// A saved snapshot of the simulator's text and base mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name (not unique)
    pub name: String,

    /// Sample text to encode
    pub text_input: String,

    pub mapping_a: String,
    pub mapping_c: String,
    pub mapping_g: String,
    pub mapping_t: String,

    /// When this preset was saved
    pub created_at: DateTime<Utc>,
}

impl Preset {
    /// Build a stored preset from its create input.
    pub fn from_new(id: i64, preset: &NewPreset, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: preset.name.clone(),
            text_input: preset.text_input.clone(),
            mapping_a: preset.mapping_a.clone(),
            mapping_c: preset.mapping_c.clone(),
            mapping_g: preset.mapping_g.clone(),
            mapping_t: preset.mapping_t.clone(),
            created_at,
        }
    }

    pub fn mapping(&self) -> SymbolMapping {
        SymbolMapping::new(
            self.mapping_a.as_str(),
            self.mapping_c.as_str(),
            self.mapping_g.as_str(),
            self.mapping_t.as_str(),
        )
    }
}

/// Input for creating a preset. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreset {
    pub name: String,
    pub text_input: String,
    pub mapping_a: String,
    pub mapping_c: String,
    pub mapping_g: String,
    pub mapping_t: String,
}

impl NewPreset {
    /// Wire names of the create fields, in validation order.
    pub const FIELDS: [&'static str; 6] = [
        "name",
        "textInput",
        "mappingA",
        "mappingC",
        "mappingG",
        "mappingT",
    ];

    pub fn new(
        name: impl Into<String>,
        text_input: impl Into<String>,
        mapping: &SymbolMapping,
    ) -> Self {
        Self {
            name: name.into(),
            text_input: text_input.into(),
            mapping_a: mapping.get(Base::A).to_string(),
            mapping_c: mapping.get(Base::C).to_string(),
            mapping_g: mapping.get(Base::G).to_string(),
            mapping_t: mapping.get(Base::T).to_string(),
        }
    }

    /// Parse a create payload, reporting the first missing or non-string
    /// field by its wire name, then run [`NewPreset::validate`].
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            DnaSimError::InvalidInput("Request body must be a JSON object".to_string())
        })?;

        let mut fields = Vec::with_capacity(Self::FIELDS.len());
        for field in Self::FIELDS {
            let value = match object.get(field) {
                None => return Err(DnaSimError::validation(field, "Required")),
                Some(serde_json::Value::String(value)) => value.clone(),
                Some(other) => {
                    return Err(DnaSimError::validation(
                        field,
                        format!("Expected string, received {}", json_type_name(other)),
                    ))
                }
            };
            fields.push(value);
        }

        let [name, text_input, mapping_a, mapping_c, mapping_g, mapping_t]: [String; 6] =
            fields
                .try_into()
                .map_err(|_| DnaSimError::Other("Unexpected field count".to_string()))?;
        let preset = Self {
            name,
            text_input,
            mapping_a,
            mapping_c,
            mapping_g,
            mapping_t,
        };
        preset.validate()?;
        Ok(preset)
    }

    /// Check the name is present and each mapping field is two binary digits.
    /// Distinct codes are not required; a preset may capture a mapping that
    /// is still being edited.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DnaSimError::validation("name", "Name is required"));
        }

        let mappings = [
            ("mappingA", &self.mapping_a),
            ("mappingC", &self.mapping_c),
            ("mappingG", &self.mapping_g),
            ("mappingT", &self.mapping_t),
        ];
        for (field, code) in mappings {
            if code.chars().count() != BITS_PER_BASE || !is_binary(code) {
                return Err(DnaSimError::validation(
                    field,
                    "Mapping must be exactly 2 binary digits",
                ));
            }
        }

        Ok(())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
