//! Text, binary and base-sequence conversions.
//!
//! Every character (UTF-16 code unit) is written as an 8-bit binary number,
//! most significant bit first, and each pair of bits becomes one base
//! according to a [`SymbolMapping`]. All functions here are pure.

pub(crate) mod mapping;

use std::collections::BTreeMap;

use serde::Serialize;

pub use mapping::{Base, MappingIssue, MappingReport, SymbolMapping, BITS_PER_BASE};

/// Width of one character's binary rendering.
pub const BITS_PER_CHAR: usize = 8;

/// One base in an encoded sequence together with the bits it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedUnit {
    pub base: Base,
    pub binary: String,
}

/// Encode `text` into a base sequence.
///
/// Returns an empty sequence when `text` is empty or `mapping` is invalid.
/// A bit pair with no base assigned to it is skipped.
pub fn encode(text: &str, mapping: &SymbolMapping) -> Vec<EncodedUnit> {
    if text.is_empty() || !mapping.is_valid() {
        return Vec::new();
    }

    let inverse = mapping.inverse();
    let mut sequence = Vec::with_capacity(text.len() * BITS_PER_CHAR / BITS_PER_BASE);

    for unit in text.encode_utf16() {
        let bits = char_bits(unit);
        for start in (0..bits.len()).step_by(BITS_PER_BASE) {
            let chunk = &bits[start..(start + BITS_PER_BASE).min(bits.len())];
            if let Some(base) = inverse.get(chunk) {
                sequence.push(EncodedUnit {
                    base: *base,
                    binary: chunk.to_string(),
                });
            }
        }
    }

    sequence
}

/// Space-separated 8-bit binary rendering of `text`, one group per character.
pub fn to_binary_string(text: &str) -> String {
    text.encode_utf16()
        .map(char_bits)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a binary string back into text.
///
/// Anything other than '0' and '1' is ignored. Bits are read in groups of 8
/// and a trailing incomplete group is dropped.
pub fn decode(binary_text: &str) -> String {
    let bits: Vec<u8> = binary_text
        .bytes()
        .filter(|b| *b == b'0' || *b == b'1')
        .collect();

    bits.chunks_exact(BITS_PER_CHAR)
        .map(|window| {
            let value = window
                .iter()
                .fold(0u8, |acc, bit| (acc << 1) | (bit - b'0'));
            char::from(value)
        })
        .collect()
}

/// Base letters of a sequence, e.g. `CAGACGGC`.
pub fn bases_to_string(sequence: &[EncodedUnit]) -> String {
    sequence.iter().map(|unit| unit.base.as_char()).collect()
}

/// Size figures shown alongside an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingSummary {
    pub characters: usize,
    pub bits: usize,
    pub base_pairs: usize,
    pub active: bool,
}

impl EncodingSummary {
    pub fn new(text: &str, mapping: &SymbolMapping, sequence: &[EncodedUnit]) -> Self {
        let characters = text.encode_utf16().count();
        Self {
            characters,
            bits: characters * BITS_PER_CHAR,
            base_pairs: sequence.len(),
            active: mapping.is_valid(),
        }
    }
}

/// Everything derived from one text and mapping: binary form, base
/// sequence, per-base mapping problems and size figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    pub binary: String,
    pub sequence: Vec<EncodedUnit>,
    pub bases: String,
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
    pub summary: EncodingSummary,
}

impl Encoding {
    pub fn compute(text: &str, mapping: &SymbolMapping) -> Self {
        let report = mapping.validate();
        let sequence = encode(text, mapping);
        Self {
            binary: to_binary_string(text),
            bases: bases_to_string(&sequence),
            valid: report.is_valid(),
            errors: report.messages(),
            summary: EncodingSummary::new(text, mapping, &sequence),
            sequence,
        }
    }
}

fn char_bits(unit: u16) -> String {
    format!("{:0width$b}", unit, width = BITS_PER_CHAR)
}
