//! # DNA Sim Core
//!
//! Core library for dnasim - an educational simulator that encodes text into
//! a sequence of DNA bases and keeps named presets of its configuration.
//!
//! This crate provides the codec, the preset storage abstractions and the
//! data models independent of the CLI and HTTP interfaces.
//!
//! ## Architecture
//!
//! - **codec**: Text <-> binary <-> base sequence conversion and mapping validation
//! - **storage**: Preset store trait, in-memory and SQLite backends, seeding

pub mod codec;
pub mod error;
pub mod storage;

pub use codec::{decode, encode, to_binary_string, Base, EncodedUnit, Encoding, SymbolMapping};
pub use error::{DnaSimError, Result};
pub use storage::PresetStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
