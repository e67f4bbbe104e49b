//! Base-to-binary mapping and its validation rules.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DnaSimError, Result};

/// Number of binary digits each base stands for.
pub const BITS_PER_BASE: usize = 2;

/// One of the four nucleotide symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases, in display order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Base {
    type Err = DnaSimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(Base::A),
            "C" | "c" => Ok(Base::C),
            "G" | "g" => Ok(Base::G),
            "T" | "t" => Ok(Base::T),
            other => Err(DnaSimError::InvalidInput(format!(
                "Unknown base '{}' (expected A, C, G or T)",
                other
            ))),
        }
    }
}

/// Why a single base's code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingIssue {
    /// Code is not exactly two characters long
    WrongLength,
    /// Code contains something other than '0' or '1'
    NonBinary,
    /// Another base uses the same code
    Duplicate,
}

impl MappingIssue {
    pub fn message(self) -> &'static str {
        match self {
            MappingIssue::WrongLength => "Must be 2 bits",
            MappingIssue::NonBinary => "Must contain only 0 or 1",
            MappingIssue::Duplicate => "Duplicate binary value",
        }
    }
}

impl fmt::Display for MappingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-base validation outcome. Empty means the mapping is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    issues: BTreeMap<Base, MappingIssue>,
}

impl MappingReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue(&self, base: Base) -> Option<MappingIssue> {
        self.issues.get(&base).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base, MappingIssue)> + '_ {
        self.issues.iter().map(|(base, issue)| (*base, *issue))
    }

    /// Issues keyed by base letter, with human-readable messages.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(base, issue)| (base.to_string(), issue.message().to_string()))
            .collect()
    }
}

/// Codes assigned to each base. Codes are free-form strings so a mapping
/// can be held while it is being edited; use [`SymbolMapping::validate`]
/// before relying on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMapping {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "G")]
    pub g: String,
    #[serde(rename = "T")]
    pub t: String,
}

impl Default for SymbolMapping {
    fn default() -> Self {
        Self::new("00", "01", "10", "11")
    }
}

impl SymbolMapping {
    pub fn new(
        a: impl Into<String>,
        c: impl Into<String>,
        g: impl Into<String>,
        t: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            c: c.into(),
            g: g.into(),
            t: t.into(),
        }
    }

    pub fn get(&self, base: Base) -> &str {
        match base {
            Base::A => &self.a,
            Base::C => &self.c,
            Base::G => &self.g,
            Base::T => &self.t,
        }
    }

    pub fn set(&mut self, base: Base, code: impl Into<String>) {
        let code = code.into();
        match base {
            Base::A => self.a = code,
            Base::C => self.c = code,
            Base::G => self.g = code,
            Base::T => self.t = code,
        }
    }

    /// Copy of this mapping with one base's code replaced.
    pub fn with(&self, base: Base, code: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(base, code);
        next
    }

    /// `(base, code)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Base, &str)> + '_ {
        Base::ALL.into_iter().map(move |base| (base, self.get(base)))
    }

    /// Check every base's code. Each malformed base gets exactly one issue,
    /// length problems taking precedence over bad digits, and bad digits
    /// over duplicates. Every base sharing a code is flagged.
    pub fn validate(&self) -> MappingReport {
        let mut issues = BTreeMap::new();

        for (base, code) in self.entries() {
            let issue = if code.chars().count() != BITS_PER_BASE {
                Some(MappingIssue::WrongLength)
            } else if !is_binary(code) {
                Some(MappingIssue::NonBinary)
            } else if self.entries().filter(|(_, other)| *other == code).count() > 1 {
                Some(MappingIssue::Duplicate)
            } else {
                None
            };

            if let Some(issue) = issue {
                issues.insert(base, issue);
            }
        }

        MappingReport { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Code -> base lookup. When codes collide the later base wins.
    pub fn inverse(&self) -> HashMap<&str, Base> {
        self.entries().map(|(base, code)| (code, base)).collect()
    }
}

impl fmt::Display for SymbolMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .entries()
            .map(|(base, code)| format!("{}={}", base, code))
            .collect();
        f.write_str(&pairs.join(","))
    }
}

impl FromStr for SymbolMapping {
    type Err = DnaSimError;

    /// Parse `A=00,C=01,G=10,T=11`. Bases left out keep their default code.
    /// Codes are not validated here.
    fn from_str(s: &str) -> Result<Self> {
        let mut mapping = SymbolMapping::default();
        for pair in s.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (base, code) = pair.split_once('=').ok_or_else(|| {
                DnaSimError::InvalidInput(format!(
                    "Invalid mapping '{}' (expected BASE=CODE)",
                    pair
                ))
            })?;
            mapping.set(base.parse()?, code.trim());
        }
        Ok(mapping)
    }
}

pub(crate) fn is_binary(code: &str) -> bool {
    code.chars().all(|c| c == '0' || c == '1')
}
