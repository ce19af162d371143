//! Core types and structures for sms-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SmsForgeError};

/// Fixed per-message budget, in SMS characters
pub const MAX_CHARS_PER_SMS: usize = 70;

/// Character-counting model applied to a position's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "ASCII")]
    Ascii,
    Zawgyi,
    Unicode,
    Other,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::Unicode
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Ascii => write!(f, "ASCII"),
            Encoding::Zawgyi => write!(f, "Zawgyi"),
            Encoding::Unicode => write!(f, "Unicode"),
            Encoding::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = SmsForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("ascii") => Ok(Encoding::Ascii),
            v if v.eq_ignore_ascii_case("zawgyi") => Ok(Encoding::Zawgyi),
            v if v.eq_ignore_ascii_case("unicode") => Ok(Encoding::Unicode),
            v if v.eq_ignore_ascii_case("other") => Ok(Encoding::Other),
            other => Err(SmsForgeError::invalid_encoding(other)),
        }
    }
}

impl Encoding {
    /// All recognized encodings, in display order
    pub fn all() -> [Encoding; 4] {
        [
            Encoding::Ascii,
            Encoding::Zawgyi,
            Encoding::Unicode,
            Encoding::Other,
        ]
    }
}

/// Generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateMode {
    Sequential,
    Random,
}

impl Default for GenerateMode {
    fn default() -> Self {
        Self::Sequential
    }
}

impl std::fmt::Display for GenerateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateMode::Sequential => write!(f, "sequential"),
            GenerateMode::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for GenerateMode {
    type Err = SmsForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("sequential") => Ok(GenerateMode::Sequential),
            v if v.eq_ignore_ascii_case("random") => Ok(GenerateMode::Random),
            other => Err(SmsForgeError::validation(format!(
                "Unknown generation mode '{}', expected 'sequential' or 'random'",
                other
            ))),
        }
    }
}

/// One generation request as produced by the transport layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    /// Bracketed template; used to derive positions when no explicit list is given
    pub template: Option<String>,
    /// Global encoding, broadcast to positions missing from `encodings`
    pub encoding: Option<Encoding>,
    /// Per-position encoding overrides, keyed by position label
    pub encodings: HashMap<String, Encoding>,
    pub generate_mode: GenerateMode,
    /// Configured candidate values per position label
    pub positions: HashMap<String, Vec<String>>,
    /// Position label -> phrase-group name or numeric id
    pub phrase_groups: HashMap<String, String>,
    /// Explicit ordered position list; overrides template-derived positions
    pub selected_positions: Vec<String>,
}

/// The immutable output for one combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub content: String,
    pub char_count: usize,
    pub is_exceeded: bool,
    pub exceeded_chars: usize,
}

/// Full response for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub results: Vec<GeneratedResult>,
    pub total_count: usize,
    pub exceeded_count: usize,
}

/// A named, ordered, non-empty list of reusable phrases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub phrases: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Label for the position at `index`: `a`..`z`, then `p26`, `p27`, ...
pub fn position_label(index: usize) -> String {
    if index < 26 {
        ((b'a' + index as u8) as char).to_string()
    } else {
        format!("p{}", index)
    }
}
