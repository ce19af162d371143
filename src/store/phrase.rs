//! Phrase-group storage

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::engine::PhraseLookup;
use crate::error::{Result, SmsForgeError};
use crate::types::PhraseGroup;

/// Payload for creating a phrase group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseGroupRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub phrases: Vec<String>,
}

/// Payload for updating a phrase group; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhraseGroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub phrases: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PhraseArena {
    next_id: i64,
    groups: BTreeMap<i64, PhraseGroup>,
}

/// Arena of phrase groups keyed by stable numeric id.
///
/// Concurrent callers share the store through a read-write lock; the engine
/// only ever reads via the [`PhraseLookup`] contract.
#[derive(Debug, Default)]
pub struct PhraseStore {
    inner: RwLock<PhraseArena>,
}

impl PhraseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a phrase group. The name must be unused and the phrase list
    /// non-empty.
    pub fn create(&self, req: PhraseGroupRequest) -> Result<PhraseGroup> {
        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(SmsForgeError::validation("phrase group name cannot be empty"));
        }
        if req.phrases.is_empty() {
            return Err(SmsForgeError::validation(
                "phrase group must contain at least one phrase",
            ));
        }

        let mut arena = self.inner.write();
        if arena.groups.values().any(|g| g.name == name) {
            return Err(SmsForgeError::store(format!(
                "phrase group '{}' already exists",
                name
            )));
        }

        arena.next_id += 1;
        let now = Utc::now();
        let group = PhraseGroup {
            id: arena.next_id,
            name,
            description: req.description,
            phrases: req.phrases,
            created_at: now,
            updated_at: now,
        };
        arena.groups.insert(group.id, group.clone());
        tracing::debug!(id = group.id, name = %group.name, "Created phrase group");
        Ok(group)
    }

    /// Get a phrase group by id
    pub fn get(&self, id: i64) -> Result<PhraseGroup> {
        self.inner
            .read()
            .groups
            .get(&id)
            .cloned()
            .ok_or_else(|| SmsForgeError::unknown_phrase_group(id.to_string()))
    }

    /// Get a phrase group by name
    pub fn get_by_name(&self, name: &str) -> Result<PhraseGroup> {
        self.inner
            .read()
            .groups
            .values()
            .find(|g| g.name == name)
            .cloned()
            .ok_or_else(|| SmsForgeError::unknown_phrase_group(name))
    }

    /// All groups in id order
    pub fn list(&self) -> Vec<PhraseGroup> {
        self.inner.read().groups.values().cloned().collect()
    }

    /// Update a phrase group in place
    pub fn update(&self, id: i64, update: PhraseGroupUpdate) -> Result<PhraseGroup> {
        let mut arena = self.inner.write();

        if let Some(new_name) = update.name.as_deref() {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(SmsForgeError::validation("phrase group name cannot be empty"));
            }
            if arena
                .groups
                .values()
                .any(|g| g.id != id && g.name == new_name)
            {
                return Err(SmsForgeError::store(format!(
                    "phrase group '{}' already exists",
                    new_name
                )));
            }
        }
        if let Some(phrases) = update.phrases.as_ref() {
            if phrases.is_empty() {
                return Err(SmsForgeError::validation(
                    "phrase group must contain at least one phrase",
                ));
            }
        }

        let group = arena
            .groups
            .get_mut(&id)
            .ok_or_else(|| SmsForgeError::unknown_phrase_group(id.to_string()))?;

        if let Some(name) = update.name {
            group.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            group.description = description;
        }
        if let Some(phrases) = update.phrases {
            group.phrases = phrases;
        }
        group.updated_at = Utc::now();
        Ok(group.clone())
    }

    /// Delete a phrase group by id
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut arena = self.inner.write();
        arena
            .groups
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| SmsForgeError::unknown_phrase_group(id.to_string()))
    }

    /// Load the arena from a JSON snapshot
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| SmsForgeError::io(e.to_string(), Some(path.display().to_string())))?;
        let arena: PhraseArena = serde_json::from_str(&raw)?;
        Ok(Self {
            inner: RwLock::new(arena),
        })
    }

    /// Write the arena to a JSON snapshot, atomically via a sibling temp file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(&*self.inner.read())?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, raw)
            .map_err(|e| SmsForgeError::io(e.to_string(), Some(tmp.display().to_string())))?;
        fs::rename(&tmp, path)
            .map_err(|e| SmsForgeError::io(e.to_string(), Some(path.display().to_string())))?;
        Ok(())
    }
}

impl PhraseLookup for PhraseStore {
    /// Numeric-looking references are tried as ids first, then as names.
    fn group_phrases(&self, name_or_id: &str) -> Result<Vec<String>> {
        if let Ok(id) = name_or_id.parse::<i64>() {
            if let Ok(group) = self.get(id) {
                return Ok(group.phrases);
            }
        }
        self.get_by_name(name_or_id)
            .map(|group| group.phrases)
            .map_err(|_| SmsForgeError::unknown_phrase_group(name_or_id))
    }
}
