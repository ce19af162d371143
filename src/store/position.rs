//! Per-position candidate-value storage

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::error::{Result, SmsForgeError};

/// Ordered candidate values per position label.
///
/// Values keep insertion order within a label; duplicates are ignored on add.
#[derive(Debug, Default)]
pub struct PositionStore {
    inner: RwLock<BTreeMap<String, Vec<String>>>,
}

impl PositionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a position, ignoring exact duplicates
    pub fn add_value(&self, position: &str, value: &str) {
        let mut map = self.inner.write();
        let values = map.entry(position.to_string()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }

    /// Replace a position's value list wholesale
    pub fn set_values(&self, position: &str, values: Vec<String>) {
        let mut map = self.inner.write();
        if values.is_empty() {
            map.remove(position);
        } else {
            map.insert(position.to_string(), values);
        }
    }

    /// Values configured for one position, in stored order
    pub fn values(&self, position: &str) -> Vec<String> {
        self.inner.read().get(position).cloned().unwrap_or_default()
    }

    /// All positions and their values
    pub fn all(&self) -> HashMap<String, Vec<String>> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Remove one value from a position
    pub fn remove_value(&self, position: &str, value: &str) -> Result<()> {
        let mut map = self.inner.write();
        let values = map
            .get_mut(position)
            .ok_or_else(|| SmsForgeError::store(format!("position '{}' has no values", position)))?;
        let before = values.len();
        values.retain(|v| v != value);
        if values.len() == before {
            return Err(SmsForgeError::store(format!(
                "value '{}' not found at position '{}'",
                value, position
            )));
        }
        if values.is_empty() {
            map.remove(position);
        }
        Ok(())
    }

    /// Replace one value at a position with another
    pub fn update_value(&self, position: &str, old: &str, new: &str) -> Result<()> {
        let mut map = self.inner.write();
        let values = map
            .get_mut(position)
            .ok_or_else(|| SmsForgeError::store(format!("position '{}' has no values", position)))?;
        match values.iter_mut().find(|v| v.as_str() == old) {
            Some(slot) => {
                *slot = new.to_string();
                Ok(())
            }
            None => Err(SmsForgeError::store(format!(
                "value '{}' not found at position '{}'",
                old, position
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order_and_dedups() {
        let store = PositionStore::new();
        store.add_value("a", "one");
        store.add_value("a", "two");
        store.add_value("a", "one");
        assert_eq!(store.values("a"), vec!["one", "two"]);
        assert!(store.values("b").is_empty());
    }

    #[test]
    fn test_set_and_all() {
        let store = PositionStore::new();
        store.set_values("a", vec!["x".to_string()]);
        store.set_values("b", vec!["y".to_string(), "z".to_string()]);

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all["b"], vec!["y", "z"]);

        store.set_values("b", Vec::new());
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_remove_and_update() {
        let store = PositionStore::new();
        store.set_values("a", vec!["x".to_string(), "y".to_string()]);

        store.update_value("a", "x", "w").unwrap();
        assert_eq!(store.values("a"), vec!["w", "y"]);
        assert!(store.update_value("a", "x", "q").is_err());

        store.remove_value("a", "y").unwrap();
        assert_eq!(store.values("a"), vec!["w"]);
        assert!(store.remove_value("c", "w").is_err());

        store.remove_value("a", "w").unwrap();
        assert!(store.all().is_empty());
    }
}
