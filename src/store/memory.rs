use super::{Dictionary, DynamicStore};
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    entries: Vec<(String, Dictionary)>,
    denied: HashSet<String>,
    writes: Vec<String>,
}

/// In-process dynamic store.
///
/// Keys are listed in insertion order. Writes to keys marked with
/// [`MemoryStore::deny_writes`] are recorded and rejected, the way the
/// system store rejects writes from an unprivileged process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    /// Construct an empty store
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the dictionary under `key`
    pub fn insert(&self, key: &str, value: Dictionary) {
        let mut state = self.state();
        match state.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => state.entries.push((key.to_string(), value)),
        }
    }

    /// Reject every later write to `key`
    pub fn deny_writes(&self, key: &str) {
        self.state().denied.insert(key.to_string());
    }

    /// Keys of every attempted write, in order
    pub fn writes(&self) -> Vec<String> {
        self.state().writes.clone()
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }
}

impl DynamicStore for MemoryStore {
    fn key_list(&self, pattern: &str) -> Result<Vec<String>> {
        // The system store matches against the whole key.
        let re = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
            Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(self
            .state()
            .entries
            .iter()
            .filter(|(k, _)| re.is_match(k))
            .map(|(k, _)| k.clone())
            .collect())
    }

    fn get(&self, key: &str) -> Option<Dictionary> {
        self.state()
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&self, key: &str, value: &Dictionary) -> bool {
        let mut state = self.state();
        state.writes.push(key.to_string());
        if state.denied.contains(key) {
            return false;
        }
        match state.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.clone(),
            None => state.entries.push((key.to_string(), value.clone())),
        }
        true
    }
}
