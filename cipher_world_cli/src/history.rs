//! JSON-backed store for saved cipher results.
//!
//! The whole history is kept in memory and rewritten to the backing file as
//! one pretty-printed JSON array on every append or delete, matching the
//! legacy `cipher_history.json` format field for field.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;
use serde::{Deserialize, Serialize};

/// One saved cipher run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub cipher_type: String,
    pub cipher_class: String,
    pub operation: String,
    pub plaintext: String,
    pub key: String,
    pub result: String,
}

pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Opens the store at `path`, treating a missing or unreadable file as
    /// an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries: Vec<HistoryEntry> = fs::read(&path)
            .ok()
            .and_then(|data| serde_json::from_slice(&data).ok())
            .unwrap_or_default();
        debug!("loaded {} history entries from {}", entries.len(), path.display());
        Self { path, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends a timestamped entry and rewrites the backing file.
    pub fn record(
        &mut self,
        cipher_type: &str,
        cipher_class: &str,
        operation: &str,
        plaintext: &str,
        key: &str,
        result: &str,
    ) -> Result<()> {
        self.entries.push(HistoryEntry {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            cipher_type: cipher_type.to_owned(),
            cipher_class: cipher_class.to_owned(),
            operation: operation.to_owned(),
            plaintext: plaintext.to_owned(),
            key: key.to_owned(),
            result: result.to_owned(),
        });
        self.persist()
    }

    /// Removes the entry at `index` (0-based) and rewrites the backing file.
    pub fn delete(&mut self, index: usize) -> Result<HistoryEntry> {
        if index >= self.entries.len() {
            anyhow::bail!(
                "no history entry #{} (history holds {} entries)",
                index + 1,
                self.entries.len()
            );
        }
        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Case-insensitive substring search over plaintext, cipher label, and
    /// result, optionally narrowed to a single operation.
    pub fn filter(&self, search: &str, operation: Option<&str>) -> Vec<&HistoryEntry> {
        let needle = search.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                let text_match = needle.is_empty()
                    || entry.plaintext.to_lowercase().contains(&needle)
                    || entry.cipher_type.to_lowercase().contains(&needle)
                    || entry.result.to_lowercase().contains(&needle);
                let op_match = operation.map_or(true, |op| entry.operation == op);
                text_match && op_match
            })
            .collect()
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("writing history to {}", self.path.display()))
    }
}
