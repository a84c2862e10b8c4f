//! JSON-backed customer directory with normalized-identity lookup.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::config::{FILTER_CUTOFF, FILTER_LIMIT, NAME_MATCH_CUTOFF};
use crate::error::{FisError, Result};
use crate::model::Customer;
use crate::text::{close_matches, display_name, normalize_key};

/// In-memory customer list backed by a JSON file.
///
/// The directory owns its records and its backing path. Loading reads the
/// whole file; every successful mutation rewrites it.
#[derive(Debug)]
pub struct CustomerDirectory {
    path: PathBuf,
    records: Vec<Customer>,
}

impl CustomerDirectory {
    /// Load the directory from `path`.
    ///
    /// A missing or unparseable store yields an empty directory (logged,
    /// never fatal), and the result is re-persisted immediately so the file
    /// exists and is well-formed afterward. Failure of that initial write is
    /// logged and ignored; later mutations will report it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Customer>>(&content) {
                Ok(records) => records,
                Err(err) => {
                    error!("Customer store {} is not valid JSON: {}", path.display(), err);
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Customer store {} not found, starting empty", path.display());
                Vec::new()
            }
            Err(err) => {
                error!("Failed to read customer store {}: {}", path.display(), err);
                Vec::new()
            }
        };

        let directory = Self { path, records };
        if let Err(err) = directory.save() {
            warn!("Could not re-persist customer store on load: {}", err);
        }
        directory
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All customer records, in storage order.
    pub fn customers(&self) -> &[Customer] {
        &self.records
    }

    /// Number of stored customers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no customers.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a customer by name: exact normalized match first, then the
    /// single closest fuzzy match at or above the resolve cutoff.
    pub fn find_by_name(&self, query: &str) -> Option<&Customer> {
        let key = normalize_key(query);
        if key.is_empty() {
            return None;
        }
        if let Some(found) = self.records.iter().find(|c| c.key() == key) {
            return Some(found);
        }

        let keys: Vec<String> = self.records.iter().map(|c| c.key()).collect();
        let matched = close_matches(&key, keys.iter().map(String::as_str), 1, NAME_MATCH_CUTOFF);
        let best = *matched.first()?;
        let idx = keys.iter().position(|k| k == best)?;
        Some(&self.records[idx])
    }

    /// Resolve a typed name to the record printed on a receipt: the
    /// directory match when one exists, otherwise an ad-hoc display-cased
    /// record that is not stored.
    pub fn resolve(&self, query: &str) -> Customer {
        self.find_by_name(query)
            .cloned()
            .unwrap_or_else(|| Customer::new(display_name(query)))
    }

    /// Live-filter customer names against partially typed text.
    ///
    /// The union of substring matches on normalized names and up to
    /// `FILTER_LIMIT` fuzzy candidates at the filter cutoff; empty input
    /// returns every name. Substring matches come first, in storage order.
    pub fn filter_names(&self, typed: &str) -> Vec<String> {
        let key = normalize_key(typed);
        if key.is_empty() {
            return self.records.iter().map(|c| c.name.clone()).collect();
        }

        let mut matched: Vec<String> = Vec::new();
        for customer in &self.records {
            if customer.key().contains(&key) && !matched.contains(&customer.name) {
                matched.push(customer.name.clone());
            }
        }

        let keys: Vec<String> = self.records.iter().map(|c| c.key()).collect();
        let close = close_matches(
            &key,
            keys.iter().map(String::as_str),
            FILTER_LIMIT,
            FILTER_CUTOFF,
        );
        for close_key in close {
            if let Some(idx) = keys.iter().position(|k| k == close_key) {
                let name = &self.records[idx].name;
                if !matched.contains(name) {
                    matched.push(name.clone());
                }
            }
        }
        matched
    }

    /// Add a customer, stored under its display-cased name.
    ///
    /// Rejects an empty normalized name and an identity-equal existing
    /// customer; fuzzy similarity is deliberately not consulted, so
    /// near-duplicates may coexist. Persists on success; when persisting
    /// fails the record is not kept.
    pub fn add(&mut self, raw_name: &str, phone: &str, address: &str) -> Result<&Customer> {
        let key = normalize_key(raw_name);
        if key.is_empty() {
            return Err(FisError::EmptyName);
        }
        if let Some(existing) = self.records.iter().find(|c| c.key() == key) {
            return Err(FisError::Duplicate {
                name: existing.name.clone(),
            });
        }

        self.records
            .push(Customer::with_contact(display_name(raw_name), phone, address));
        if let Err(err) = self.save() {
            self.records.pop();
            return Err(err);
        }
        let idx = self.records.len() - 1;
        Ok(&self.records[idx])
    }

    /// Remove every entry whose normalized name equals the target's.
    ///
    /// Returns whether anything was removed; persists only when it did.
    /// When persisting fails the records are restored.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let key = normalize_key(name);
        let kept: Vec<Customer> = self
            .records
            .iter()
            .filter(|c| c.key() != key)
            .cloned()
            .collect();
        if kept.len() == self.records.len() {
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.records, kept);
        if let Err(err) = self.save() {
            self.records = previous;
            return Err(err);
        }
        Ok(true)
    }

    /// Write the whole directory to the backing file as pretty-printed
    /// JSON, 2-space indentation, non-ASCII preserved.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json.as_bytes()).map_err(|source| {
            error!(
                "Failed to write customer store {}: {}",
                self.path.display(),
                source
            );
            FisError::StoreWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}
