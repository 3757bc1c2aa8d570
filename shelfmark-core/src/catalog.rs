//! The fixed-capacity record collection

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field used to order the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Author,
}

impl SortKey {
    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Title => a.title().cmp(b.title()),
            SortKey::Author => a.author().cmp(b.author()),
        }
    }
}

/// An ordered collection of owned records with a fixed maximum size
///
/// Records are kept contiguous in insertion order. Removal shifts later
/// records down by one; only the sort methods reorder. Identifier
/// uniqueness is the caller's job: lookups return the first match.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
    capacity: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl Catalog {
    /// Create an empty catalog with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog holding at most `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append a record, taking ownership of it.
    ///
    /// Duplicate identifiers are not checked. A full catalog hands the
    /// record back inside [`CatalogError::Full`].
    pub fn add(&mut self, record: Record) -> std::result::Result<(), CatalogError> {
        if self.is_full() {
            tracing::warn!(
                identifier = record.identifier(),
                capacity = self.capacity,
                "catalog full, record rejected"
            );
            return Err(CatalogError::Full {
                capacity: self.capacity,
                record: Box::new(record),
            });
        }
        tracing::debug!(identifier = record.identifier(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Remove the first record with this identifier and return it
    pub fn remove(&mut self, identifier: &str) -> std::result::Result<Record, CatalogError> {
        let index = self
            .position(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        // Vec::remove shifts the tail down, keeping storage contiguous
        let record = self.records.remove(index);
        tracing::debug!(identifier, index, "record removed");
        Ok(record)
    }

    /// Whether any record carries this identifier
    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    /// First record whose identifier equals `identifier` exactly
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.identifier() == identifier)
    }

    fn find_by_identifier_mut(&mut self, identifier: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.identifier() == identifier)
    }

    /// First record whose title contains `substring` (case-sensitive)
    pub fn find_by_title(&self, substring: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.title().contains(substring))
    }

    /// All records in storage order
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Mark an available record as borrowed
    pub fn borrow(&mut self, identifier: &str) -> std::result::Result<(), CatalogError> {
        let record = self
            .find_by_identifier_mut(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        if !record.is_available() {
            return Err(CatalogError::AlreadyBorrowed(identifier.to_string()));
        }
        record.set_available(false);
        tracing::debug!(identifier, "record borrowed");
        Ok(())
    }

    /// Mark a borrowed record as available again
    pub fn return_item(&mut self, identifier: &str) -> std::result::Result<(), CatalogError> {
        let record = self
            .find_by_identifier_mut(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        if record.is_available() {
            return Err(CatalogError::NotBorrowed(identifier.to_string()));
        }
        record.set_available(true);
        tracing::debug!(identifier, "record returned");
        Ok(())
    }

    /// Change the price of the record with this identifier
    pub fn update_price(&mut self, identifier: &str, price: f64) -> Result<()> {
        let record = self
            .find_by_identifier_mut(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        record.update_price(price)?;
        tracing::debug!(identifier, price, "price updated");
        Ok(())
    }

    /// Change the publication year of the record with this identifier
    pub fn update_year(&mut self, identifier: &str, year: i32) -> Result<()> {
        let record = self
            .find_by_identifier_mut(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        record.update_year(year)?;
        tracing::debug!(identifier, year, "year updated");
        Ok(())
    }

    /// Reorder records by the given field, ascending byte-wise.
    ///
    /// The sort is stable: records with equal keys keep their relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.records.len() < 2 {
            return;
        }
        self.records.sort_by(|a, b| key.compare(a, b));
        tracing::debug!(?key, count = self.records.len(), "catalog sorted");
    }

    pub fn sort_by_title(&mut self) {
        self.sort_by(SortKey::Title);
    }

    pub fn sort_by_author(&mut self) {
        self.sort_by(SortKey::Author);
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.identifier() == identifier)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
