//! In-memory donor registry keyed by normalized name.
//!
//! Records keep insertion order (seeds first, then donors created at runtime)
//! so listings and letter batches are deterministic. Lookups are
//! case-insensitive through [`normalize_name`].

use std::collections::HashMap;

use anyhow::{Result, anyhow};

use crate::core::donor::DonorRecord;
use crate::core::money::Amount;

/// Starting history for a donor loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorSeed {
    pub name: String,
    pub total: Amount,
    pub donations: u32,
}

impl DonorSeed {
    pub fn new(name: &str, total_cents: i64, donations: u32) -> Self {
        Self {
            name: name.to_string(),
            total: Amount::from_cents(total_cents),
            donations,
        }
    }
}

/// Built-in donor history used when no configuration replaces it.
pub fn default_seeds() -> Vec<DonorSeed> {
    vec![
        DonorSeed::new("Steve Jobs", 100_240, 2),
        DonorSeed::new("Jeff Bezos", 87_733, 1),
        DonorSeed::new("Bill Gates", 65_378_449, 2),
        DonorSeed::new("Mark Zuckerberg", 1_639_610, 3),
        DonorSeed::new("Paul Allen", 70_842, 3),
    ]
}

/// Registry key for a donor name: trimmed and uppercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<DonorRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from seed history.
    ///
    /// Rejects blank names, duplicate names (case-insensitive) and seeds that
    /// claim a non-zero total with no donations.
    pub fn seeded(seeds: &[DonorSeed]) -> Result<Self> {
        let mut registry = Self::new();
        for seed in seeds {
            let key = normalize_name(&seed.name);
            if key.is_empty() {
                return Err(anyhow!("seed donor name must not be blank"));
            }
            if registry.index.contains_key(&key) {
                return Err(anyhow!("duplicate seed donor '{}'", seed.name.trim()));
            }
            if seed.donations == 0 && seed.total != Amount::ZERO {
                return Err(anyhow!(
                    "seed donor '{}' has total {} but no donations",
                    seed.name.trim(),
                    seed.total
                ));
            }
            registry.insert(
                key,
                DonorRecord::with_history(&seed.name, seed.total, seed.donations),
            );
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&DonorRecord> {
        self.index
            .get(&normalize_name(name))
            .map(|&slot| &self.records[slot])
    }

    /// Case-insensitive lookup, creating a zero-valued record if absent.
    pub fn find_or_create(&mut self, name: &str) -> &mut DonorRecord {
        let key = normalize_name(name);
        let slot = match self.index.get(&key).copied() {
            Some(slot) => slot,
            None => self.insert(key, DonorRecord::new(name)),
        };
        &mut self.records[slot]
    }

    /// Record a donation against `name`, creating the donor on first gift.
    pub fn record_donation(&mut self, name: &str, amount: Amount) -> &DonorRecord {
        let record = self.find_or_create(name);
        record.record_donation(amount);
        record
    }

    /// Registry keys in insertion order.
    pub fn list_donors(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(|record| normalize_name(&record.name))
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DonorRecord> {
        self.records.iter()
    }

    fn insert(&mut self, key: String, record: DonorRecord) -> usize {
        let slot = self.records.len();
        self.records.push(record);
        self.index.insert(key, slot);
        slot
    }
}
