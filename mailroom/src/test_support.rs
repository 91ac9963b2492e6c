//! Test-only helpers for constructing donor registries.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::registry::{DonorSeed, Registry, default_seeds};

/// Registry populated with the built-in donor history.
pub fn seeded_registry() -> Registry {
    Registry::seeded(&default_seeds()).expect("default seeds are valid")
}

/// Registry from `(name, total_cents, donations)` triples, in order.
pub fn registry_with(donors: &[(&str, i64, u32)]) -> Registry {
    let seeds: Vec<DonorSeed> = donors
        .iter()
        .map(|&(name, total_cents, donations)| DonorSeed::new(name, total_cents, donations))
        .collect();
    Registry::seeded(&seeds).expect("fixture seeds are valid")
}

/// Deterministic letter timestamp: 2024-01-02 03:04:05.
pub fn fixed_stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|date| date.and_hms_opt(3, 4, 5))
        .expect("valid fixed timestamp")
}
