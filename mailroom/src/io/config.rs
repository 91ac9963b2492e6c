//! Mailroom configuration loaded from `mailroom.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::money::Amount;
use crate::core::registry::{DonorSeed, Registry, default_seeds};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mailroom.toml";

/// Mailroom configuration (TOML).
///
/// Every field is optional. Missing fields fall back to the built-in donor
/// history and the system temp directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MailroomConfig {
    /// Directory thank-you letters are written to.
    pub letters_dir: Option<PathBuf>,

    /// Replaces the built-in donor history when present.
    pub donors: Option<Vec<SeedDonorConfig>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedDonorConfig {
    pub name: String,
    /// Total donated so far, in dollars.
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub donations: u32,
}

impl MailroomConfig {
    pub fn validate(&self) -> Result<()> {
        if self
            .letters_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(anyhow!("letters_dir must not be empty"));
        }
        Registry::seeded(&self.seeds()?)?;
        Ok(())
    }

    /// Resolved letters directory (system temp dir when unset).
    pub fn letters_dir(&self) -> PathBuf {
        self.letters_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Donor history to seed the registry with.
    pub fn seeds(&self) -> Result<Vec<DonorSeed>> {
        let Some(donors) = &self.donors else {
            return Ok(default_seeds());
        };
        donors
            .iter()
            .map(|donor| -> Result<DonorSeed> {
                let total = Amount::from_f64(donor.total)
                    .with_context(|| format!("seed donor '{}' total", donor.name))?;
                Ok(DonorSeed {
                    name: donor.name.clone(),
                    total,
                    donations: donor.donations,
                })
            })
            .collect()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `MailroomConfig::default()`.
pub fn load_config(path: &Path) -> Result<MailroomConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config not found, using defaults");
        return Ok(MailroomConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: MailroomConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}
