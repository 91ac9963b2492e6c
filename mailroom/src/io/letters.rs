//! Thank-you letter rendering and batch writing.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use minijinja::{Environment, context};
use tracing::{debug, info};

use crate::core::donor::DonorRecord;
use crate::core::registry::Registry;

const THANK_YOU_TEMPLATE: &str = include_str!("templates/thank_you.txt");

/// Timestamp suffix appended to each letter's file name.
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

static ENGINE: LazyLock<LetterEngine> = LazyLock::new(LetterEngine::new);

/// Template engine wrapper around minijinja.
struct LetterEngine {
    env: Environment<'static>,
}

impl LetterEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("thank_you", THANK_YOU_TEMPLATE)
            .expect("thank_you template should be valid");
        Self { env }
    }

    fn render(&self, record: &DonorRecord) -> Result<String> {
        let template = self.env.get_template("thank_you")?;
        let rendered = template.render(context! {
            name => record.name.as_str(),
            total => record.total.to_string(),
        })?;
        Ok(rendered)
    }
}

/// Render the thank-you letter for one donor.
pub fn render_letter(record: &DonorRecord) -> Result<String> {
    ENGINE
        .render(record)
        .with_context(|| format!("render letter for {}", record.name))
}

/// `<display name><YYYYMMDD-HHMMSS>.txt`, with path separators replaced.
pub fn letter_file_name(name: &str, stamp: NaiveDateTime) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}{}.txt", stamp.format(STAMP_FORMAT))
}

/// File name for the next letter in a batch, unique among `used`.
///
/// Distinct donors can share a sanitized name (`AC/DC` and `AC_DC`); later
/// ones get a `-2`, `-3`, ... suffix after the timestamp.
fn unique_file_name(used: &mut HashSet<String>, name: &str, stamp: NaiveDateTime) -> String {
    let base = letter_file_name(name, stamp);
    let stem = base.strip_suffix(".txt").unwrap_or(&base).to_string();
    let mut candidate = base;
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{stem}-{n}.txt");
        n += 1;
    }
    candidate
}

/// Write one letter per donor into `dir`, in registry order.
///
/// Creates `dir` if needed. Every donor gets its own file. The first failure
/// aborts the batch.
pub fn write_letters(
    registry: &Registry,
    dir: &Path,
    stamp: NaiveDateTime,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    let mut used = HashSet::with_capacity(registry.len());
    let mut written = Vec::with_capacity(registry.len());
    for record in registry.iter() {
        let path = dir.join(unique_file_name(&mut used, &record.name, stamp));
        let letter = render_letter(record)?;
        fs::write(&path, letter).with_context(|| format!("write letter {}", path.display()))?;
        debug!(donor = %record.name, path = %path.display(), "letter written");
        written.push(path);
    }
    info!(count = written.len(), dir = %dir.display(), "letters written");
    Ok(written)
}
