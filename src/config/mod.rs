use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub mod parser;
pub mod validation;
pub mod validator;

pub use parser::parse_document;
pub use validation::{ValidationError, ValidationReason, ValidationResult};

/// Maximum number of instances read from a single configuration file.
pub const MAX_INSTANCES: usize = 10;

/// One `[section]` block of a configuration file.
///
/// Fields are kept in the order they were read, duplicates included. Lookups
/// resolve to the last occurrence of a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceRecord {
    label: String,
    fields: Vec<(String, String)>,
}

impl InstanceRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    /// Section label, without the surrounding brackets.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// All parsed `key = value` lines in file order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered instance records of one configuration file, capped at
/// [`MAX_INSTANCES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    records: Vec<InstanceRecord>,
    ignored: usize,
}

impl ConfigDocument {
    pub(crate) fn new(records: Vec<InstanceRecord>, ignored: usize) -> Self {
        Self { records, ignored }
    }

    pub fn records(&self) -> &[InstanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of section headers dropped because the cap was reached.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

/// Read and parse a configuration file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    let path = path.as_ref();
    info!("Loading configuration from {}", path.display());

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let document = parse_document(&contents);
    debug!(
        "Parsed {} instance(s) from {} ({} ignored past the limit)",
        document.len(),
        path.display(),
        document.ignored()
    );
    Ok(document)
}
