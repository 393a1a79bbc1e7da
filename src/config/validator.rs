//! Building blocks for the per-provider validation policies.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::{InstanceRecord, ValidationError};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("name pattern is valid"));

/// Fails on the first field of `required` that the record does not define.
/// Only presence is checked; an empty value is accepted.
pub fn check_required(
    record: &InstanceRecord,
    index: usize,
    required: &[&'static str],
) -> Result<(), ValidationError> {
    match required.iter().copied().find(|field| !record.contains_key(field)) {
        Some(field) => {
            debug!("Instance {} lacks '{}'", index, field);
            Err(ValidationError::MissingField {
                index,
                label: record.label().to_string(),
                field,
            })
        }
        None => Ok(()),
    }
}

/// Requires the record's `name` to consist solely of lowercase ASCII letters
/// and digits. A missing name is reported as a missing field.
pub fn check_lowercase_name(record: &InstanceRecord, index: usize) -> Result<(), ValidationError> {
    let name = record.get("name").ok_or_else(|| ValidationError::MissingField {
        index,
        label: record.label().to_string(),
        field: "name",
    })?;

    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNameFormat {
            index,
            label: record.label().to_string(),
            name: name.to_string(),
        })
    }
}
