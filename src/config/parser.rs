use tracing::{debug, trace};

use super::{ConfigDocument, InstanceRecord, MAX_INSTANCES};

const FIELD_SEPARATOR: &str = " = ";

/// Parse the section-based configuration format.
///
/// A line starting with `[` opens a new instance. Other lines are trimmed and
/// split on `" = "`; anything that does not yield exactly a key and a value is
/// skipped. Headers past [`MAX_INSTANCES`] are dropped together with their
/// bodies.
pub fn parse_document(content: &str) -> ConfigDocument {
    let mut records: Vec<InstanceRecord> = Vec::new();
    let mut current: Option<InstanceRecord> = None;
    let mut headers_seen = 0usize;

    for (line_num, raw) in content.lines().enumerate() {
        if raw.starts_with('[') {
            headers_seen += 1;
            if let Some(record) = current.take() {
                records.push(record);
            }
            if headers_seen <= MAX_INSTANCES {
                current = Some(InstanceRecord::new(section_label(raw)));
            }
            continue;
        }

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = split_field(line) else {
            trace!("Line {}: not a field, skipping", line_num + 1);
            continue;
        };

        match current.as_mut() {
            Some(record) => record.push(key, value),
            None if headers_seen > MAX_INSTANCES => {}
            None => debug!("Line {}: field '{}' outside of any section", line_num + 1, key),
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    let ignored = headers_seen.saturating_sub(MAX_INSTANCES);
    ConfigDocument::new(records, ignored)
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(FIELD_SEPARATOR);
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((key, value))
}

fn section_label(header: &str) -> &str {
    let header = header.trim_end();
    let inner = header.strip_prefix('[').unwrap_or(header);
    inner.strip_suffix(']').unwrap_or(inner).trim()
}
