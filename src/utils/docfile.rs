//! Plain-text record of the VMs requested for one provider.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::fs::write_file;
use crate::automation::vm::providers::CloudProvider;
use crate::automation::vm::{CommandOutcome, ProviderKind};
use crate::config::ConfigDocument;

const STATIC_STATUS: &str = "VM Running";

/// Decides the status line written for each instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentationPolicy {
    /// Every instance is reported as running, whatever happened to its
    /// command.
    #[default]
    StaticRunning,
    /// Status follows the command outcome.
    FromOutcome,
}

impl DocumentationPolicy {
    pub fn status(self, outcome: &CommandOutcome) -> &'static str {
        match self {
            DocumentationPolicy::StaticRunning => STATIC_STATUS,
            DocumentationPolicy::FromOutcome => outcome.status(),
        }
    }
}

#[derive(Debug, Error)]
#[error("Failed to write documentation file '{}': {source}", .path.display())]
pub struct DocumentationError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// `<Provider>_VMCreation_<timestamp>.txt`
pub fn documentation_file_name(provider: ProviderKind, timestamp: &str) -> String {
    format!("{}_VMCreation_{}.txt", provider.label(), timestamp)
}

pub struct VmDocumentation<'a> {
    pub timestamp: &'a str,
    pub operator: &'a str,
    pub policy: DocumentationPolicy,
}

impl VmDocumentation<'_> {
    /// Render the document. `outcomes` holds one entry per record, in
    /// record order.
    pub fn render(
        &self,
        provider: &dyn CloudProvider,
        document: &ConfigDocument,
        outcomes: &[CommandOutcome],
    ) -> String {
        let documented = provider.documented_fields();
        let mut data = format!(
            "Date Stamp: {}\nSystem Admin Name: {}\n",
            self.timestamp, self.operator
        );

        for (i, (record, outcome)) in document.records().iter().zip(outcomes).enumerate() {
            data.push_str(&format!(
                "\n{} VM {}\n\nStatus of the VM: {}\n",
                provider.name(),
                i + 1,
                self.policy.status(outcome)
            ));
            for (key, value) in record.fields() {
                if documented.iter().any(|field| *field == key) {
                    data.push_str(&format!("{key}: {value}\n"));
                }
            }
        }

        data
    }

    pub fn write(&self, path: &Path, contents: &str) -> Result<(), DocumentationError> {
        write_file(path, contents.as_bytes()).map_err(|source| DocumentationError {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Documentation written to {}", path.display());
        Ok(())
    }
}
