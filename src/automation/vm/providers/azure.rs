use tracing::debug;

use super::CloudProvider;
use crate::automation::vm::{ProviderCommand, ProviderKind};
use crate::config::validator::check_required;
use crate::config::{ConfigDocument, ValidationResult};

const BASE_COMMAND: &str = "az vm create";
const TRAILING_FLAGS: &str = "--generate-ssh-keys --verbose";
const IDENTITY_COMMAND: &str = "az account show --query user.name";

const REQUIRED_FIELDS: &[&str] = &["name", "resource-group", "image", "location", "admin-username"];

// Flag order in the generated command.
const COMMAND_FIELDS: &[&str] = &[
    "name",
    "resource-group",
    "image",
    "location",
    "public-ip-address",
    "computer-name",
    "admin-username",
];

const DOCUMENTED_FIELDS: &[&str] = &[
    "name",
    "purpose",
    "team",
    "os",
    "resource-group",
    "image",
    "location",
];

/// How the Windows flag is derived for records without an `os` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OsFlagMode {
    /// Keep the value from the previous record. The first record starts from
    /// `false`. Matches how existing config files have been processed.
    #[default]
    CarryOver,
    /// Every record without `os` is treated as non-Windows.
    PerRecord,
}

pub struct AzureProvider {
    os_flag: OsFlagMode,
}

impl AzureProvider {
    pub fn new(os_flag: OsFlagMode) -> Self {
        Self { os_flag }
    }
}

impl Default for AzureProvider {
    fn default() -> Self {
        Self::new(OsFlagMode::default())
    }
}

impl CloudProvider for AzureProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Azure
    }

    fn base_command(&self) -> &'static str {
        BASE_COMMAND
    }

    fn required_fields(&self) -> &'static [&'static str] {
        REQUIRED_FIELDS
    }

    fn documented_fields(&self) -> &'static [&'static str] {
        DOCUMENTED_FIELDS
    }

    fn identity_command(&self) -> &'static str {
        IDENTITY_COMMAND
    }

    fn validate(&self, document: &ConfigDocument) -> ValidationResult {
        for (i, record) in document.records().iter().enumerate() {
            check_required(record, i + 1, self.required_fields())?;
        }
        Ok(())
    }

    fn build_commands(&self, document: &ConfigDocument) -> Vec<ProviderCommand> {
        let mut windows_os = false;
        let mut commands = Vec::with_capacity(document.len());

        for record in document.records() {
            match record.get("os") {
                Some(os) => windows_os = os == "windows",
                None if self.os_flag == OsFlagMode::PerRecord => windows_os = false,
                None => debug!(
                    "Instance [{}] has no 'os', keeping windows flag = {}",
                    record.label(),
                    windows_os
                ),
            }

            let mut command = String::from(self.base_command());
            for field in COMMAND_FIELDS {
                if let Some(value) = record.get(field) {
                    command.push_str(&format!(" --{field} {value}"));
                }
            }
            command.push(' ');
            command.push_str(TRAILING_FLAGS);

            commands.push(ProviderCommand::azure(command, windows_os));
        }

        commands
    }
}
