use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Azure,
    Gcp,
}

impl ProviderKind {
    /// Prefix used in documentation and archive file names.
    pub fn label(self) -> &'static str {
        match self {
            ProviderKind::Azure => "Azure",
            ProviderKind::Gcp => "GCP",
        }
    }

    /// The only file name accepted for this provider's configuration.
    pub fn config_file_name(self) -> &'static str {
        match self {
            ProviderKind::Azure => "Azure.conf",
            ProviderKind::Gcp => "GCP.conf",
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            ProviderKind::Azure => "MICROSOFT AZURE VM CREATION",
            ProviderKind::Gcp => "GOOGLE CLOUD PLATFORM (GCP) VM CREATION",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A ready-to-run VM creation command for one instance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCommand {
    pub provider: ProviderKind,
    pub command: String,
    /// Azure only: the instance runs a Windows image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_os: Option<bool>,
}

impl ProviderCommand {
    pub fn azure(command: String, windows_os: bool) -> Self {
        Self {
            provider: ProviderKind::Azure,
            command,
            windows_os: Some(windows_os),
        }
    }

    pub fn gcp(command: String) -> Self {
        Self {
            provider: ProviderKind::Gcp,
            command,
            windows_os: None,
        }
    }

    pub fn is_windows(&self) -> bool {
        self.windows_os.unwrap_or(false)
    }
}

impl fmt::Display for ProviderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Shown after a Windows VM is created.
pub const WINDOWS_CREDENTIAL_NOTICE: &str =
    "Windows image requested; set the administrator password through the Azure credential flow before signing in";

/// What happened to a command during the interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `credential_notice` is set when the operator was shown
    /// [`WINDOWS_CREDENTIAL_NOTICE`].
    Created {
        output: String,
        credential_notice: bool,
    },
    Declined,
    Failed(String),
}

impl CommandOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            CommandOutcome::Created { .. } => "VM Running",
            CommandOutcome::Declined => "Skipped",
            CommandOutcome::Failed(_) => "Failed",
        }
    }
}
