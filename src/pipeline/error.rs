use thiserror::Error;

use crate::automation::vm::ProviderKind;
use crate::config::ValidationError;

/// Failures that stop a run before any VM is created.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(
        "Expected config files '{}' and '{}', got '{azure}' and '{gcp}'",
        ProviderKind::Azure.config_file_name(),
        ProviderKind::Gcp.config_file_name()
    )]
    FileIdentity { azure: String, gcp: String },

    #[error("{provider} configuration is invalid ({}): {source}", .source.reason())]
    Validation {
        provider: ProviderKind,
        #[source]
        source: ValidationError,
    },
}
