pub mod azure;
pub mod gcp;

pub use azure::{AzureProvider, OsFlagMode};
pub use gcp::GcpProvider;

use crate::automation::vm::{ProviderCommand, ProviderKind};
use crate::config::{ConfigDocument, ValidationResult};

/// Validation and command construction for one cloud target.
pub trait CloudProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Program and subcommand every creation command starts with.
    fn base_command(&self) -> &'static str;

    fn required_fields(&self) -> &'static [&'static str];

    /// Fields copied into the documentation file, whenever present.
    fn documented_fields(&self) -> &'static [&'static str];

    /// Command printing the identity of the signed-in operator.
    fn identity_command(&self) -> &'static str;

    fn validate(&self, document: &ConfigDocument) -> ValidationResult;

    /// One command per record, in document order. Empty records still yield
    /// the base command with its trailing flags.
    fn build_commands(&self, document: &ConfigDocument) -> Vec<ProviderCommand>;

    fn name(&self) -> &'static str {
        self.kind().label()
    }
}

pub fn create_provider(kind: ProviderKind, os_flag: OsFlagMode) -> Box<dyn CloudProvider> {
    match kind {
        ProviderKind::Azure => Box::new(AzureProvider::new(os_flag)),
        ProviderKind::Gcp => Box::new(GcpProvider::new()),
    }
}
