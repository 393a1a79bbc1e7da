pub mod instance;
pub mod manager;
pub mod providers;

pub use instance::{CommandOutcome, ProviderCommand, ProviderKind, WINDOWS_CREDENTIAL_NOTICE};
pub use manager::VmCreationManager;
