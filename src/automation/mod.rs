pub mod exec;
pub mod prompt;
pub mod vm;

pub use exec::{CommandRunner, ExecutionError, ShellRunner};
pub use prompt::{AutoConfirm, Confirmer, LineConfirmer};
pub use vm::VmCreationManager;
