pub mod clock;
pub mod docfile;
pub mod fs;

pub use clock::{run_timestamp, Clock};
pub use docfile::{DocumentationError, DocumentationPolicy, VmDocumentation};
