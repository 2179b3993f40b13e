pub mod diagnostic;
pub mod status;

pub use diagnostic::{Diagnostic, DiagnosticSet};
pub use status::{refinement_hint, resolve_status, Status};
