pub mod engine;
pub mod request;

pub use engine::{Engine, EngineConfig, EngineError};
pub use request::{Analysis, CompileRequest, ConstraintsPayload, ValidateReport, ValidateRequest};

// The facade re-exports the pipeline vocabulary so callers need one crate.
pub use unfold_classify::{BreakKind, ContentKind, ExpectationBreak};
pub use unfold_compile::{CompilationResult, CompileMetadata};
pub use unfold_diagnostics::{Diagnostic, Status};
pub use unfold_validate::{Constraints, Style};
