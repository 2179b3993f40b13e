use serde::{Deserialize, Serialize};
use unfold_diagnostics::{Diagnostic, DiagnosticSet, Status};

/// Per-attempt measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileMetadata {
    /// Expectation breaks found in the source.
    pub breaks_detected: usize,
    /// Fraction of insight key terms carried into the song (0.0-1.0).
    pub coherence_score: f64,
}

/// The outcome of one compilation attempt. Constructed once, returned,
/// never stored.
///
/// Invariants: `compression_ratio > 0`; `coherence_score` in `[0, 1]`;
/// a failed status withholds the song; a success carries
/// `CoherenceVerified` and no `CoercionDetected`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationResult {
    pub status: Status,
    pub song: String,
    pub diagnostics: DiagnosticSet,
    /// Song length over source length (character counts).
    pub compression_ratio: f64,
    pub metadata: CompileMetadata,
}

impl CompilationResult {
    /// Failure shape for missing, empty, or malformed required input. No
    /// expansion was performed, so the ratio is the identity 1.0.
    pub fn input_failure() -> Self {
        let mut diagnostics = DiagnosticSet::new();
        diagnostics.insert(Diagnostic::InputInvalid);
        Self {
            status: Status::Failed,
            song: String::new(),
            diagnostics,
            compression_ratio: 1.0,
            metadata: CompileMetadata {
                breaks_detected: 0,
                coherence_score: 0.0,
            },
        }
    }

    pub fn needs_refinement(&self) -> bool {
        self.status == Status::Unstable
    }
}
