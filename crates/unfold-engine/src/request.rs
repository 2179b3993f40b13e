//! Request and response payloads for the facade.
//!
//! Style arrives as a free string here — the one place an unknown tag can
//! enter — and is resolved to the closed `Style` enum at the boundary.

use serde::{Deserialize, Serialize};
use unfold_classify::{ContentKind, ExpectationBreak};
use unfold_diagnostics::DiagnosticSet;

/// Constraints as supplied on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintsPayload {
    #[serde(default = "default_true")]
    pub non_coercion: bool,
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Free-form style tag; unknown tags are reported as malformed input.
    #[serde(default)]
    pub style: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ConstraintsPayload {
    fn default() -> Self {
        Self {
            non_coercion: true,
            max_length: None,
            style: None,
        }
    }
}

/// One compilation request: a micro-truth, its boundary insight, and the
/// caller's constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub boundary_insight: String,
    #[serde(default)]
    pub constraints: ConstraintsPayload,
}

/// Validation of a caller-supplied expansion against its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub expansion: String,
    #[serde(default)]
    pub boundary_insight: String,
    #[serde(default)]
    pub constraints: ConstraintsPayload,
}

/// Break analysis of a piece of source text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub breaks: Vec<ExpectationBreak>,
    pub surprise_density: f64,
    pub content_kind: ContentKind,
}

/// Validation outcome plus the inspection scores.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub is_valid: bool,
    pub diagnostics: DiagnosticSet,
    pub coherence_score: f64,
    pub coercion_score: f64,
    pub invitation_score: f64,
    /// Reframe suggestion when coercive language was found.
    pub reframe: Option<String>,
}
