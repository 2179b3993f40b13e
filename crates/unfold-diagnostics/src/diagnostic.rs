use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic flags attached to one compilation outcome.
///
/// A closed vocabulary: every flag names one observable condition of the
/// attempt, and an outcome carries a set of them (a break can be detected
/// and coherence still verified, so this is not a single exclusive value).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Diagnostic {
    /// The expansion did not unfold the source far enough.
    UnderCompression,
    /// The boundary insight's key terms are missing from the expansion.
    Decoherence,
    /// The expansion commands or totalizes instead of inviting.
    CoercionDetected,
    /// At least one expectation break was found in the source.
    ExpectationBreak,
    /// All quality gates passed.
    CoherenceVerified,
    /// A required input field was missing, empty, or malformed.
    InputInvalid,
    /// The expansion exceeded the caller's hard length cap.
    LengthExceeded,
}

impl Diagnostic {
    /// Stable string tag, identical to the serde form.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Diagnostic::UnderCompression => "UnderCompression",
            Diagnostic::Decoherence => "Decoherence",
            Diagnostic::CoercionDetected => "CoercionDetected",
            Diagnostic::ExpectationBreak => "ExpectationBreak",
            Diagnostic::CoherenceVerified => "CoherenceVerified",
            Diagnostic::InputInvalid => "InputInvalid",
            Diagnostic::LengthExceeded => "LengthExceeded",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// The set container carried by an outcome. Ordered so serialized output
/// is deterministic.
pub type DiagnosticSet = BTreeSet<Diagnostic>;
