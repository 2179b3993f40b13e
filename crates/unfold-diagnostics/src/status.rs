//! Outcome status resolution.
//!
//! Maps a diagnostic set to the single status of the attempt. Coercion is
//! an absolute gate; quality gates degrade to unstable; everything else
//! is success.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, DiagnosticSet};

/// Terminal status of one compilation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Unstable,
    Failed,
}

impl Status {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Unstable => "unstable",
            Status::Failed => "failed",
        }
    }
}

/// Resolve the overall status from a diagnostic set.
///
/// Precedence: `CoercionDetected` or `InputInvalid` force failure;
/// `UnderCompression`, `Decoherence`, or `LengthExceeded` degrade to
/// unstable; `CoherenceVerified` (or an empty set) is success. A non-empty
/// set carrying none of the above — e.g. a lone `ExpectationBreak` — is
/// still success, since a break is an enrichment signal, not a defect.
pub fn resolve_status(diagnostics: &DiagnosticSet) -> Status {
    if diagnostics.contains(&Diagnostic::CoercionDetected)
        || diagnostics.contains(&Diagnostic::InputInvalid)
    {
        return Status::Failed;
    }
    if diagnostics.contains(&Diagnostic::UnderCompression)
        || diagnostics.contains(&Diagnostic::Decoherence)
        || diagnostics.contains(&Diagnostic::LengthExceeded)
    {
        return Status::Unstable;
    }
    Status::Success
}

/// Human-readable refinement suggestion for a diagnostic, if one applies.
pub fn refinement_hint(diagnostic: Diagnostic) -> Option<&'static str> {
    match diagnostic {
        Diagnostic::UnderCompression => {
            Some("Expand the source further; the insight needs more unfolding.")
        }
        Diagnostic::Decoherence => {
            Some("Refocus the narrative; the boundary insight is getting lost.")
        }
        Diagnostic::CoercionDetected => {
            Some("Reframe as invitation, not demand. Let the reader choose.")
        }
        Diagnostic::LengthExceeded => {
            Some("The expansion is too verbose for the cap. Tighten the narrative.")
        }
        Diagnostic::InputInvalid => {
            Some("Supply non-empty content and a boundary insight.")
        }
        Diagnostic::ExpectationBreak | Diagnostic::CoherenceVerified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_outranks_everything() {
        let set: DiagnosticSet = [
            Diagnostic::CoercionDetected,
            Diagnostic::CoherenceVerified,
            Diagnostic::UnderCompression,
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve_status(&set), Status::Failed);
    }

    #[test]
    fn test_quality_gates_degrade_to_unstable() {
        let set: DiagnosticSet = [Diagnostic::UnderCompression].into_iter().collect();
        assert_eq!(resolve_status(&set), Status::Unstable);
        let set: DiagnosticSet = [Diagnostic::Decoherence].into_iter().collect();
        assert_eq!(resolve_status(&set), Status::Unstable);
    }

    #[test]
    fn test_break_alone_is_success() {
        let set: DiagnosticSet = [Diagnostic::ExpectationBreak].into_iter().collect();
        assert_eq!(resolve_status(&set), Status::Success);
    }

    #[test]
    fn test_empty_set_is_success() {
        assert_eq!(resolve_status(&DiagnosticSet::new()), Status::Success);
    }

    #[test]
    fn test_hints_cover_gates() {
        assert!(refinement_hint(Diagnostic::CoercionDetected).is_some());
        assert!(refinement_hint(Diagnostic::CoherenceVerified).is_none());
    }
}
