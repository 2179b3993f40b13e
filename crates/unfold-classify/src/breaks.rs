use serde::{Deserialize, Serialize};

/// Contradiction type of a detected expectation break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakKind {
    /// The continuation affirms and denies the same expectation.
    Paradox,
    /// The continuation inverts the setup (negation, contrast, swap).
    Reversal,
    /// The continuation jumps to an unrelated frame.
    CategoryShift,
    /// An abstract setup is completed in a flatly concrete sense.
    Literalization,
}

impl BreakKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            BreakKind::Paradox => "paradox",
            BreakKind::Reversal => "reversal",
            BreakKind::CategoryShift => "category-shift",
            BreakKind::Literalization => "literalization",
        }
    }
}

/// A point where the text violates the continuation its preceding unit
/// implied. Produced by the classifier, never mutated afterwards, scoped
/// to one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationBreak {
    /// Contradiction type.
    pub kind: BreakKind,
    /// Byte offset into the source text, strictly within `[0, len)`.
    pub position: usize,
    /// The matched source fragment that triggered the break.
    pub excerpt: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}
