//! Classifier heuristics as swappable data.
//!
//! Marker rules and the confidence threshold live here rather than in the
//! detection control flow, so they can be tuned and tested independently.

use serde::{Deserialize, Serialize};

use crate::breaks::BreakKind;

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Invalid pattern in rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        source: regex::Error,
    },
}

/// One marker rule: a regex over the raw text that signals an expectation
/// break of a fixed kind with a fixed confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerRule {
    /// Rule name, used in error reporting and for registration-order ties.
    pub name: String,
    /// Rust-regex pattern (no lookaround, no backreferences).
    pub pattern: String,
    /// Break kind this rule reports.
    pub kind: BreakKind,
    /// Confidence assigned to each match (0.0-1.0).
    pub confidence: f64,
}

impl MarkerRule {
    fn new(name: &str, pattern: &str, kind: BreakKind, confidence: f64) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            kind,
            confidence,
        }
    }
}

/// Tunable classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum confidence for a candidate to be emitted (default 0.55).
    pub confidence_threshold: f64,
    /// Marker rules, in registration order.
    pub rules: Vec<MarkerRule>,
    /// Confidence assigned to reversal pairs found by the capture pass.
    pub reversal_confidence: f64,
    /// Confidence assigned to low-overlap unit boundaries.
    pub boundary_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.55,
            rules: vec![
                MarkerRule::new(
                    "unexpected-reason",
                    r"(?i)\bbecause\s+(?:it|they|he|she|we|you|i|the)\b",
                    BreakKind::Paradox,
                    0.7,
                ),
                MarkerRule::new(
                    "explicit-paradox",
                    r"(?i)\b(?:paradox|contradiction)\b",
                    BreakKind::Paradox,
                    0.9,
                ),
                MarkerRule::new(
                    "modal-clash",
                    r"(?i)\b(?:can|could|must|should)\s+(?:and|but|yet)\s+(?:cannot|can't|couldn't|mustn't|shouldn't)\b",
                    BreakKind::Paradox,
                    0.9,
                ),
                MarkerRule::new(
                    "contrastive-turn",
                    r"(?i)\b(?:but|however|yet|instead|actually)\b",
                    BreakKind::Reversal,
                    0.6,
                ),
                MarkerRule::new(
                    "not-x-but-y",
                    r"(?i)\bnot\s+\w+\s*,?\s+but\s+\w+",
                    BreakKind::Reversal,
                    0.8,
                ),
                MarkerRule::new(
                    "topic-shift",
                    r"(?i)\b(?:meanwhile|suddenly|turns\s+out|speaking\s+of)\b",
                    BreakKind::CategoryShift,
                    0.65,
                ),
                MarkerRule::new(
                    "flat-reading",
                    r"(?i)\b(?:literally|word\s+for\s+word|at\s+face\s+value)\b",
                    BreakKind::Literalization,
                    0.75,
                ),
            ],
            reversal_confidence: 0.85,
            boundary_confidence: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_serdeable() {
        let config = ClassifierConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rules.len(), config.rules.len());
        assert_eq!(back.confidence_threshold, config.confidence_threshold);
    }

    #[test]
    fn test_default_rules_clear_threshold() {
        let config = ClassifierConfig::default();
        for rule in &config.rules {
            assert!(rule.confidence >= config.confidence_threshold, "{}", rule.name);
        }
    }
}
