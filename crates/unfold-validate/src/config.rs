//! Validator heuristics as swappable data.
//!
//! Pattern groups and thresholds are configuration, not control flow, so
//! the non-coercion vocabulary can be tuned without touching the checks.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("Invalid pattern in group '{group}': {source}")]
    InvalidPattern {
        group: String,
        source: regex::Error,
    },
}

/// A named group of patterns that all signal the same violation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternGroup {
    pub name: String,
    pub patterns: Vec<String>,
}

impl PatternGroup {
    fn new(name: &str, patterns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Tunable validator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Coercion pattern groups; any group hit counts toward the density.
    pub coercion_groups: Vec<PatternGroup>,
    /// Patterns that mark invitational language (used by the invitation
    /// score, never by the gate).
    pub invitational_patterns: Vec<String>,
    /// Coercion hits per 100 words above which the gate fires.
    /// The gate is absolute, so the default is 0.0: any hit fires.
    pub coercion_density_threshold: f64,
    /// Minimum expansion/source length ratio before the expansion counts
    /// as sufficiently unfolded.
    pub min_unfold_ratio: f64,
    /// Minimum fraction of insight key terms that must appear in the
    /// expansion.
    pub coherence_threshold: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            coercion_groups: vec![
                PatternGroup::new(
                    "directive",
                    &[
                        r"(?i)\byou\s+must\b",
                        r"(?i)\byou\s+should\b",
                        r"(?i)\byou\s+have\s+to\b",
                        r"(?i)\byou\s+will\s+(?:agree|accept|admit)\b",
                    ],
                ),
                PatternGroup::new(
                    "totalizing",
                    &[
                        r"(?i)\balways\b",
                        r"(?i)\bnever\b",
                        r"(?i)\beveryone\s+knows\b",
                        r"(?i)\bthe\s+only\s+(?:way|answer|truth)\b",
                    ],
                ),
                PatternGroup::new(
                    "closed-declarative",
                    &[
                        r"(?i)\bthe\s+truth\s+is\b",
                        r"(?i)\b(?:obviously|clearly|undeniably)\b",
                        r"(?i)\bend\s+of\s+story\b",
                        r"(?i),\s*period\b",
                    ],
                ),
                PatternGroup::new(
                    "emotional",
                    &[
                        r"(?i)\byou\s+should\s+feel\s+(?:ashamed|guilty|afraid)\b",
                        r"(?i)\bif\s+you\s+really\s+(?:cared|care|loved|love)\b",
                    ],
                ),
                PatternGroup::new(
                    "pressure",
                    &[
                        r"(?i)\b(?:act|decide|choose)\s+now\b",
                        r"(?i)\bbefore\s+it'?s\s+too\s+late\b",
                        r"(?i)\b(?:hurry|act\s+fast)\b",
                    ],
                ),
                PatternGroup::new(
                    "authority",
                    &[
                        r"(?i)\bstudies\s+prove\b",
                        r"(?i)\bexperts\s+agree\b",
                        r"(?i)\bscience\s+has\s+proven\b",
                        r"(?i)\bi\s+know\s+the\s+truth\b",
                    ],
                ),
            ],
            invitational_patterns: vec![
                r"(?i)\byou\s+might\s+(?:consider|notice|wonder)\b".to_string(),
                r"(?i)\b(?:perhaps|maybe|possibly)\b".to_string(),
                r"(?i)\bone\s+way\s+to\s+(?:see|hear|hold)\b".to_string(),
                r"(?i)\bif\s+you\s+(?:choose|prefer|like)\b".to_string(),
                r"(?i)\bworth\s+(?:considering|sitting\s+with)\b".to_string(),
            ],
            coercion_density_threshold: 0.0,
            min_unfold_ratio: 3.0,
            coherence_threshold: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_serdeable() {
        let config = ValidatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ValidatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.coercion_groups.len(), config.coercion_groups.len());
        assert_eq!(back.min_unfold_ratio, config.min_unfold_ratio);
    }

    #[test]
    fn test_group_names_are_distinct() {
        let config = ValidatorConfig::default();
        let mut names: Vec<&str> = config.coercion_groups.iter().map(|g| g.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), config.coercion_groups.len());
    }
}
