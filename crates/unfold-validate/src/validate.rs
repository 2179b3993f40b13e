//! Constraint validation.
//!
//! Each check runs independently and appends its diagnostic; non-coercion
//! is an absolute gate, not a score to average. Deterministic, no side
//! effects, and never escalates an internal mismatch to the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unfold_diagnostics::{Diagnostic, DiagnosticSet};

use crate::config::{ValidateError, ValidatorConfig};
use crate::constraints::Constraints;

/// Result of validating one expansion against its source and constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub diagnostics: DiagnosticSet,
    /// Fraction of insight key terms present in the expansion (0.0-1.0).
    pub coherence_score: f64,
}

#[derive(Debug)]
pub(crate) struct CompiledGroup {
    pub(crate) name: String,
    pub(crate) patterns: Vec<Regex>,
}

/// Compiled constraint validator. Built once from a [`ValidatorConfig`],
/// then immutable and freely shareable.
#[derive(Debug)]
pub struct Validator {
    pub(crate) groups: Vec<CompiledGroup>,
    pub(crate) invitational: Vec<Regex>,
    coercion_density_threshold: f64,
    min_unfold_ratio: f64,
    coherence_threshold: f64,
}

impl Validator {
    pub fn new() -> Result<Self, ValidateError> {
        Self::from_config(&ValidatorConfig::default())
    }

    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ValidateError> {
        let mut groups = Vec::with_capacity(config.coercion_groups.len());
        for group in &config.coercion_groups {
            let mut patterns = Vec::with_capacity(group.patterns.len());
            for pattern in &group.patterns {
                let compiled =
                    Regex::new(pattern).map_err(|source| ValidateError::InvalidPattern {
                        group: group.name.clone(),
                        source,
                    })?;
                patterns.push(compiled);
            }
            groups.push(CompiledGroup {
                name: group.name.clone(),
                patterns,
            });
        }
        let mut invitational = Vec::with_capacity(config.invitational_patterns.len());
        for pattern in &config.invitational_patterns {
            let compiled =
                Regex::new(pattern).map_err(|source| ValidateError::InvalidPattern {
                    group: "invitational".to_string(),
                    source,
                })?;
            invitational.push(compiled);
        }
        Ok(Self {
            groups,
            invitational,
            coercion_density_threshold: config.coercion_density_threshold,
            min_unfold_ratio: config.min_unfold_ratio,
            coherence_threshold: config.coherence_threshold,
        })
    }

    /// Validate an expansion against its source, the boundary insight,
    /// and the caller's constraints.
    pub fn validate(
        &self,
        content: &str,
        expansion: &str,
        insight: &str,
        constraints: &Constraints,
    ) -> ValidationOutcome {
        let mut diagnostics = DiagnosticSet::new();

        let coercive = constraints.non_coercion && self.is_coercive(expansion);
        if coercive {
            diagnostics.insert(Diagnostic::CoercionDetected);
        }

        let under_compressed = self.unfold_ratio(content, expansion) < self.min_unfold_ratio;
        if under_compressed {
            diagnostics.insert(Diagnostic::UnderCompression);
        }

        let coherence_score = self.coherence_score(expansion, insight);
        let decoherent = coherence_score < self.coherence_threshold;
        if decoherent {
            diagnostics.insert(Diagnostic::Decoherence);
        }

        if !coercive && !under_compressed && !decoherent {
            diagnostics.insert(Diagnostic::CoherenceVerified);
        }

        // Hard cap, reported alongside the other findings.
        let too_long = constraints
            .max_length
            .is_some_and(|cap| expansion.chars().count() > cap);
        if too_long {
            diagnostics.insert(Diagnostic::LengthExceeded);
        }

        ValidationOutcome {
            is_valid: !coercive && !under_compressed && !decoherent && !too_long,
            diagnostics,
            coherence_score,
        }
    }

    /// Count coercion pattern hits across all groups.
    pub(crate) fn coercion_hits(&self, expansion: &str) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.patterns.iter())
            .map(|p| p.find_iter(expansion).count())
            .sum()
    }

    fn is_coercive(&self, expansion: &str) -> bool {
        let hits = self.coercion_hits(expansion);
        if hits == 0 {
            return false;
        }
        let words = expansion.split_whitespace().count().max(1);
        let density = hits as f64 / words as f64 * 100.0;
        density > self.coercion_density_threshold
    }

    fn unfold_ratio(&self, content: &str, expansion: &str) -> f64 {
        let source_len = content.chars().count().max(1);
        expansion.chars().count() as f64 / source_len as f64
    }

    /// Fraction of the insight's key terms present in the expansion.
    /// An insight with no key terms is vacuously coherent.
    fn coherence_score(&self, expansion: &str, insight: &str) -> f64 {
        let terms = key_terms(insight);
        if terms.is_empty() {
            return 1.0;
        }
        let haystack = expansion.to_lowercase();
        let present = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
        present as f64 / terms.len() as f64
    }
}

/// Key terms of an insight: lowercased alphabetic tokens longer than three
/// characters, deduplicated in order.
pub(crate) fn key_terms(insight: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in insight.split(|c: char| !c.is_alphabetic()) {
        if token.len() <= 3 {
            continue;
        }
        let lowered = token.to_lowercase();
        if !terms.contains(&lowered) {
            terms.push(lowered);
        }
    }
    terms
}
