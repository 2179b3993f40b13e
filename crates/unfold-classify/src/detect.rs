//! Expectation-break detection.
//!
//! Three passes over the source text: marker rules (regex table), reversal
//! pairing ("X is Y ... Y is X" found over captures, since Rust regex has
//! no backreferences), and a lexical-surprise check on unit boundaries.
//! All passes are pure functions of the input plus the compiled config.

use std::cmp::Ordering;
use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::breaks::{BreakKind, ExpectationBreak};
use crate::config::{ClassifierConfig, ClassifyError};
use crate::segment::{content_words, segment};

/// Minimum content words on both sides of a boundary before the
/// lexical-surprise check applies.
const BOUNDARY_MIN_WORDS: usize = 3;

#[derive(Debug)]
struct CompiledRule {
    kind: BreakKind,
    confidence: f64,
    pattern: Regex,
}

/// Compiled break classifier. Built once from a [`ClassifierConfig`],
/// then immutable and freely shareable.
#[derive(Debug)]
pub struct BreakClassifier {
    threshold: f64,
    rules: Vec<CompiledRule>,
    copula: Regex,
    reversal_confidence: f64,
    boundary_confidence: f64,
}

impl BreakClassifier {
    pub fn new() -> Result<Self, ClassifyError> {
        Self::from_config(&ClassifierConfig::default())
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifyError> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let pattern =
                Regex::new(&rule.pattern).map_err(|source| ClassifyError::InvalidPattern {
                    name: rule.name.clone(),
                    source,
                })?;
            rules.push(CompiledRule {
                kind: rule.kind,
                confidence: rule.confidence,
                pattern,
            });
        }
        // The copula pattern is fixed; the reversal heuristic needs its
        // two capture groups to pair subjects and objects in code.
        let copula = Regex::new(r"(?i)\b([a-zA-Z]+)\s+(?:is|was)\s+([a-zA-Z]+)\b")
            .map_err(|source| ClassifyError::InvalidPattern {
                name: "copula".to_string(),
                source,
            })?;
        Ok(Self {
            threshold: config.confidence_threshold,
            rules,
            copula,
            reversal_confidence: config.reversal_confidence,
            boundary_confidence: config.boundary_confidence,
        })
    }

    /// Detect expectation breaks, sorted by position ascending.
    ///
    /// Positions sharing an offset are collapsed to the highest-confidence
    /// break (earlier-registered rule wins remaining ties). Empty or
    /// single-unit text yields an empty vec, never an error.
    pub fn detect_breaks(&self, text: &str) -> Vec<ExpectationBreak> {
        if segment(text).len() < 2 {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        self.scan_markers(text, &mut candidates);
        self.scan_reversals(text, &mut candidates);
        self.scan_boundaries(text, &mut candidates);

        candidates.retain(|b| b.confidence >= self.threshold);
        candidates.sort_by(|a, b| {
            a.position.cmp(&b.position).then(
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal),
            )
        });
        candidates.dedup_by(|next, kept| next.position == kept.position);
        candidates
    }

    fn scan_markers(&self, text: &str, out: &mut Vec<ExpectationBreak>) {
        for rule in &self.rules {
            for m in rule.pattern.find_iter(text) {
                out.push(ExpectationBreak {
                    kind: rule.kind,
                    position: m.start(),
                    excerpt: m.as_str().to_string(),
                    confidence: rule.confidence,
                });
            }
        }
    }

    /// Pair "X is Y" statements whose subject and object later swap.
    fn scan_reversals(&self, text: &str, out: &mut Vec<ExpectationBreak>) {
        let pairs: Vec<(String, String, usize, &str)> = self
            .copula
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let subject = caps.get(1)?.as_str().to_lowercase();
                let object = caps.get(2)?.as_str().to_lowercase();
                Some((subject, object, whole.start(), whole.as_str()))
            })
            .collect();

        for (i, (sub_a, obj_a, _, _)) in pairs.iter().enumerate() {
            if sub_a == obj_a {
                continue;
            }
            for (sub_b, obj_b, pos_b, text_b) in pairs.iter().skip(i + 1) {
                if sub_b == obj_a && obj_b == sub_a {
                    out.push(ExpectationBreak {
                        kind: BreakKind::Reversal,
                        position: *pos_b,
                        excerpt: text_b.to_string(),
                        confidence: self.reversal_confidence,
                    });
                }
            }
        }
    }

    /// Flag unit boundaries whose continuation shares no content vocabulary
    /// with the preceding unit.
    fn scan_boundaries(&self, text: &str, out: &mut Vec<ExpectationBreak>) {
        let units = segment(text);
        for window in units.windows(2) {
            let prev: HashSet<String> = content_words(window[0].text(text)).into_iter().collect();
            let next_words = content_words(window[1].text(text));
            if prev.len() < BOUNDARY_MIN_WORDS || next_words.len() < BOUNDARY_MIN_WORDS {
                continue;
            }
            if next_words.iter().any(|w| prev.contains(w)) {
                continue;
            }
            let excerpt: String = window[1]
                .text(text)
                .split_whitespace()
                .take(4)
                .collect::<Vec<_>>()
                .join(" ");
            out.push(ExpectationBreak {
                kind: BreakKind::CategoryShift,
                position: window[1].start,
                excerpt,
                confidence: self.boundary_confidence,
            });
        }
    }

    /// Breaks per word, scaled and clamped to `[0, 1]`.
    pub fn surprise_density(&self, text: &str) -> f64 {
        let breaks = self.detect_breaks(text);
        if breaks.is_empty() {
            return 0.0;
        }
        let words = text.split_whitespace().count();
        if words == 0 {
            return 0.0;
        }
        (breaks.len() as f64 / words as f64 * 10.0).min(1.0)
    }

    /// Coarse classification of the source by its break profile.
    pub fn classify_content(&self, text: &str) -> ContentKind {
        let breaks = self.detect_breaks(text);
        if breaks.is_empty() {
            return ContentKind::Straightforward;
        }
        if breaks.iter().any(|b| b.kind == BreakKind::Paradox) {
            return ContentKind::Paradox;
        }
        if breaks.iter().any(|b| b.kind == BreakKind::Reversal) {
            return ContentKind::Reversal;
        }
        if breaks.len() >= 2 {
            return ContentKind::Joke;
        }
        ContentKind::Surprise
    }
}

/// Coarse content classification derived from the break profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Straightforward,
    Paradox,
    Reversal,
    Joke,
    Surprise,
}
