//! The expansion compiler.
//!
//! A single-request state machine threaded as pure steps over immutable
//! draft values: Received → BreaksIdentified → Expanded → Validated →
//! outcome. Every path returns a `CompilationResult`; the pipeline never
//! aborts the caller.

use tracing::{debug, info};

use unfold_classify::segment::segment;
use unfold_classify::{BreakClassifier, ClassifyError, ExpectationBreak};
use unfold_diagnostics::{resolve_status, Diagnostic, Status};
use unfold_validate::{Constraints, Style, ValidateError, Validator};

use crate::result::{CompilationResult, CompileMetadata};
use crate::template::{CompilerConfig, Template};

#[derive(Debug, thiserror::Error)]
pub enum CompileSetupError {
    #[error("Classifier setup failed: {0}")]
    Classifier(#[from] ClassifyError),

    #[error("Validator setup failed: {0}")]
    Validator(#[from] ValidateError),
}

/// The orchestrator: finds the anchor breaks, drives the structured
/// expansion, and gates the result through the validator.
#[derive(Debug)]
pub struct Compiler {
    classifier: BreakClassifier,
    validator: Validator,
    config: CompilerConfig,
}

impl Compiler {
    pub fn new() -> Result<Self, CompileSetupError> {
        Ok(Self {
            classifier: BreakClassifier::new()?,
            validator: Validator::new()?,
            config: CompilerConfig::default(),
        })
    }

    pub fn with_parts(
        classifier: BreakClassifier,
        validator: Validator,
        config: CompilerConfig,
    ) -> Self {
        Self {
            classifier,
            validator,
            config,
        }
    }

    /// Compile a micro-truth and its boundary insight into a macro-truth.
    pub fn compile(
        &self,
        content: &str,
        insight: &str,
        constraints: &Constraints,
    ) -> CompilationResult {
        let Some(received) = Received::accept(content, insight) else {
            debug!("rejected at intake: empty content or insight");
            return CompilationResult::input_failure();
        };

        let identified = received.identify_breaks(&self.classifier);
        debug!(breaks = identified.breaks.len(), "breaks identified");

        let expanded = identified.expand(&self.config, constraints.style);
        debug!(ratio = expanded.ratio, "expansion built");

        let result = expanded.resolve(&self.validator, constraints);
        info!(status = result.status.as_tag(), "compilation finished");
        result
    }
}

/// State: inputs accepted.
struct Received<'a> {
    content: &'a str,
    insight: &'a str,
}

impl<'a> Received<'a> {
    fn accept(content: &'a str, insight: &'a str) -> Option<Self> {
        if content.trim().is_empty() || insight.trim().is_empty() {
            return None;
        }
        Some(Self { content, insight })
    }

    fn identify_breaks(self, classifier: &BreakClassifier) -> BreaksIdentified<'a> {
        // Zero breaks is fine: a break enriches the expansion, it is not
        // a precondition.
        let breaks = classifier.detect_breaks(self.content);
        BreaksIdentified {
            content: self.content,
            insight: self.insight,
            breaks,
        }
    }
}

/// State: anchor breaks known.
struct BreaksIdentified<'a> {
    content: &'a str,
    insight: &'a str,
    breaks: Vec<ExpectationBreak>,
}

impl<'a> BreaksIdentified<'a> {
    fn expand(self, config: &CompilerConfig, style: Option<Style>) -> Expanded<'a> {
        let template = config
            .templates
            .for_style(style.unwrap_or(Style::Narrative));
        let song = compose(self.content, self.insight, &self.breaks, template, config);
        let source_len = self.content.chars().count().max(1);
        let ratio = song.chars().count() as f64 / source_len as f64;
        Expanded {
            content: self.content,
            insight: self.insight,
            breaks: self.breaks,
            song,
            ratio,
        }
    }
}

/// State: macro-truth built, awaiting validation.
struct Expanded<'a> {
    content: &'a str,
    insight: &'a str,
    breaks: Vec<ExpectationBreak>,
    song: String,
    ratio: f64,
}

impl Expanded<'_> {
    fn resolve(self, validator: &Validator, constraints: &Constraints) -> CompilationResult {
        let outcome = validator.validate(self.content, &self.song, self.insight, constraints);

        let mut diagnostics = outcome.diagnostics;
        if !self.breaks.is_empty() {
            diagnostics.insert(Diagnostic::ExpectationBreak);
        }

        let status = resolve_status(&diagnostics);
        // A coercive song is withheld outright so the offending text is
        // never transmitted; the measured ratio is still reported.
        let song = if status == Status::Failed {
            String::new()
        } else {
            self.song
        };

        CompilationResult {
            status,
            song,
            diagnostics,
            compression_ratio: self.ratio,
            metadata: CompileMetadata {
                breaks_detected: self.breaks.len(),
                coherence_score: outcome.coherence_score,
            },
        }
    }
}

/// Compose the structural units and pad with refrains toward the target
/// ratio. Unit order: intro, one verse per break (or the default verse),
/// the unifying bridge, the reopening coda, then cycled refrains.
fn compose(
    content: &str,
    insight: &str,
    breaks: &[ExpectationBreak],
    template: &Template,
    config: &CompilerConfig,
) -> String {
    let mut units = Vec::with_capacity(breaks.len() + 3);
    units.push(template.intro.replace("{content}", content));

    if breaks.is_empty() {
        units.push(template.default_verse.clone());
    } else {
        for b in breaks {
            units.push(
                template
                    .verse
                    .replace("{excerpt}", &b.excerpt)
                    .replace("{kind}", b.kind.as_tag()),
            );
        }
    }

    units.push(template.bridge.replace("{insight}", insight));
    units.push(template.coda.clone());

    let mut song = units.join("\n");

    let target = (config.target_ratio * content.chars().count() as f64) as usize;
    let clauses: Vec<&str> = segment(content)
        .iter()
        .map(|u| u.text(content))
        .collect();
    if clauses.is_empty() {
        return song;
    }

    let mut added = 0;
    while song.chars().count() < target && added < config.max_refrains {
        let fragment = clauses[added % clauses.len()];
        song.push('\n');
        song.push_str(&template.refrain.replace("{fragment}", fragment));
        added += 1;
    }

    song
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_rejects_blank_input() {
        assert!(Received::accept("", "insight").is_none());
        assert!(Received::accept("content", "   ").is_none());
        assert!(Received::accept("content", "insight").is_some());
    }

    #[test]
    fn test_compose_reaches_target_ratio() {
        let config = CompilerConfig::default();
        let content = "Why did the map stop arguing? Because it noticed the footsteps.";
        let song = compose(
            content,
            "The ground records movement, not opinions.",
            &[],
            &config.templates.narrative,
            &config,
        );
        let ratio = song.chars().count() as f64 / content.chars().count() as f64;
        assert!(ratio >= config.target_ratio);
    }
}
