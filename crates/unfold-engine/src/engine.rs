//! The single entry point.
//!
//! Builds every heuristic table once at construction; afterwards the
//! engine is immutable and shareable across threads with no coordination,
//! since each request is a pure function of its inputs.

use tracing::info;

use unfold_classify::{BreakClassifier, ClassifierConfig, ClassifyError, ExpectationBreak};
use unfold_compile::{CompilationResult, Compiler, CompilerConfig};
use unfold_diagnostics::{Diagnostic, DiagnosticSet};
use unfold_validate::{Constraints, Style, ValidateError, Validator, ValidatorConfig};

use crate::request::{Analysis, CompileRequest, ValidateReport, ValidateRequest};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Classifier setup failed: {0}")]
    Classifier(#[from] ClassifyError),

    #[error("Validator setup failed: {0}")]
    Validator(#[from] ValidateError),
}

/// Heuristic configuration for the whole pipeline, loaded once.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub validator: ValidatorConfig,
    #[serde(default)]
    pub compiler: CompilerConfig,
}

/// The request facade over the compile pipeline.
#[derive(Debug)]
pub struct Engine {
    compiler: Compiler,
    classifier: BreakClassifier,
    validator: Validator,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let compiler = Compiler::with_parts(
            BreakClassifier::from_config(&config.classifier)?,
            Validator::from_config(&config.validator)?,
            config.compiler.clone(),
        );
        Ok(Self {
            compiler,
            classifier: BreakClassifier::from_config(&config.classifier)?,
            validator: Validator::from_config(&config.validator)?,
        })
    }

    /// Compile a request into a macro-truth. Every outcome, including
    /// malformed input, is a `CompilationResult` — this call never errors.
    pub fn compile(&self, request: &CompileRequest) -> CompilationResult {
        let constraints = match self.resolve_constraints(request) {
            Ok(constraints) => constraints,
            Err(tag) => {
                info!(style = %tag, "unknown style tag rejected");
                return CompilationResult::input_failure();
            }
        };
        self.compiler
            .compile(&request.content, &request.boundary_insight, &constraints)
    }

    /// Break analysis of raw text: the breaks, their density, and a coarse
    /// content classification.
    pub fn analyze(&self, text: &str) -> Analysis {
        Analysis {
            breaks: self.classifier.detect_breaks(text),
            surprise_density: self.classifier.surprise_density(text),
            content_kind: self.classifier.classify_content(text),
        }
    }

    /// Validate a caller-supplied expansion, with inspection scores.
    /// Malformed constraint input (an unknown style tag) is reported as a
    /// diagnostic on the report, never thrown.
    pub fn validate(&self, request: &ValidateRequest) -> ValidateReport {
        let style = match self.resolve_tagged(&request.constraints.style) {
            Ok(style) => style,
            Err(tag) => {
                info!(style = %tag, "unknown style tag rejected");
                let mut diagnostics = DiagnosticSet::new();
                diagnostics.insert(Diagnostic::InputInvalid);
                return ValidateReport {
                    is_valid: false,
                    diagnostics,
                    coherence_score: 0.0,
                    coercion_score: self.validator.coercion_score(&request.expansion),
                    invitation_score: self.validator.invitation_score(&request.expansion),
                    reframe: self.validator.suggest_reframe(&request.expansion),
                };
            }
        };
        let constraints = Constraints {
            non_coercion: request.constraints.non_coercion,
            max_length: request.constraints.max_length,
            style,
        };
        let outcome = self.validator.validate(
            &request.content,
            &request.expansion,
            &request.boundary_insight,
            &constraints,
        );
        ValidateReport {
            is_valid: outcome.is_valid,
            diagnostics: outcome.diagnostics,
            coherence_score: outcome.coherence_score,
            coercion_score: self.validator.coercion_score(&request.expansion),
            invitation_score: self.validator.invitation_score(&request.expansion),
            reframe: self.validator.suggest_reframe(&request.expansion),
        }
    }

    /// Just the breaks.
    pub fn breaks(&self, text: &str) -> Vec<ExpectationBreak> {
        self.classifier.detect_breaks(text)
    }

    fn resolve_constraints<'a>(
        &self,
        request: &'a CompileRequest,
    ) -> Result<Constraints, &'a str> {
        let style = self.resolve_tagged(&request.constraints.style)?;
        Ok(Constraints {
            non_coercion: request.constraints.non_coercion,
            max_length: request.constraints.max_length,
            style,
        })
    }

    fn resolve_tagged<'a>(&self, tag: &'a Option<String>) -> Result<Option<Style>, &'a str> {
        match tag {
            None => Ok(None),
            Some(tag) => Style::from_tag(tag).map(Some).ok_or(tag.as_str()),
        }
    }
}
