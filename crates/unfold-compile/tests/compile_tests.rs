use unfold_classify::{BreakClassifier, ClassifierConfig};
use unfold_compile::{Compiler, CompilerConfig, Template, TemplateLibrary};
use unfold_diagnostics::{Diagnostic, Status};
use unfold_validate::{Constraints, Style, Validator};

const CONTENT: &str = "Why did the map stop arguing? Because it noticed the footsteps.";
const INSIGHT: &str = "The ground records movement, not opinions.";

#[test]
fn test_joke_compiles_to_success() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());

    assert_eq!(result.status, Status::Success);
    assert!(result.diagnostics.contains(&Diagnostic::CoherenceVerified));
    assert!(!result.diagnostics.contains(&Diagnostic::CoercionDetected));
    assert!(result.compression_ratio > 1.0);
    assert!(!result.song.is_empty());
    assert!((0.0..=1.0).contains(&result.metadata.coherence_score));
}

#[test]
fn test_detected_breaks_are_reported() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());
    assert!(result.metadata.breaks_detected >= 1);
    assert!(result.diagnostics.contains(&Diagnostic::ExpectationBreak));
}

#[test]
fn test_song_reaches_target_ratio() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());
    assert!(result.compression_ratio >= 10.0);
}

#[test]
fn test_ratio_matches_returned_lengths() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());
    let recomputed =
        result.song.chars().count() as f64 / CONTENT.chars().count() as f64;
    assert!((recomputed - result.compression_ratio).abs() < 1e-9);
}

#[test]
fn test_empty_content_fails_with_input_diagnostic() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile("", INSIGHT, &Constraints::default());
    assert_eq!(result.status, Status::Failed);
    assert!(result.diagnostics.contains(&Diagnostic::InputInvalid));
    assert!(result.song.is_empty());
    assert!(result.compression_ratio > 0.0);
}

#[test]
fn test_missing_insight_fails_with_input_diagnostic() {
    let compiler = Compiler::new().unwrap();
    let result = compiler.compile(CONTENT, "  ", &Constraints::default());
    assert_eq!(result.status, Status::Failed);
    assert!(result.diagnostics.contains(&Diagnostic::InputInvalid));
}

#[test]
fn test_coercive_template_withholds_the_song() {
    let mut config = CompilerConfig::default();
    config.templates.narrative.bridge =
        "You must accept that {insight}".to_string();
    let compiler = Compiler::with_parts(
        BreakClassifier::new().unwrap(),
        Validator::new().unwrap(),
        config,
    );
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());

    assert_eq!(result.status, Status::Failed);
    assert!(result.diagnostics.contains(&Diagnostic::CoercionDetected));
    assert!(result.song.is_empty());
}

#[test]
fn test_coercive_template_passes_with_gate_off() {
    let mut config = CompilerConfig::default();
    config.templates.narrative.bridge =
        "You must accept that {insight}".to_string();
    let compiler = Compiler::with_parts(
        BreakClassifier::new().unwrap(),
        Validator::new().unwrap(),
        config,
    );
    let constraints = Constraints {
        non_coercion: false,
        ..Constraints::default()
    };
    let result = compiler.compile(CONTENT, INSIGHT, &constraints);
    assert_ne!(result.status, Status::Failed);
    assert!(!result.song.is_empty());
}

fn terse_templates() -> TemplateLibrary {
    let terse = Template {
        intro: "{content}".to_string(),
        verse: "a turn at \"{excerpt}\"".to_string(),
        default_verse: "one shape throughout".to_string(),
        bridge: "{insight}".to_string(),
        coda: "left open".to_string(),
        refrain: "{fragment}".to_string(),
    };
    TemplateLibrary {
        narrative: terse.clone(),
        lyrical: terse.clone(),
        philosophical: terse,
    }
}

#[test]
fn test_shallow_expansion_is_unstable_with_song_returned() {
    let config = CompilerConfig {
        target_ratio: 1.2,
        max_refrains: 0,
        templates: terse_templates(),
    };
    let compiler = Compiler::with_parts(
        BreakClassifier::new().unwrap(),
        Validator::new().unwrap(),
        config,
    );
    let result = compiler.compile(CONTENT, INSIGHT, &Constraints::default());

    assert_eq!(result.status, Status::Unstable);
    assert!(result.diagnostics.contains(&Diagnostic::UnderCompression));
    assert!(!result.song.is_empty());
}

#[test]
fn test_more_breaks_mean_a_longer_song() {
    // Padding off so unit count alone drives the length.
    let no_breaks_config = ClassifierConfig {
        confidence_threshold: 0.99,
        ..ClassifierConfig::default()
    };
    let base = CompilerConfig {
        max_refrains: 0,
        ..CompilerConfig::default()
    };
    let with_breaks = Compiler::with_parts(
        BreakClassifier::new().unwrap(),
        Validator::new().unwrap(),
        base.clone(),
    );
    let without_breaks = Compiler::with_parts(
        BreakClassifier::from_config(&no_breaks_config).unwrap(),
        Validator::new().unwrap(),
        base,
    );

    let rich = with_breaks.compile(CONTENT, INSIGHT, &Constraints::default());
    let flat = without_breaks.compile(CONTENT, INSIGHT, &Constraints::default());

    assert!(rich.metadata.breaks_detected >= flat.metadata.breaks_detected);
    assert!(rich.song.chars().count() >= flat.song.chars().count());
}

#[test]
fn test_style_selects_the_template() {
    let compiler = Compiler::new().unwrap();
    let constraints = Constraints {
        style: Some(Style::Lyrical),
        ..Constraints::default()
    };
    let result = compiler.compile(CONTENT, INSIGHT, &constraints);
    assert_eq!(result.status, Status::Success);
    assert!(result.song.starts_with("Listen:"));
}

#[test]
fn test_max_length_cap_degrades_to_unstable() {
    let compiler = Compiler::new().unwrap();
    let constraints = Constraints {
        max_length: Some(100),
        ..Constraints::default()
    };
    let result = compiler.compile(CONTENT, INSIGHT, &constraints);
    assert_eq!(result.status, Status::Unstable);
    assert!(result.diagnostics.contains(&Diagnostic::LengthExceeded));
    assert!(!result.song.is_empty());
}
