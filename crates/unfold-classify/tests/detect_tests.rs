use unfold_classify::{BreakClassifier, BreakKind, ClassifierConfig, ContentKind, MarkerRule};

#[test]
fn test_detects_unexpected_reason() {
    let classifier = BreakClassifier::new().unwrap();
    let text = "Why did the map stop arguing? Because it noticed the footsteps.";
    let breaks = classifier.detect_breaks(text);
    assert!(!breaks.is_empty());
    assert!(breaks
        .iter()
        .any(|b| b.kind == BreakKind::Paradox && b.excerpt.to_lowercase().starts_with("because")));
}

#[test]
fn test_positions_sorted_and_in_bounds() {
    let classifier = BreakClassifier::new().unwrap();
    let text = "It seemed settled. But the answer moved. Instead of an end, a turn. \
                Suddenly the frame changed. Because it was a door, not a wall.";
    let breaks = classifier.detect_breaks(text);
    assert!(breaks.len() >= 3);
    for pair in breaks.windows(2) {
        assert!(pair[0].position < pair[1].position);
    }
    for b in &breaks {
        assert!(b.position < text.len());
        assert!((0.0..=1.0).contains(&b.confidence));
    }
}

#[test]
fn test_detects_reversal_pair() {
    let classifier = BreakClassifier::new().unwrap();
    let text = "The map is territory. The territory is map.";
    let breaks = classifier.detect_breaks(text);
    assert!(breaks.iter().any(|b| b.kind == BreakKind::Reversal));
}

#[test]
fn test_same_position_keeps_higher_confidence() {
    let config = ClassifierConfig {
        rules: vec![
            MarkerRule {
                name: "weak".to_string(),
                pattern: r"(?i)\bhowever\b".to_string(),
                kind: BreakKind::Reversal,
                confidence: 0.6,
            },
            MarkerRule {
                name: "strong".to_string(),
                pattern: r"(?i)\bhowever\b".to_string(),
                kind: BreakKind::CategoryShift,
                confidence: 0.9,
            },
        ],
        ..ClassifierConfig::default()
    };
    let classifier = BreakClassifier::from_config(&config).unwrap();
    let breaks = classifier.detect_breaks("It held. However, it turned.");
    assert_eq!(breaks.len(), 1);
    assert_eq!(breaks[0].confidence, 0.9);
    assert_eq!(breaks[0].kind, BreakKind::CategoryShift);
}

#[test]
fn test_detection_is_restartable() {
    let classifier = BreakClassifier::new().unwrap();
    let text = "Not a wall, but a door. Because it opens.";
    assert_eq!(classifier.detect_breaks(text), classifier.detect_breaks(text));
}

#[test]
fn test_threshold_filters_weak_candidates() {
    let config = ClassifierConfig {
        confidence_threshold: 0.95,
        ..ClassifierConfig::default()
    };
    let classifier = BreakClassifier::from_config(&config).unwrap();
    let breaks = classifier.detect_breaks("It held. But then it turned.");
    assert!(breaks.is_empty());
}

#[test]
fn test_surprise_density_bounds() {
    let classifier = BreakClassifier::new().unwrap();
    let dense = "But no. Yet yes. But no. Yet yes. But no.";
    let flat = "The river runs. The stones stay.";
    let d = classifier.surprise_density(dense);
    assert!(d > 0.0 && d <= 1.0);
    assert_eq!(classifier.surprise_density(""), 0.0);
    assert!(classifier.surprise_density(flat) <= d);
}

#[test]
fn test_classify_content_kinds() {
    let classifier = BreakClassifier::new().unwrap();
    assert_eq!(
        classifier.classify_content("The river runs. The stones stay in place."),
        ContentKind::Straightforward
    );
    assert_eq!(
        classifier.classify_content("It holds. A paradox sits at the center."),
        ContentKind::Paradox
    );
}
