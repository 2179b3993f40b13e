//! Structural templates for the macro-truth.
//!
//! Templates are data, not code: each style carries a fixed set of units
//! with `{content}`, `{insight}`, `{excerpt}`, `{kind}`, and `{fragment}`
//! placeholders, so the phrasing can be swapped without touching the
//! expansion algorithm. The default wording stays invitational on purpose:
//! a template that trips the non-coercion gate fails its own compile.

use serde::{Deserialize, Serialize};
use unfold_validate::Style;

/// One style's structural template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Opening framing unit; sees `{content}`.
    pub intro: String,
    /// One unit per detected break; sees `{excerpt}` and `{kind}`.
    pub verse: String,
    /// Fallback unit when no breaks were found.
    pub default_verse: String,
    /// Unifying unit; sees `{insight}`.
    pub bridge: String,
    /// Closing unit that reopens rather than concludes.
    pub coda: String,
    /// Padding unit cycled over the source's clauses; sees `{fragment}`.
    pub refrain: String,
}

/// Templates per style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLibrary {
    pub narrative: Template,
    pub lyrical: Template,
    pub philosophical: Template,
}

impl TemplateLibrary {
    pub fn for_style(&self, style: Style) -> &Template {
        match style {
            Style::Narrative => &self.narrative,
            Style::Lyrical => &self.lyrical,
            Style::Philosophical => &self.philosophical,
        }
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self {
            narrative: Template {
                intro: "Here is a small thing, told slowly: {content}".to_string(),
                verse: "At \"{excerpt}\" the story turns, and the turn is a {kind} worth walking around.".to_string(),
                default_verse: "The story holds one shape from end to end, and the shape rewards a second look.".to_string(),
                bridge: "Underneath it runs a quieter pattern: {insight}".to_string(),
                coda: "That is where this telling rests, though you might carry it further than it goes.".to_string(),
                refrain: "Say it again, slower: {fragment}.".to_string(),
            },
            lyrical: Template {
                intro: "Listen: a small song is folded inside these words. {content}".to_string(),
                verse: "The melody snags at \"{excerpt}\", a {kind} in the line, and the snag is the song.".to_string(),
                default_verse: "No snag in the line this time; the melody walks straight, and that is its own verse.".to_string(),
                bridge: "Each verse leans on the same low note: {insight}".to_string(),
                coda: "The song does not end so much as leave a door ajar, if you like.".to_string(),
                refrain: "Hum the line once more: {fragment}.".to_string(),
            },
            philosophical: Template {
                intro: "Consider a compressed claim: {content}".to_string(),
                verse: "At \"{excerpt}\" the argument breaks its frame, a {kind}, and the break is doing the work.".to_string(),
                default_verse: "The claim proceeds without rupture, which is itself worth examining.".to_string(),
                bridge: "Beneath the surface runs the deeper pattern: {insight}".to_string(),
                coda: "The question stays open on purpose; perhaps that is the point.".to_string(),
                refrain: "Turn the phrase over once more: {fragment}.".to_string(),
            },
        }
    }
}

/// Tunable compiler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Target song/source length ratio. The 10x default expresses the
    /// unfold doctrine as a tunable figure, not a contract.
    pub target_ratio: f64,
    /// Upper bound on refrain units appended to reach the target.
    pub max_refrains: usize,
    /// Structural templates per style.
    pub templates: TemplateLibrary,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            target_ratio: 10.0,
            max_refrains: 64,
            templates: TemplateLibrary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_serdeable() {
        let config = CompilerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CompilerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.target_ratio, config.target_ratio);
        assert_eq!(back.templates.lyrical.intro, config.templates.lyrical.intro);
    }

    #[test]
    fn test_every_style_resolves() {
        let lib = TemplateLibrary::default();
        for style in [Style::Narrative, Style::Lyrical, Style::Philosophical] {
            assert!(lib.for_style(style).bridge.contains("{insight}"));
        }
    }
}
