use serde::{Deserialize, Serialize};

/// Structural template family for the expansion. Affects template
/// selection only, never validation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Narrative,
    Lyrical,
    Philosophical,
}

impl Style {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Style::Narrative => "narrative",
            Style::Lyrical => "lyrical",
            Style::Philosophical => "philosophical",
        }
    }

    /// Parse a free-form tag. Unknown tags are the caller's malformed
    /// constraint input and are reported, not thrown (see the facade).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "narrative" => Some(Style::Narrative),
            "lyrical" => Some(Style::Lyrical),
            "philosophical" => Some(Style::Philosophical),
            _ => None,
        }
    }
}

/// Caller-supplied constraints, immutable for the duration of one compile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    /// When true (the default), coercive expansions are rejected outright.
    #[serde(default = "default_true")]
    pub non_coercion: bool,
    /// Hard cap on expansion length in characters, if set.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Template family; `None` selects the narrative default.
    #[serde(default)]
    pub style: Option<Style>,
}

fn default_true() -> bool {
    true
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            non_coercion: true,
            max_length: None,
            style: None,
        }
    }
}
