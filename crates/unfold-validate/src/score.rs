//! Coercion and invitation scoring, plus reframe suggestions.
//!
//! These ride on the same pattern groups as the gate but never affect it:
//! the gate is binary, the scores are for callers inspecting an unstable
//! or failed expansion.

use crate::validate::Validator;

impl Validator {
    /// Coercion score: 0.0 is non-coercive, 1.0 is highly coercive.
    /// Normalized as hits per 100 words, capped at 1.0.
    pub fn coercion_score(&self, expansion: &str) -> f64 {
        let hits = self.coercion_hits(expansion);
        if hits == 0 {
            return 0.0;
        }
        let words = expansion.split_whitespace().count().max(1);
        (hits as f64 / words as f64 * 100.0).min(1.0)
    }

    /// Invitation score: 0.0 is demanding, 1.0 is highly invitational.
    /// The mean of the inverse coercion score and the invitational
    /// language density, so hedged phrasing is rewarded and coercion
    /// punished independently.
    pub fn invitation_score(&self, expansion: &str) -> f64 {
        let coercion = self.coercion_score(expansion);
        let invitations: usize = self
            .invitational
            .iter()
            .map(|p| p.find_iter(expansion).count())
            .sum();
        let words = expansion.split_whitespace().count().max(1);
        let density = (invitations as f64 / words as f64 * 10.0).min(1.0);
        ((1.0 - coercion) + density) / 2.0
    }

    /// Suggest how to reframe a coercive expansion, one hint per violated
    /// group. Returns `None` when nothing fired.
    pub fn suggest_reframe(&self, expansion: &str) -> Option<String> {
        let mut hints = Vec::new();
        for group in &self.groups {
            if group.patterns.iter().any(|p| p.is_match(expansion)) {
                if let Some(hint) = group_hint(&group.name) {
                    hints.push(hint);
                }
            }
        }
        if hints.is_empty() {
            None
        } else {
            Some(hints.join(" "))
        }
    }
}

fn group_hint(group: &str) -> Option<&'static str> {
    match group {
        "directive" => Some("Reframe as invitation: 'you might consider' instead of 'you must'."),
        "totalizing" => Some("Soften the absolutes; leave room for the exception."),
        "closed-declarative" => Some("Open the conclusion: offer a reading, not a verdict."),
        "emotional" => Some("Appeal to understanding, not to guilt or fear."),
        "pressure" => Some("Remove the urgency; an insight keeps."),
        "authority" => Some("Share the perspective humbly instead of citing authority."),
        _ => None,
    }
}
