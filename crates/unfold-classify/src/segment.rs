//! Clause-level segmentation of raw text.

/// A semantic unit: a byte span of the source, trimmed of surrounding
/// whitespace and delimiter characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub start: usize,
    pub end: usize,
}

impl Unit {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

const DELIMITERS: [char; 6] = ['.', '?', '!', ';', ':', '\n'];

/// Split text into clause/sentence units at terminal punctuation.
/// Empty and whitespace-only spans are dropped.
pub fn segment(text: &str) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut span_start = 0;

    for (idx, ch) in text.char_indices() {
        if DELIMITERS.contains(&ch) {
            push_trimmed(text, span_start, idx, &mut units);
            span_start = idx + ch.len_utf8();
        }
    }
    push_trimmed(text, span_start, text.len(), &mut units);

    units
}

fn push_trimmed(text: &str, start: usize, end: usize, units: &mut Vec<Unit>) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = raw.len() - raw.trim_start().len();
    units.push(Unit {
        start: start + offset,
        end: start + offset + trimmed.len(),
    });
}

const STOPWORDS: [&str; 20] = [
    "the", "a", "an", "and", "or", "but", "not", "of", "to", "in", "is",
    "are", "was", "were", "it", "that", "this", "with", "from", "into",
];

/// Lowercased content words of a text: alphabetic tokens longer than three
/// characters, minus stopwords.
pub fn content_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| w.len() > 3)
        .map(|w| w.to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_splits_on_terminal_punctuation() {
        let text = "Why did the map stop arguing? Because it noticed the footsteps.";
        let units = segment(text);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].text(text), "Why did the map stop arguing");
        assert_eq!(units[1].text(text), "Because it noticed the footsteps");
    }

    #[test]
    fn test_segment_empty_text() {
        assert!(segment("").is_empty());
        assert!(segment("   \n  ").is_empty());
    }

    #[test]
    fn test_segment_single_unit() {
        let units = segment("just one clause");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].start, 0);
    }

    #[test]
    fn test_unit_spans_are_trimmed() {
        let text = "first.  second  .";
        let units = segment(text);
        assert_eq!(units[1].text(text), "second");
    }

    #[test]
    fn test_content_words_filter() {
        let words = content_words("The ground records movement, not opinions.");
        assert_eq!(words, vec!["ground", "records", "movement", "opinions"]);
    }
}
