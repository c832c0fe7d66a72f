//! Inline `{CHORD}` markup in raw lyric text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::language::Language;
use super::syllables::{Segmenter, SyllableSpan};

/// Regex matching a bracketed chord token like `{Am7}`.
#[allow(clippy::expect_used)]
static RE_INLINE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^}]+)\}").expect("valid regex: RE_INLINE_CHORD")
});

/// Remove chord tokens from a raw line and anchor them on syllables.
///
/// Returns the visible text and the chords keyed by character offset. A token
/// is anchored at the start of the syllable its position falls into, else at
/// the next syllable, else at the end of the line. When several tokens land on
/// the same anchor the last one wins.
pub fn extract_inline_chords(
    segmenter: &Segmenter,
    line: &str,
    language: Language,
) -> (String, BTreeMap<usize, String>) {
    if !line.contains('{') || !line.contains('}') {
        return (line.to_string(), BTreeMap::new());
    }

    let mut cleaned = String::with_capacity(line.len());
    let mut clean_len = 0;
    let mut tokens: Vec<(usize, &str)> = Vec::new();
    let mut last = 0;

    for caps in RE_INLINE_CHORD.captures_iter(line) {
        let (Some(whole), Some(chord)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let segment = &line[last..whole.start()];
        cleaned.push_str(segment);
        clean_len += segment.chars().count();

        let chord = chord.as_str().trim();
        if !chord.is_empty() {
            tokens.push((clean_len, chord));
        }
        last = whole.end();
    }
    cleaned.push_str(&line[last..]);

    if tokens.is_empty() {
        return (cleaned, BTreeMap::new());
    }

    let text_len = cleaned.chars().count();
    let spans = segmenter.syllables(&cleaned, language);
    let chords = tokens
        .into_iter()
        .map(|(position, chord)| (anchor(position, text_len, &spans), chord.to_string()))
        .collect();
    (cleaned, chords)
}

fn anchor(position: usize, text_len: usize, spans: &[SyllableSpan]) -> usize {
    if position >= text_len {
        return text_len;
    }
    spans
        .iter()
        .find(|span| span.contains(position))
        .or_else(|| spans.iter().find(|span| span.start >= position))
        .map_or(text_len, |span| span.start)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::hyphenator::NoHyphenation;
    use std::sync::Arc;

    fn segmenter() -> Segmenter {
        Segmenter::new(Arc::new(NoHyphenation))
    }

    #[test]
    fn plain_lines_pass_through() {
        let (text, chords) = extract_inline_chords(&segmenter(), "Cicha noc", Language::Polish);
        assert_eq!(text, "Cicha noc");
        assert!(chords.is_empty());
    }

    #[test]
    fn tokens_snap_to_syllable_starts() {
        let (text, chords) = extract_inline_chords(&segmenter(), "Ci{Am}cha noc", Language::Polish);
        assert_eq!(text, "Cicha noc");
        assert_eq!(chords, BTreeMap::from([(0, "Am".to_string())]));
    }

    #[test]
    fn tokens_in_gaps_move_to_next_syllable() {
        let (text, chords) = extract_inline_chords(&segmenter(), "Cicha {C} noc", Language::Polish);
        assert_eq!(text, "Cicha  noc");
        assert_eq!(chords, BTreeMap::from([(7, "C".to_string())]));
    }

    #[test]
    fn trailing_punctuation_token_goes_to_end_of_line() {
        let (text, chords) = extract_inline_chords(&segmenter(), "noc, {G}!", Language::Polish);
        assert_eq!(text, "noc, !");
        assert_eq!(chords, BTreeMap::from([(6, "G".to_string())]));
    }

    #[test]
    fn last_token_wins_at_end_of_line() {
        let (text, chords) =
            extract_inline_chords(&segmenter(), "A witając zawołali{G}{D}", Language::Polish);
        assert_eq!(text, "A witając zawołali");
        assert_eq!(chords, BTreeMap::from([(18, "D".to_string())]));
    }

    #[test]
    fn blank_tokens_are_removed_without_chords() {
        let (text, chords) = extract_inline_chords(&segmenter(), "{ }La la", Language::Polish);
        assert_eq!(text, "La la");
        assert!(chords.is_empty());
    }
}
