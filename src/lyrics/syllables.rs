//! Syllable segmentation of a single lyric line.
//!
//! Syllables are the coordinates chords are placed on: the n-th syllable of a
//! line is comparable across repetitions of a block even when the wording, and
//! therefore every character offset, differs. All offsets here are character
//! offsets into the original line.

use std::ops::Range;
use std::sync::Arc;

use super::hyphenator::{DictionaryRegistry, HyphenationProvider, SyllableSplitter};
use super::language::Language;

/// One addressable syllable of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableSpan {
    /// The syllable as produced by the splitter (glued letters included).
    pub text: String,
    /// First character offset in the original line.
    pub start: usize,
    /// One past the last character offset in the original line.
    pub end: usize,
}

impl SyllableSpan {
    /// Check whether `char_index` falls inside this span.
    pub const fn contains(&self, char_index: usize) -> bool {
        self.start <= char_index && char_index < self.end
    }
}

/// A character offset expressed as a syllable coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllablePosition {
    /// Index of the syllable in the line.
    pub index: usize,
    /// Characters between the syllable start and the offset.
    pub offset: usize,
}

/// A line after single-letter words were glued to their successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GluedText {
    /// Characters that survived gluing.
    pub chars: Vec<char>,
    /// `offsets[i]` is the original offset of `chars[i]`.
    pub offsets: Vec<usize>,
}

impl GluedText {
    /// The glued text as a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Map a glued range back to the original line.
    fn original_range(&self, glued: Range<usize>) -> Range<usize> {
        self.offsets[glued.start]..self.offsets[glued.end - 1] + 1
    }
}

/// Maximal runs of letters, as char ranges.
fn word_ranges(chars: &[char]) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in chars.iter().enumerate() {
        match (c.is_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(s..chars.len());
    }
    words
}

fn is_standalone_letter(c: char, language: Language) -> bool {
    let standalone = language.standalone_letters();
    c.to_lowercase().all(|lower| standalone.contains(lower))
}

/// Glue single-letter words onto the following word.
///
/// A one-letter word that is not one of the language's standalone letters and
/// is followed by another word across whitespace only loses that whitespace,
/// so `"w ciszy"` is syllabified as `"wciszy"`.
pub fn transform(text: &str, language: Language) -> GluedText {
    let chars: Vec<char> = text.chars().collect();
    let words = word_ranges(&chars);

    let mut removed = vec![false; chars.len()];
    for pair in words.windows(2) {
        let (word, next) = (&pair[0], &pair[1]);
        if word.len() != 1 || is_standalone_letter(chars[word.start], language) {
            continue;
        }
        let gap = word.end..next.start;
        if !gap.is_empty() && chars[gap.clone()].iter().all(|c| c.is_whitespace()) {
            removed[gap].fill(true);
        }
    }

    let (chars, offsets) = chars
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !removed[*i])
        .map(|(i, c)| (c, i))
        .unzip();
    GluedText { chars, offsets }
}

/// Syllable segmenter over an injected hyphenation provider.
#[derive(Clone)]
pub struct Segmenter {
    provider: Arc<dyn HyphenationProvider>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Arc::new(DictionaryRegistry::new()))
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter").finish_non_exhaustive()
    }
}

impl Segmenter {
    /// Create a segmenter using `provider` for word splitting.
    pub fn new(provider: Arc<dyn HyphenationProvider>) -> Self {
        Self { provider }
    }

    /// Split `text` into syllables, left to right.
    ///
    /// Without a dictionary for `language` each word is a single syllable.
    pub fn syllables(&self, text: &str, language: Language) -> Vec<SyllableSpan> {
        let glued = transform(text, language);
        let splitter = self.provider.get(language);

        let mut spans = Vec::new();
        for word in word_ranges(&glued.chars) {
            let word_text: String = glued.chars[word.clone()].iter().collect();
            let mut cuts = split_points(splitter.as_deref(), &word_text, word.len());
            cuts.push(word.len());

            let mut part_start = 0;
            for cut in cuts {
                let part = word.start + part_start..word.start + cut;
                let original = glued.original_range(part.clone());
                spans.push(SyllableSpan {
                    text: glued.chars[part].iter().collect(),
                    start: original.start,
                    end: original.end,
                });
                part_start = cut;
            }
        }
        spans
    }

    /// Syllable coordinate of `char_index`.
    ///
    /// Returns `None` when the offset falls between syllables (whitespace,
    /// punctuation) or past the end of the line.
    pub fn locate(
        &self,
        text: &str,
        char_index: usize,
        language: Language,
    ) -> Option<SyllablePosition> {
        self.syllables(text, language)
            .iter()
            .enumerate()
            .find(|(_, span)| span.contains(char_index))
            .map(|(index, span)| SyllablePosition { index, offset: char_index - span.start })
    }

    /// Character offset where syllable `index` starts.
    ///
    /// `index` equal to the syllable count is the end-of-line anchor and
    /// resolves to the line length; anything beyond that is `None`.
    pub fn resolve(&self, text: &str, index: usize, language: Language) -> Option<usize> {
        let spans = self.syllables(text, language);
        match index.cmp(&spans.len()) {
            std::cmp::Ordering::Less => Some(spans[index].start),
            std::cmp::Ordering::Equal => Some(text.chars().count()),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Number of syllables in `text`.
    pub fn count(&self, text: &str, language: Language) -> usize {
        self.syllables(text, language).len()
    }
}

/// Sanitized split points for one word.
fn split_points(splitter: Option<&dyn SyllableSplitter>, word: &str, len: usize) -> Vec<usize> {
    let Some(splitter) = splitter else {
        return Vec::new();
    };
    let mut breaks: Vec<usize> = splitter
        .breaks(word)
        .into_iter()
        .filter(|&b| b > 0 && b < len)
        .collect();
    breaks.sort_unstable();
    breaks.dedup();
    breaks
}
