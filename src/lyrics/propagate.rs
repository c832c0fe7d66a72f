//! Chord propagation across repeated sections.
//!
//! A chord edit in the first block of a kind (the template) is replayed into
//! every later block of that kind, on the same relative line and the same
//! syllable index. Edits in later repetitions stay local.

use super::language::Language;
use super::structure::detect_structure;
use super::syllables::Segmenter;
use crate::types::{ChordEntry, Line};

/// A single chord change made by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordEdit {
    /// Document line index of the edit.
    pub line: usize,
    /// Character offset on that line; the line length means end of line.
    pub char_index: usize,
    /// New chord text, or `None` to clear.
    pub chord: Option<String>,
}

impl ChordEdit {
    /// Set `chord` at the given position.
    pub fn set(line: usize, char_index: usize, chord: impl Into<String>) -> Self {
        Self { line, char_index, chord: Some(chord.into()) }
    }

    /// Clear the chord at the given position.
    pub const fn clear(line: usize, char_index: usize) -> Self {
        Self { line, char_index, chord: None }
    }

    fn chord_text(&self) -> Option<&str> {
        self.chord.as_deref().filter(|c| !c.is_empty())
    }
}

/// Replay `edit` into the other blocks of the edited block's kind.
///
/// Returns a new document; `lines` is never modified. The edit itself is not
/// applied to the source line, only to its repetitions. Edits that cannot be
/// resolved (stale line index, offset between syllables, a target line that is
/// too short) leave the affected lines unchanged.
pub fn propagate_chords(
    segmenter: &Segmenter,
    lines: &[Line],
    edit: &ChordEdit,
    language: Language,
) -> Vec<Line> {
    let mut updated = lines.to_vec();
    let Some(source_line) = lines.get(edit.line) else {
        tracing::debug!("Chord edit on line {} outside document of {}", edit.line, lines.len());
        return updated;
    };

    let blocks = detect_structure(lines);
    let Some(source) = blocks.iter().find(|b| b.contains_line(edit.line)) else {
        return updated;
    };

    let mut same_kind = blocks.iter().filter(|b| b.kind == source.kind);
    if same_kind
        .next()
        .is_none_or(|template| template.start_line != source.start_line)
    {
        tracing::debug!(
            "Line {} is not in the first {} block, not propagating",
            edit.line,
            source.kind
        );
        return updated;
    }

    let relative_line = edit.line - source.start_line;
    let end_of_line = edit.char_index == source_line.char_len();
    let syllable = if end_of_line {
        segmenter.count(&source_line.text, language)
    } else {
        let Some(position) = segmenter.locate(&source_line.text, edit.char_index, language) else {
            tracing::debug!(
                "Offset {} on line {} is between syllables",
                edit.char_index,
                edit.line
            );
            return updated;
        };
        position.index
    };

    for target in same_kind {
        if relative_line >= target.len() {
            continue;
        }
        let target_index = target.start_line + relative_line;
        let target_line = &mut updated[target_index];
        let target_len = target_line.char_len();

        let Some(offset) = segmenter.resolve(&target_line.text, syllable, language) else {
            tracing::debug!("Line {target_index} has no syllable {syllable}");
            continue;
        };
        if !end_of_line && offset >= target_len {
            continue;
        }

        match edit.chord_text() {
            Some(text) => {
                target_line.chords.insert(offset, ChordEntry::auto(text));
            }
            None => {
                if target_line.chords.get(&offset).is_some_and(ChordEntry::is_auto) {
                    target_line.chords.remove(&offset);
                }
            }
        }
        tracing::debug!("Propagated chord edit to line {target_index} offset {offset}");
    }

    updated
}
