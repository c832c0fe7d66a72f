//! Core document types.
//!
//! A song is an ordered list of [`Line`]s. Every line carries its chords keyed
//! by character offset (Unicode scalar values, not bytes), so an offset equal
//! to the line length is a valid end-of-line anchor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Song section a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// A verse, or any block that is neither marked nor repeated.
    Verse,
    /// A refrain: marked with `Ref.`/`Chorus:` or repeated verbatim.
    Chorus,
}

impl Section {
    /// Returns the lowercase name used in stored content.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verse => "verse",
            Self::Chorus => "chorus",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who placed a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Authored by the user; propagation never deletes it.
    #[default]
    Manual,
    /// Copied by propagation; later propagation may overwrite or delete it.
    Auto,
}

/// A chord symbol attached to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordEntry {
    /// Display text, e.g. `G` or `Am7`.
    pub text: String,
    /// Whether the chord was authored or propagated.
    #[serde(rename = "type", default)]
    pub provenance: Provenance,
}

impl ChordEntry {
    /// Create a user-authored chord.
    pub fn manual(text: impl Into<String>) -> Self {
        Self { text: text.into(), provenance: Provenance::Manual }
    }

    /// Create a propagated chord.
    pub fn auto(text: impl Into<String>) -> Self {
        Self { text: text.into(), provenance: Provenance::Auto }
    }

    /// Check whether propagation placed this chord.
    pub fn is_auto(&self) -> bool {
        self.provenance == Provenance::Auto
    }
}

/// One line of a lyric sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Line {
    /// Visible lyric text, chord markup removed.
    pub text: String,
    /// Section tag assigned by structure detection.
    #[serde(default)]
    pub section: Option<Section>,
    /// Chords keyed by character offset, `0..=char_len()`.
    #[serde(default)]
    pub chords: BTreeMap<usize, ChordEntry>,
}

impl Line {
    /// Create a line with no chords and no section.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Builder-style chord insertion, mostly for fixtures.
    #[must_use]
    pub fn with_chord(mut self, offset: usize, chord: ChordEntry) -> Self {
        self.chords.insert(offset, chord);
        self
    }

    /// Length of the text in characters; the end-of-line anchor.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whitespace-only lines separate blocks.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let line = Line::new("Wśród nocnej");
        assert_eq!(line.char_len(), 12);
        assert!(line.text.len() > 12);
    }

    #[test]
    fn blank_lines() {
        assert!(Line::new("   \t").is_blank());
        assert!(Line::new("").is_blank());
        assert!(!Line::new(" a ").is_blank());
    }

    #[test]
    fn chord_entry_serializes_provenance_as_type() {
        let json = serde_json::to_string(&ChordEntry::auto("G")).unwrap();
        assert_eq!(json, r#"{"text":"G","type":"auto"}"#);
    }

    #[test]
    fn chord_entry_type_defaults_to_manual() {
        let entry: ChordEntry = serde_json::from_str(r#"{"text":"Am"}"#).unwrap();
        assert_eq!(entry, ChordEntry::manual("Am"));
    }
}
