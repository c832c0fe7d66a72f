//! Lyrics processing: structure, syllables and chord placement.
//!
//! Data flows one way. [`structure`] finds verse/chorus blocks, [`propagate`]
//! replays chord edits across them, and both rely on [`syllables`] to turn
//! character offsets into syllable coordinates, which in turn asks a
//! [`hyphenator::HyphenationProvider`] how to split words.

pub mod hyphenator;
pub mod inline;
pub mod language;
pub mod propagate;
pub mod structure;
pub mod syllables;

pub use hyphenator::{DictionaryRegistry, HyphenationProvider, NoHyphenation, SyllableSplitter};
pub use inline::extract_inline_chords;
pub use language::{Language, LanguageDetector, WhatlangDetector};
pub use propagate::{propagate_chords, ChordEdit};
pub use structure::{apply_structure, detect_structure, expand_chorus_references, Block};
pub use syllables::{transform, GluedText, Segmenter, SyllablePosition, SyllableSpan};
