//! Request/response shapes for the lyric and chord editing operations.
//!
//! These are the payloads a request layer exchanges with the core. Every call
//! takes the whole document and returns a whole new one; nothing is persisted
//! here.

use serde::{Deserialize, Serialize};

use crate::lyrics::{propagate_chords, ChordEdit, Language, LanguageDetector, Segmenter};
use crate::services::content::build_content_from_lyrics;
use crate::types::Line;

/// Raw lyrics to turn into a structured document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LyricsPrepareRequest {
    /// Song title, passed through.
    pub title: String,
    /// Raw lyric text, possibly with inline `{CHORD}` markup.
    pub lyrics: String,
    /// Previous version of the document, to keep chords of unchanged lines.
    #[serde(default)]
    pub existing_content: Option<Vec<Line>>,
    /// Language code; detected from the lyrics when absent.
    #[serde(default)]
    pub language: Option<String>,
}

/// A prepared document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LyricsPrepareResponse {
    /// Song title.
    pub title: String,
    /// Structured lines with chords.
    pub content: Vec<Line>,
    /// Language code used for syllabification.
    pub language: String,
}

/// Preview of a single chord edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordPreviewRequest {
    /// The whole current document.
    pub content: Vec<Line>,
    /// Edited line; stale or negative values are tolerated.
    pub line_index: i64,
    /// Edited character offset; stale or negative values are tolerated.
    pub char_index: i64,
    /// New chord, or absent/blank to clear.
    #[serde(default)]
    pub chord: Option<String>,
    /// Language code; unsupported codes use the default language.
    #[serde(default)]
    pub language: Option<String>,
}

/// The document after a chord edit preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordPreviewResponse {
    /// The full updated document.
    pub content: Vec<Line>,
}

/// Build a structured document from raw lyrics.
pub fn prepare_lyrics(
    segmenter: &Segmenter,
    detector: &dyn LanguageDetector,
    request: LyricsPrepareRequest,
) -> LyricsPrepareResponse {
    let language = match request.language.as_deref() {
        Some(code) => Language::normalize(Some(code)),
        None => detector.detect(&request.lyrics),
    };
    let content = build_content_from_lyrics(
        segmenter,
        &request.lyrics,
        request.existing_content.as_deref(),
        language,
    );
    LyricsPrepareResponse {
        title: request.title,
        content,
        language: language.code().to_string(),
    }
}

/// Apply a chord edit to the repetitions of the edited block.
pub fn preview_chord_edit(
    segmenter: &Segmenter,
    request: ChordPreviewRequest,
) -> ChordPreviewResponse {
    let (Ok(line), Ok(char_index)) = (
        usize::try_from(request.line_index),
        usize::try_from(request.char_index),
    ) else {
        tracing::debug!(
            "Ignoring chord edit at negative position ({}, {})",
            request.line_index,
            request.char_index
        );
        return ChordPreviewResponse { content: request.content };
    };

    let edit = ChordEdit {
        line,
        char_index,
        chord: request.chord.map(|c| c.trim().to_string()),
    };
    let language = Language::normalize(request.language.as_deref());
    ChordPreviewResponse {
        content: propagate_chords(segmenter, &request.content, &edit, language),
    }
}
