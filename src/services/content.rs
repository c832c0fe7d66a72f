//! Song content: building documents from raw lyrics and (de)serializing them.
//!
//! Stored content is a JSON array of `{text, section, chords}` records with
//! chords keyed by stringified character offset. Loading is strict: anything
//! that does not parse into the typed model is [`Error::CorruptContent`].

use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::lyrics::{apply_structure, extract_inline_chords, Language, Segmenter};
use crate::types::{ChordEntry, Line};

/// Turn raw lyric text into a structured document.
///
/// Inline `{CHORD}` tokens become manual chords. Chords from `existing` are
/// kept for every line whose text is unchanged at the same index; inline
/// chords take precedence over them.
pub fn build_content_from_lyrics(
    segmenter: &Segmenter,
    lyrics: &str,
    existing: Option<&[Line]>,
    language: Language,
) -> Vec<Line> {
    let raw_lines = split_lines(lyrics);

    let content: Vec<Line> = raw_lines
        .par_iter()
        .enumerate()
        .map(|(index, raw)| {
            let (text, inline) = extract_inline_chords(segmenter, raw, language);
            let mut chords = existing
                .and_then(|previous| previous.get(index))
                .filter(|previous| previous.text == text)
                .map(|previous| previous.chords.clone())
                .unwrap_or_default();
            for (offset, chord) in inline {
                chords.insert(offset, ChordEntry::manual(chord));
            }
            Line { text, chords, section: None }
        })
        .collect();

    tracing::debug!("Built {} lines of content ({language})", content.len());
    apply_structure(&content)
}

/// Split text into lines on every Unicode line boundary.
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and U+2028/U+2029. A trailing
/// break does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Serialize a document to its stored JSON form.
pub fn serialize_content(lines: &[Line]) -> Result<String> {
    serde_json::to_string(lines)
        .map_err(|e| Error::Msg(format!("Failed to serialize content: {e}")))
}

/// Parse stored JSON into a document, rejecting anything malformed.
pub fn deserialize_content(json: &str) -> Result<Vec<Line>> {
    let lines: Vec<Line> = serde_json::from_str(json).map_err(|e| Error::corrupt(e.to_string()))?;
    for (index, line) in lines.iter().enumerate() {
        validate_line(index, line)?;
    }
    Ok(lines)
}

fn validate_line(index: usize, line: &Line) -> Result<()> {
    let len = line.char_len();
    for (offset, chord) in &line.chords {
        if *offset > len {
            return Err(Error::corrupt(format!(
                "line {index}: chord offset {offset} beyond line length {len}"
            )));
        }
        if chord.text.trim().is_empty() {
            return Err(Error::corrupt(format!("line {index}: empty chord at offset {offset}")));
        }
    }
    Ok(())
}

/// Read and parse a stored document from disk.
pub fn load_document(path: &Path) -> Result<Vec<Line>> {
    let json = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    deserialize_content(&json)
}
