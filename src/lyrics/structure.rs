//! Verse/chorus structure of a lyric sheet.
//!
//! A block is a maximal run of non-blank lines. Blank lines close blocks, and
//! marker lines (`Ref.`, `Chorus:`, `2.`) open new ones even without a blank
//! line before them. Blocks opened by a chorus marker are choruses; any other
//! block becomes a chorus only when its content appears more than once.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Line, Section};

/// Regex matching `Ref.`/`Ref:` and `Chorus:` markers at line start.
#[allow(clippy::expect_used)]
static RE_CHORUS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:ref\s?[.:]|chorus\s*[:.])").expect("valid regex: RE_CHORUS_MARKER")
});

/// Regex matching numbered verse starts like `1. ` or `2 `.
#[allow(clippy::expect_used)]
static RE_VERSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\s*\.?\s+").expect("valid regex: RE_VERSE_MARKER")
});

/// Check whether a line opens a chorus.
pub fn is_chorus_marker(text: &str) -> bool {
    RE_CHORUS_MARKER.is_match(text)
}

/// Check whether a line opens a numbered verse.
pub fn is_verse_marker(text: &str) -> bool {
    RE_VERSE_MARKER.is_match(text)
}

/// Check whether a line is a chorus marker and nothing else, e.g. `"Ref."`.
pub fn is_chorus_marker_only(text: &str) -> bool {
    RE_CHORUS_MARKER
        .find(text)
        .is_some_and(|m| text[m.end()..].trim().is_empty())
}

/// A contiguous run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Index of the first line in the document.
    pub start_line: usize,
    /// Index of the last line in the document (inclusive).
    pub end_line: usize,
    /// The block's lines, borrowed from the document.
    pub lines: &'a [Line],
    /// Trimmed line texts joined with `\n`, for duplicate detection.
    pub key: String,
    /// Verse or chorus.
    pub kind: Section,
}

impl Block<'_> {
    /// Document line indices covered by this block.
    pub const fn line_range(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }

    /// Check whether document line `index` is part of this block.
    pub const fn contains_line(&self, index: usize) -> bool {
        self.start_line <= index && index <= self.end_line
    }

    /// Number of lines in the block.
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Blocks are never empty; provided for API completeness.
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn open_block(lines: &[Line], start: usize, end: usize, chorus_marked: bool) -> Block<'_> {
    let slice = &lines[start..=end];
    let key = slice
        .iter()
        .map(|line| line.text.trim())
        .collect::<Vec<_>>()
        .join("\n");
    Block {
        start_line: start,
        end_line: end,
        lines: slice,
        key,
        kind: if chorus_marked { Section::Chorus } else { Section::Verse },
    }
}

/// Partition `lines` into blocks and classify each one.
pub fn detect_structure(lines: &[Line]) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    // (first line, opened on a chorus marker)
    let mut open: Option<(usize, bool)> = None;

    for (index, line) in lines.iter().enumerate() {
        if line.is_blank() {
            if let Some((start, marked)) = open.take() {
                blocks.push(open_block(lines, start, index - 1, marked));
            }
            continue;
        }

        let chorus_start = is_chorus_marker(&line.text);
        if chorus_start || is_verse_marker(&line.text) {
            if let Some((start, marked)) = open.take() {
                blocks.push(open_block(lines, start, index - 1, marked));
            }
        }

        if open.is_none() {
            open = Some((index, chorus_start));
        }
    }

    if let Some((start, marked)) = open {
        blocks.push(open_block(lines, start, lines.len() - 1, marked));
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for block in &blocks {
        *counts.entry(block.key.clone()).or_insert(0) += 1;
    }
    for block in &mut blocks {
        if block.kind == Section::Verse && counts.get(&block.key).is_some_and(|&n| n > 1) {
            block.kind = Section::Chorus;
        }
    }

    blocks
}

/// Copy of `lines` with every line tagged by the block it belongs to.
///
/// Blank lines belong to no block and are left untagged.
pub fn apply_structure(lines: &[Line]) -> Vec<Line> {
    let mut updated = lines.to_vec();
    for line in &mut updated {
        line.section = None;
    }
    for block in detect_structure(lines) {
        for line in &mut updated[block.line_range()] {
            line.section = Some(block.kind);
        }
    }
    updated
}

fn tagged_chorus(lines: &[&Line]) -> Vec<Line> {
    lines
        .iter()
        .map(|&line| Line { section: Some(Section::Chorus), ..line.clone() })
        .collect()
}

/// Replace marker-only chorus blocks with the first real chorus.
///
/// An author can write a bare `Ref.` to mean "sing the chorus again". Every
/// chorus block keeps its own lyric lines (markers-only lines dropped); a
/// chorus block with nothing but markers receives a copy of the first chorus
/// that has lyrics. Without such a chorus the structured lines are returned.
pub fn expand_chorus_references(lines: &[Line]) -> Vec<Line> {
    let structured = apply_structure(lines);
    let blocks = detect_structure(&structured);

    let template: Option<Vec<&Line>> = blocks
        .iter()
        .filter(|block| block.kind == Section::Chorus)
        .map(|block| {
            block
                .lines
                .iter()
                .filter(|line| !is_chorus_marker_only(&line.text))
                .collect::<Vec<_>>()
        })
        .find(|lyrics| !lyrics.is_empty());

    let Some(template) = template else {
        return structured;
    };

    let mut expanded = Vec::with_capacity(structured.len());
    let mut next = 0;
    for block in &blocks {
        expanded.extend(structured[next..block.start_line].iter().cloned());
        next = block.end_line + 1;

        if block.kind != Section::Chorus {
            expanded.extend(block.lines.iter().cloned());
            continue;
        }

        let own: Vec<&Line> = block
            .lines
            .iter()
            .filter(|line| !is_chorus_marker_only(&line.text))
            .collect();
        if own.is_empty() {
            expanded.extend(tagged_chorus(&template));
        } else {
            expanded.extend(tagged_chorus(&own));
        }
    }
    expanded.extend(structured[next..].iter().cloned());

    tracing::debug!("Expanded {} lines into {}", structured.len(), expanded.len());
    expanded
}
