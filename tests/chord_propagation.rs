//! End-to-end chord propagation through the public API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::Arc;

use chordsheet::lyrics::{
    propagate_chords, ChordEdit, HyphenationProvider, Language, Segmenter, SyllableSplitter,
    WhatlangDetector,
};
use chordsheet::services::api::{prepare_lyrics, LyricsPrepareRequest};
use chordsheet::types::{ChordEntry, Line, Provenance};

/// Splits known lowercase words at fixed character offsets.
struct TableSplitter(HashMap<&'static str, Vec<usize>>);

impl SyllableSplitter for TableSplitter {
    fn breaks(&self, word: &str) -> Vec<usize> {
        self.0.get(word.to_lowercase().as_str()).cloned().unwrap_or_default()
    }
}

impl HyphenationProvider for TableSplitter {
    fn get(&self, _language: Language) -> Option<Arc<dyn SyllableSplitter>> {
        let table = self.0.clone();
        Some(Arc::new(Self(table)))
    }
}

fn polish_segmenter() -> Segmenter {
    let table = HashMap::from([
        ("świecie", vec![4]),
        ("zwszystkimi", vec![7, 9]),
        ("przywitać", vec![4, 6]),
        ("wwielkiej", vec![5]),
    ]);
    Segmenter::new(Arc::new(TableSplitter(table)))
}

fn doc(texts: &[&str]) -> Vec<Line> {
    texts.iter().map(|t| Line::new(*t)).collect()
}

fn english(lines: &[Line], edit: &ChordEdit) -> Vec<Line> {
    propagate_chords(&Segmenter::default(), lines, edit, Language::English)
}

#[test]
fn glued_single_letter_words_share_a_syllable() {
    let segmenter = polish_segmenter();
    let lines = doc(&[
        "W pierwszym swietle dnia",
        "Świecie czeka cud",
        "Przywitać nowy czas",
        "",
        "W drugim swietle dnia",
        "Z wszystkimi znaki",
        "W wielkiej ciszy trwac",
    ]);

    let source_c = "Świe".chars().count();
    let edit = ChordEdit::set(1, source_c, "C");
    let updated = propagate_chords(&segmenter, &lines, &edit, Language::Polish);

    let expected_c = "Z ".chars().count() + "wszyst".chars().count();
    assert_eq!(updated[5].chords.get(&expected_c), Some(&ChordEntry::auto("C")));

    let source_g = "Przy".chars().count();
    let edit = ChordEdit::set(2, source_g, "G");
    let updated = propagate_chords(&segmenter, &updated, &edit, Language::Polish);

    let expected_g = "W ".chars().count() + "wiel".chars().count();
    assert_eq!(updated[6].chords.get(&expected_g), Some(&ChordEntry::auto("G")));
    assert_eq!(updated[5].chords.get(&expected_c), Some(&ChordEntry::auto("C")));
}

#[test]
fn editing_a_later_repetition_changes_nothing() {
    let lines = doc(&["Verse one", "", "Chorus", "", "Verse two", "", "Chorus"]);
    for edit in [ChordEdit::set(6, 0, "G"), ChordEdit::set(4, 0, "G"), ChordEdit::clear(6, 0)] {
        assert_eq!(english(&lines, &edit), lines);
    }
}

#[test]
fn chorus_template_reaches_every_repetition() {
    let lines = doc(&[
        "Ref.",
        "Sing it loud",
        "",
        "Verse",
        "",
        "Ref.",
        "Sing it loud",
        "",
        "Ref.",
        "Sing it loud",
    ]);
    let updated = english(&lines, &ChordEdit::set(1, 0, "A"));
    assert_eq!(updated[6].chords.get(&0), Some(&ChordEntry::auto("A")));
    assert_eq!(updated[9].chords.get(&0), Some(&ChordEntry::auto("A")));
    assert!(updated[1].chords.is_empty());
    assert!(updated[3].chords.is_empty());
}

#[test]
fn clearing_preserves_manual_chords() {
    let mut lines = doc(&[
        "Verse one", "", "Chorus", "", "Verse two", "", "Chorus", "", "Verse three",
    ]);
    lines[4].chords.insert(0, ChordEntry::manual("Em"));
    lines[8].chords.insert(0, ChordEntry::auto("Em"));

    let updated = english(&lines, &ChordEdit::clear(0, 0));

    assert_eq!(updated[4].chords[&0].provenance, Provenance::Manual);
    assert!(updated[8].chords.is_empty());
    assert_eq!(lines[8].chords[&0], ChordEntry::auto("Em"));
}

#[test]
fn inline_chords_attach_to_syllable_starts() {
    let request = LyricsPrepareRequest {
        title: "Kolęda".to_string(),
        lyrics: "{G}W śród {D}nocnej ciszy".to_string(),
        existing_content: None,
        language: Some("pl".to_string()),
    };
    let response = prepare_lyrics(&Segmenter::default(), &WhatlangDetector::default(), request);

    let line = &response.content[0];
    assert_eq!(line.text, "W śród nocnej ciszy");
    assert_eq!(line.chords[&0], ChordEntry::manual("G"));
    assert_eq!(line.chords[&7], ChordEntry::manual("D"));
    assert_eq!(response.language, "pl");
}

#[test]
fn inline_chords_at_line_end_attach_to_end_of_line() {
    let request = LyricsPrepareRequest {
        title: String::new(),
        lyrics: "A witając zawołali{G}{D}\nNastępna linia".to_string(),
        existing_content: None,
        language: Some("pl".to_string()),
    };
    let response = prepare_lyrics(&Segmenter::default(), &WhatlangDetector::default(), request);

    let first = &response.content[0];
    assert_eq!(first.text, "A witając zawołali");
    assert_eq!(first.chords.len(), 1);
    assert_eq!(first.chords[&first.char_len()], ChordEntry::manual("D"));
    assert!(response.content[1].chords.is_empty());
}
