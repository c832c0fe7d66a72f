//! Preparing content for a storage collaborator and reading it back.

use crate::error::Result;
use crate::lyrics::{apply_structure, expand_chorus_references};
use crate::services::content::{deserialize_content, serialize_content};
use crate::types::Line;

/// Tag sections and serialize, ready to be written by the store.
pub fn content_for_storage(lines: &[Line]) -> Result<String> {
    serialize_content(&apply_structure(lines))
}

/// Parse stored content and structure it for display.
///
/// With `expand` set, bare `Ref.` blocks are replaced by the first chorus.
pub fn content_from_storage(json: &str, expand: bool) -> Result<Vec<Line>> {
    let lines = deserialize_content(json)?;
    Ok(if expand {
        expand_chorus_references(&lines)
    } else {
        apply_structure(&lines)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::Section;

    fn doc() -> Vec<Line> {
        ["Ref.", "Gloria", "", "Verse", "", "Ref."].into_iter().map(Line::new).collect()
    }

    #[test]
    fn stored_content_is_structured() {
        let json = content_for_storage(&doc()).unwrap();
        let stored = deserialize_content(&json).unwrap();
        assert_eq!(stored[1].section, Some(Section::Chorus));
        assert_eq!(stored[3].section, Some(Section::Verse));
    }

    #[test]
    fn reads_back_structured_or_expanded() {
        let json = serialize_content(&doc()).unwrap();
        let plain = content_from_storage(&json, false).unwrap();
        assert_eq!(plain.len(), 6);
        assert_eq!(plain[5].section, Some(Section::Chorus));

        let expanded = content_from_storage(&json, true).unwrap();
        let texts: Vec<&str> = expanded.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Gloria", "", "Verse", "", "Gloria"]);
    }

    #[test]
    fn corrupt_content_is_reported() {
        assert!(content_from_storage("{}", false).unwrap_err().is_corrupt_content());
    }
}
