//! Per-language syllable splitting resources.
//!
//! Dictionaries are the embedded TeX hyphenation patterns shipped with the
//! `hyphenation` crate. Each one is built at most once per registry, on first
//! use or through [`DictionaryRegistry::preload`]; a dictionary that fails to
//! load is remembered as missing and syllabification falls back to one
//! syllable per word.

use std::sync::{Arc, OnceLock};

use hyphenation::{Hyphenator, Load, Standard};

use super::language::Language;

/// Splits a single word into syllables.
pub trait SyllableSplitter: Send + Sync {
    /// Character offsets inside `word` where a new syllable begins.
    ///
    /// Offsets are ascending and strictly between `0` and the word length.
    fn breaks(&self, word: &str) -> Vec<usize>;
}

/// Source of splitters, one per language.
pub trait HyphenationProvider: Send + Sync {
    /// The splitter for `language`, or `None` when no resource is available.
    fn get(&self, language: Language) -> Option<Arc<dyn SyllableSplitter>>;
}

impl SyllableSplitter for Standard {
    fn breaks(&self, word: &str) -> Vec<usize> {
        // Patterns are lowercase. Case folding that changes the length would
        // shift offsets, so such words are looked up as written.
        let lowered = word.to_lowercase();
        let lookup = if lowered.chars().count() == word.chars().count() {
            lowered.as_str()
        } else {
            word
        };

        let hyphenated = self.hyphenate(lookup);
        hyphenated
            .breaks
            .iter()
            .filter_map(|&byte| lookup.char_indices().position(|(b, _)| b == byte))
            .filter(|&offset| offset > 0)
            .collect()
    }
}

/// Lazily built dictionaries for every supported language.
pub struct DictionaryRegistry {
    slots: [OnceLock<Option<Arc<Standard>>>; Language::COUNT],
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DictionaryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded: Vec<&str> = Language::all()
            .iter()
            .filter(|lang| self.slots[lang.index()].get().is_some())
            .map(|lang| lang.code())
            .collect();
        f.debug_struct("DictionaryRegistry").field("loaded", &loaded).finish()
    }
}

impl DictionaryRegistry {
    /// Create an empty registry; nothing is loaded until first use.
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| OnceLock::new()) }
    }

    /// Build every dictionary now instead of on first use.
    pub fn preload(&self) {
        for &lang in Language::all() {
            let _ = self.dictionary(lang);
        }
    }

    /// Whether the dictionary for `language` has been attempted.
    pub fn is_initialized(&self, language: Language) -> bool {
        self.slots[language.index()].get().is_some()
    }

    fn dictionary(&self, language: Language) -> Option<Arc<Standard>> {
        self.slots[language.index()]
            .get_or_init(|| load_dictionary(language))
            .clone()
    }
}

impl HyphenationProvider for DictionaryRegistry {
    fn get(&self, language: Language) -> Option<Arc<dyn SyllableSplitter>> {
        self.dictionary(language)
            .map(|dict| dict as Arc<dyn SyllableSplitter>)
    }
}

fn load_dictionary(language: Language) -> Option<Arc<Standard>> {
    let embedded = match language {
        Language::Polish => hyphenation::Language::Polish,
        Language::English => hyphenation::Language::EnglishUS,
        Language::German => hyphenation::Language::German1996,
        Language::Spanish => hyphenation::Language::Spanish,
        Language::French => hyphenation::Language::French,
        Language::Portuguese => hyphenation::Language::Portuguese,
        Language::Russian => hyphenation::Language::Russian,
    };

    match Standard::from_embedded(embedded) {
        Ok(dict) => {
            tracing::info!("Loaded hyphenation dictionary {}", language.dictionary_id());
            Some(Arc::new(dict))
        }
        Err(e) => {
            tracing::warn!(
                "Hyphenation dictionary {} unavailable, using whole words: {e}",
                language.dictionary_id()
            );
            None
        }
    }
}

/// Provider without any dictionaries: every word is one syllable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHyphenation;

impl HyphenationProvider for NoHyphenation {
    fn get(&self, _language: Language) -> Option<Arc<dyn SyllableSplitter>> {
        None
    }
}
