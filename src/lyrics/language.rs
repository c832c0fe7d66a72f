//! Supported lyric languages and language identification.

use std::fmt;

/// A language with a hyphenation dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Polish, the default.
    #[default]
    Polish,
    /// English (US patterns).
    English,
    /// German (1996 orthography).
    German,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// Portuguese.
    Portuguese,
    /// Russian.
    Russian,
}

impl Language {
    /// Number of supported languages.
    pub const COUNT: usize = 7;

    /// Returns all supported languages in table order.
    #[must_use]
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::Polish,
            Self::English,
            Self::German,
            Self::Spanish,
            Self::French,
            Self::Portuguese,
            Self::Russian,
        ]
    }

    /// Two-letter code used at the API boundary.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
            Self::German => "de",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Portuguese => "pt",
            Self::Russian => "ru",
        }
    }

    /// Hyphenation dictionary identifier for this language.
    #[must_use]
    pub const fn dictionary_id(self) -> &'static str {
        match self {
            Self::Polish => "pl_PL",
            Self::English => "en_US",
            Self::German => "de_DE",
            Self::Spanish => "es_ES",
            Self::French => "fr_FR",
            Self::Portuguese => "pt_PT",
            Self::Russian => "ru_RU",
        }
    }

    /// Position in [`Language::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase single letters that stay standalone words.
    ///
    /// Any other one-letter word is glued onto the next word before
    /// syllabification (Polish `w`, `z`, Russian `в`, `к`, `с`).
    #[must_use]
    pub const fn standalone_letters(self) -> &'static str {
        match self {
            Self::Polish => "aeiouyąęó",
            Self::English => "aeiouy",
            Self::German => "aeiouyäöü",
            Self::Spanish => "aeiouyáéíóú",
            Self::French => "aeiouyàâéèêëîïôùûü",
            Self::Portuguese => "aeiouyáàâãéêíóõôú",
            Self::Russian => "аеёиоуыэюя",
        }
    }

    /// Parse a supported code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Map an optional, possibly unsupported code to a supported language.
    ///
    /// Anything unknown falls back to the default language.
    pub fn normalize(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Best-effort identification of the language a lyric text is written in.
pub trait LanguageDetector: Send + Sync {
    /// Return a supported language; never fails.
    fn detect(&self, text: &str) -> Language;
}

/// Statistical detector backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector {
    /// Returned for empty text, failed detection and unsupported languages.
    pub fallback: Language,
}

impl WhatlangDetector {
    /// Create a detector with the given fallback.
    pub const fn new(fallback: Language) -> Self {
        Self { fallback }
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Language {
        if text.trim().is_empty() {
            return self.fallback;
        }

        let detected = whatlang::detect(text).and_then(|info| match info.lang() {
            whatlang::Lang::Pol => Some(Language::Polish),
            whatlang::Lang::Eng => Some(Language::English),
            whatlang::Lang::Deu => Some(Language::German),
            whatlang::Lang::Spa => Some(Language::Spanish),
            whatlang::Lang::Fra => Some(Language::French),
            whatlang::Lang::Por => Some(Language::Portuguese),
            whatlang::Lang::Rus => Some(Language::Russian),
            _ => None,
        });

        detected.unwrap_or_else(|| {
            tracing::debug!("Language detection inconclusive, using {}", self.fallback);
            self.fallback
        })
    }
}
