//! Application constants.
//!
//! Centralizes environment variable names and logging defaults.

/// Environment variables read by [`crate::config::Config::load`].
pub mod env {
    /// Fallback language code for detection.
    pub const LANGUAGE: &str = "CHORDSHEET_LANGUAGE";

    /// Whether stored documents are shown with chorus references expanded.
    pub const EXPAND_CHORUSES: &str = "CHORDSHEET_EXPAND_CHORUSES";

    /// Whether all hyphenation dictionaries are built at startup.
    pub const PRELOAD_DICTIONARIES: &str = "CHORDSHEET_PRELOAD_DICTIONARIES";

    /// `tracing` filter directive for the command-line tool.
    pub const LOG: &str = "CHORDSHEET_LOG";
}

/// Logging constants.
pub mod logging {
    /// Filter used when `CHORDSHEET_LOG` is unset.
    pub const DEFAULT_FILTER: &str = "warn";
}
