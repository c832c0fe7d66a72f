//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::{env as vars, logging};
use crate::error::{Error, Result};
use crate::lyrics::Language;

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language used when detection is inconclusive
    pub fallback_language: Language,
    /// Whether stored documents are shown with `Ref.` blocks expanded
    pub expand_choruses: bool,
    /// Build every hyphenation dictionary at startup
    pub preload_dictionaries: bool,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_language: Language::default(),
            expand_choruses: false,
            preload_dictionaries: false,
            log_filter: logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(code) = lookup(vars::LANGUAGE) {
            config.fallback_language = Language::from_code(&code).ok_or_else(|| {
                let supported: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
                Error::config(
                    format!(
                        "Unsupported language '{code}' in {}, expected one of: {}",
                        vars::LANGUAGE,
                        supported.join(", ")
                    ),
                    "Set it to a supported two-letter language code",
                )
            })?;
        }

        if let Some(value) = lookup(vars::EXPAND_CHORUSES) {
            config.expand_choruses = parse_flag(vars::EXPAND_CHORUSES, &value)?;
        }

        if let Some(value) = lookup(vars::PRELOAD_DICTIONARIES) {
            config.preload_dictionaries = parse_flag(vars::PRELOAD_DICTIONARIES, &value)?;
        }

        if let Some(filter) = lookup(vars::LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::config(
            format!("Invalid boolean '{other}' in {name}"),
            "Use true/false, yes/no, on/off or 1/0",
        )),
    }
}
