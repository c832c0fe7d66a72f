//! `chordsheet` - lyric sheets with chords that follow repeated sections.
//!
//! This crate segments lyric sheets into verse/chorus blocks, splits lines into
//! syllables per language, and replays a chord edit made in the first block of
//! a kind into every repetition of that block.

pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod services;
pub mod types;
