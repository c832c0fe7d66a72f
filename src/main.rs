//! `chordsheet` - prepare lyric sheets and preview chord propagation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chordsheet::config::Config;
use chordsheet::constants::logging;
use chordsheet::lyrics::{DictionaryRegistry, Language, Segmenter, WhatlangDetector};
use chordsheet::services::api::{
    preview_chord_edit, prepare_lyrics, ChordPreviewRequest, LyricsPrepareRequest,
};
use chordsheet::services::content::load_document;
use chordsheet::services::storage::content_from_storage;

#[derive(Parser)]
#[command(
    name = "chordsheet",
    version,
    about = "Lyric sheets with chords that follow repeated sections"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn a raw lyrics file (with optional {CHORD} markup) into a document
    Prepare {
        /// Raw lyrics file
        file: PathBuf,
        /// Song title
        #[arg(long, default_value = "")]
        title: String,
        /// Language code; detected when omitted
        #[arg(long)]
        language: Option<String>,
        /// Previous document whose chords are kept on unchanged lines
        #[arg(long)]
        existing: Option<PathBuf>,
    },
    /// Apply a chord edit to a document and print the result
    Preview {
        /// Document JSON file
        file: PathBuf,
        /// Edited line index
        #[arg(long)]
        line: i64,
        /// Edited character offset
        #[arg(long = "char")]
        char_index: i64,
        /// New chord; omit to clear
        #[arg(long)]
        chord: Option<String>,
        /// Language code
        #[arg(long)]
        language: Option<String>,
    },
    /// Print a stored document with its structure
    Show {
        /// Document JSON file
        file: PathBuf,
        /// Replace bare `Ref.` blocks with the first chorus
        #[arg(long)]
        expand: bool,
    },
    /// Print the syllables of a line of text
    Syllables {
        /// Text to split
        text: String,
        /// Language code
        #[arg(long)]
        language: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(logging::DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = Arc::new(DictionaryRegistry::new());
    if config.preload_dictionaries {
        registry.preload();
    }
    let segmenter = Segmenter::new(registry);

    let output = match cli.command {
        Command::Prepare { file, title, language, existing } => {
            let lyrics = fs_err::read_to_string(&file)?;
            let existing_content = existing
                .map(|path| load_document(&path))
                .transpose()
                .context("Failed to load existing document")?;
            let detector = WhatlangDetector::new(config.fallback_language);
            let request = LyricsPrepareRequest { title, lyrics, existing_content, language };
            serde_json::to_string_pretty(&prepare_lyrics(&segmenter, &detector, request))?
        }
        Command::Preview { file, line, char_index, chord, language } => {
            let content = load_document(&file).context("Failed to load document")?;
            let request = ChordPreviewRequest {
                content,
                line_index: line,
                char_index,
                chord,
                language,
            };
            serde_json::to_string_pretty(&preview_chord_edit(&segmenter, request))?
        }
        Command::Show { file, expand } => {
            let json = fs_err::read_to_string(&file)?;
            let content = content_from_storage(&json, expand || config.expand_choruses)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            serde_json::to_string_pretty(&content)?
        }
        Command::Syllables { text, language } => {
            let language = Language::normalize(language.as_deref());
            segmenter
                .syllables(&text, language)
                .iter()
                .map(|span| format!("{}\t{}..{}", span.text, span.start, span.end))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    println!("{output}");
    Ok(())
}
