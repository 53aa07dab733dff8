//! Word lists for the Wordle board
//!
//! The secret word is drawn from a [`WordSource`]: the remote word-list
//! endpoint, the list embedded at build time, or a local file.

mod embedded;
pub mod loader;
pub mod remote;

pub use embedded::{WORDS, WORDS_COUNT};
pub use remote::HttpWordSource;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Error type for word list acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The source answered with no usable words
    Empty,
    /// The payload could not be parsed
    Malformed(String),
    /// The request itself failed
    Request(String),
    /// A local list could not be read
    Io(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Error getting the word list: no words returned"),
            Self::Malformed(reason) => write!(f, "Error getting the word list: {reason}"),
            Self::Request(reason) => write!(f, "Word list request failed: {reason}"),
            Self::Io(reason) => write!(f, "Could not read word list: {reason}"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Somewhere a list of candidate secret words comes from
pub trait WordSource: Send + Sync {
    /// Fetch the full candidate list
    ///
    /// # Errors
    /// Returns `WordListError` when the list is unreachable, malformed or empty.
    fn fetch(&self) -> Result<Vec<String>, WordListError>;

    /// Short human-readable label for logs and the status bar
    fn describe(&self) -> String;
}

/// Words compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn fetch(&self) -> Result<Vec<String>, WordListError> {
        loader::normalize(WORDS.iter().map(|&w| w.to_string()))
    }

    fn describe(&self) -> String {
        format!("embedded ({WORDS_COUNT} words)")
    }
}

/// One word per line in a local file
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn fetch(&self) -> Result<Vec<String>, WordListError> {
        loader::load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Which word source to use, as selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Remote endpoint URL
    Remote(String),
    Embedded,
    File(PathBuf),
}

impl SourceKind {
    /// Interpret a `--source` value
    ///
    /// "remote" uses `endpoint`, "embedded" the built-in list, anything else
    /// is taken as a file path.
    #[must_use]
    pub fn parse(value: &str, endpoint: &str) -> Self {
        match value {
            "remote" => Self::Remote(endpoint.to_string()),
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Build the word source this selection names
    #[must_use]
    pub fn open(&self) -> Arc<dyn WordSource> {
        match self {
            Self::Remote(url) => Arc::new(HttpWordSource::new(url.clone())),
            Self::Embedded => Arc::new(EmbeddedWordSource),
            Self::File(path) => Arc::new(FileWordSource::new(path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_source_returns_every_word() {
        let words = EmbeddedWordSource.fetch().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
        assert!(words.iter().any(|w| w == "apple"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = FileWordSource::new("/definitely/not/here.txt");
        assert!(matches!(source.fetch(), Err(WordListError::Io(_))));
    }

    #[test]
    fn source_kind_parsing() {
        let endpoint = "http://localhost/words";
        assert_eq!(
            SourceKind::parse("remote", endpoint),
            SourceKind::Remote(endpoint.to_string())
        );
        assert_eq!(SourceKind::parse("embedded", endpoint), SourceKind::Embedded);
        assert_eq!(
            SourceKind::parse("words.txt", endpoint),
            SourceKind::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn opened_sources_describe_themselves() {
        assert!(SourceKind::Embedded.open().describe().starts_with("embedded"));
        assert!(
            SourceKind::Remote("http://example.invalid/w".to_string())
                .open()
                .describe()
                .contains("example.invalid")
        );
    }
}
