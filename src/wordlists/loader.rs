//! Word list parsing and selection utilities

use super::WordListError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_tree::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path).map_err(|e| WordListError::Io(e.to_string()))?;

    normalize(
        content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .map(str::to_string),
    )
}

/// Parse a JSON payload that should be an array of strings
///
/// A `null` body counts as missing and yields `WordListError::Empty`.
///
/// # Errors
///
/// Returns `WordListError::Malformed` if the body is not a JSON array of
/// strings, or `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```
/// use wordle_tree::wordlists::loader::parse_json_list;
///
/// let words = parse_json_list(r#"["APPLE", "crane"]"#).unwrap();
/// assert_eq!(words, vec!["apple", "crane"]);
/// ```
pub fn parse_json_list(body: &str) -> Result<Vec<String>, WordListError> {
    let parsed: Option<Vec<String>> =
        serde_json::from_str(body).map_err(|e| WordListError::Malformed(e.to_string()))?;

    normalize(parsed.ok_or(WordListError::Empty)?)
}

/// Trim and lowercase words, dropping blanks
///
/// # Errors
///
/// Returns `WordListError::Empty` if nothing is left.
pub fn normalize<I>(words: I) -> Result<Vec<String>, WordListError>
where
    I: IntoIterator<Item = String>,
{
    let words: Vec<String> = words
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(words)
}

/// Pick one word uniformly at random, lowercased
///
/// # Errors
///
/// Returns `WordListError::Empty` for an empty list.
pub fn pick_word<R: Rng>(words: &[String], rng: &mut R) -> Result<String, WordListError> {
    words
        .choose(rng)
        .map(|word| word.to_lowercase())
        .ok_or(WordListError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn json_array_is_parsed_and_lowercased() {
        let words = parse_json_list(r#"["Apple", " SLATE ", "crane"]"#).unwrap();
        assert_eq!(words, vec!["apple", "slate", "crane"]);
    }

    #[test]
    fn empty_array_is_empty_error() {
        assert_eq!(parse_json_list("[]"), Err(WordListError::Empty));
        assert_eq!(parse_json_list(r#"["", "  "]"#), Err(WordListError::Empty));
    }

    #[test]
    fn null_payload_is_missing() {
        assert_eq!(parse_json_list("null"), Err(WordListError::Empty));
    }

    #[test]
    fn non_array_payload_is_malformed() {
        for body in ["{\"words\": []}", "42", "[1, 2]", "not json", ""] {
            assert!(
                matches!(parse_json_list(body), Err(WordListError::Malformed(_))),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn pick_word_from_single_entry() {
        let words = vec!["Apple".to_string()];
        assert_eq!(pick_word(&words, &mut rand::rng()).unwrap(), "apple");
    }

    #[test]
    fn pick_word_stays_in_list() {
        let words: Vec<String> = ["crane", "slate", "irate"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut rng = rand::rng();

        for _ in 0..50 {
            let word = pick_word(&words, &mut rng).unwrap();
            assert!(words.contains(&word));
        }
    }

    #[test]
    fn pick_word_from_empty_list() {
        assert_eq!(pick_word(&[], &mut rand::rng()), Err(WordListError::Empty));
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!("wordle_tree_words_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# header\nCRANE\n\n  slate  \n").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["crane", "slate"]);
    }
}
