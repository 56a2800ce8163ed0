// ============================
// crates/validator-lib/src/dictionary.rs
// ============================
//! Dictionary-word detection.
//!
//! The validator only depends on [`DictionaryOracle`]; [`WordListDictionary`]
//! is the implementation shipped with the crate. It reads a newline-separated
//! word list on first use and flags passwords that are mostly made of
//! dictionary words.

use crate::error::{ConfigError, DictionaryUnavailable};
use crate::metrics::DICTIONARY_LOADED;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use password_policy_common::PolicyConfig;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Answers whether a password is substantially a dictionary word
pub trait DictionaryOracle: Send + Sync {
    /// Apply matching parameters
    fn configure(&self, accuracy: f32, min_word_length: usize) -> Result<(), ConfigError>;

    /// Check a candidate; errors only when the dictionary itself is unusable
    fn is_dictionary_based(&self, candidate: &str) -> Result<bool, DictionaryUnavailable>;
}

/// Matching parameters for [`WordListDictionary`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryTuning {
    /// Share of the password that must be covered by words, in (0, 1]
    pub accuracy: f32,
    /// Shortest word that counts as a match
    pub min_word_length: usize,
}

impl DictionaryTuning {
    pub fn new(accuracy: f32, min_word_length: usize) -> Result<Self, ConfigError> {
        if !(accuracy > 0.0 && accuracy <= 1.0) {
            return Err(ConfigError::AccuracyOutOfRange(accuracy));
        }
        if min_word_length == 0 {
            return Err(ConfigError::InvalidMinWordLength(min_word_length));
        }
        Ok(Self {
            accuracy,
            min_word_length,
        })
    }
}

impl Default for DictionaryTuning {
    fn default() -> Self {
        let policy = PolicyConfig::default();
        Self {
            accuracy: policy.dictionary_accuracy,
            min_word_length: policy.dictionary_min_word_length,
        }
    }
}

/// Loaded, normalized word set
#[derive(Debug, Default)]
struct WordList {
    words: HashSet<String>,
    /// Length of the longest word, in characters
    longest: usize,
}

impl WordList {
    fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            let word: String = normalize(word).collect();
            list.longest = list.longest.max(word.chars().count());
            list.words.insert(word);
        }
        list
    }

    fn load(path: &Path) -> Result<Self, DictionaryUnavailable> {
        let contents = fs::read_to_string(path).map_err(|e| DictionaryUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let list = Self::from_words(contents.lines());
        tracing::info!(
            path = %path.display(),
            words = list.words.len(),
            "dictionary word list loaded"
        );
        ::metrics::counter!(DICTIONARY_LOADED).increment(1);
        Ok(list)
    }

    /// Number of characters of `chars` covered by words of at least `min_len`
    fn covered(&self, chars: &[char], min_len: usize) -> usize {
        let n = chars.len();
        let mut covered = vec![false; n];

        for start in 0..n {
            let max_len = self.longest.min(n - start);
            if max_len < min_len {
                continue;
            }
            // longest word starting here wins
            for len in (min_len..=max_len).rev() {
                let candidate: String = chars[start..start + len].iter().collect();
                if self.words.contains(&candidate) {
                    covered[start..start + len].fill(true);
                    break;
                }
            }
        }

        covered.into_iter().filter(|c| *c).count()
    }
}

/// Lowercase and unmask; list words and candidates share this form
fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase).map(unmask)
}

/// Undo common look-alike substitutions
fn unmask(c: char) -> char {
    match c {
        '@' | '4' => 'a',
        '3' => 'e',
        '1' | '!' => 'i',
        '0' => 'o',
        '$' | '5' => 's',
        '7' => 't',
        other => other,
    }
}

/// Word-list backed [`DictionaryOracle`].
///
/// Loading is lazy and happens at most once; concurrent first callers wait
/// for the same load. A failed load is not remembered, so a later call
/// retries.
pub struct WordListDictionary {
    source: Option<PathBuf>,
    words: OnceCell<WordList>,
    tuning: RwLock<DictionaryTuning>,
}

impl WordListDictionary {
    /// Dictionary read from `path` on first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            words: OnceCell::new(),
            tuning: RwLock::new(DictionaryTuning::default()),
        }
    }

    /// Dictionary over an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source: None,
            words: OnceCell::with_value(WordList::from_words(words)),
            tuning: RwLock::new(DictionaryTuning::default()),
        }
    }

    pub fn tuning(&self) -> DictionaryTuning {
        *self.tuning.read()
    }

    /// Whether the word list has been loaded
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    fn word_list(&self) -> Result<&WordList, DictionaryUnavailable> {
        self.words.get_or_try_init(|| match &self.source {
            Some(path) => WordList::load(path),
            None => Ok(WordList::default()),
        })
    }
}

impl DictionaryOracle for WordListDictionary {
    fn configure(&self, accuracy: f32, min_word_length: usize) -> Result<(), ConfigError> {
        let tuning = DictionaryTuning::new(accuracy, min_word_length)?;
        *self.tuning.write() = tuning;
        Ok(())
    }

    fn is_dictionary_based(&self, candidate: &str) -> Result<bool, DictionaryUnavailable> {
        let words = self.word_list()?;
        let tuning = self.tuning();

        let chars: Vec<char> = normalize(candidate).collect();
        if chars.is_empty() {
            return Ok(false);
        }

        let covered = words.covered(&chars, tuning.min_word_length);
        let ratio = covered as f32 / chars.len() as f32;
        Ok(ratio >= tuning.accuracy)
    }
}
