//! Common password lookup
//!
//! The evaluator only needs to ask "is this candidate common?". Anything
//! implementing [`CommonPasswordLookup`] can answer, including plain closures.
//! [`CommonPasswordList`] is the bundled implementation backed by a word list
//! loaded once into memory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming the word list used by [`CommonPasswordList::from_env`].
pub const COMMON_PASSWORDS_PATH_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

const DEFAULT_COMMON_PASSWORDS_PATH: &str = "./assets/10k-most-common.txt";

/// Membership test against a catalogue of frequently used passwords.
pub trait CommonPasswordLookup {
    fn is_common(&self, candidate: &str) -> bool;
}

impl<F> CommonPasswordLookup for F
where
    F: Fn(&str) -> bool,
{
    fn is_common(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// In-memory catalogue of common passwords.
///
/// A candidate counts as common when any catalogued entry is a
/// case-insensitive prefix of it, so `"Password2024"` matches `"password"`.
/// This is deliberately aggressive: appending characters to a known password
/// does not make it safe.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordList {
    entries: HashSet<String>,
}

impl CommonPasswordList {
    /// Builds a list from entries, trimming and lowercasing them and dropping
    /// blanks.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Returns the word list path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_COMMON_PASSWORDS_PATH`
    /// 2. Default path `./assets/10k-most-common.txt`
    pub fn default_path() -> PathBuf {
        std::env::var(COMMON_PASSWORDS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PASSWORDS_PATH))
    }

    /// Loads the list from [`CommonPasswordList::default_path`].
    ///
    /// # Errors
    ///
    /// See [`CommonPasswordList::from_path`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_path(Self::default_path())
    }

    /// Loads a newline-separated word list.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.is_file() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: not found {:?}", path);
            return Err(ConfigError::CommonListNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::from_entries(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: empty file {:?}", path);
            return Err(ConfigError::CommonListEmpty);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CommonPasswordLookup for CommonPasswordList {
    fn is_common(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        lowered
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .any(|end| self.entries.contains(&lowered[..end]))
    }
}
