use crate::results::DabbleError;
use log::debug;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Words with at least this many letters all share the last bucket of a [`WordDictionary`].
pub const MAX_BUCKET_LENGTH: usize = 10;

/// The dictionary queries that a [`Puzzle`](crate::Puzzle) depends on.
///
/// [`WordDictionary`] is the standard implementation. Other implementations can be used to
/// control exactly which words a puzzle may draw from.
pub trait Lexicon {
    /// Returns `true` iff the given word is known, ignoring case.
    fn contains(&self, word: &str) -> bool;

    /// Returns every known word with the given number of letters. For lengths of at least
    /// [`MAX_BUCKET_LENGTH`], returns every known word of length [`MAX_BUCKET_LENGTH`] or more.
    fn words_of_length(&self, length: usize) -> &[Arc<str>];

    /// Returns `true` iff [`Lexicon::words_of_length`] would return at least one word.
    fn has_words_of_length(&self, length: usize) -> bool {
        !self.words_of_length(length).is_empty()
    }
}

/// An immutable set of lower-case words, bucketed by length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Arc<str>>", into = "Vec<Arc<str>>")
)]
pub struct WordDictionary {
    /// Bucket `i` holds the sorted words with `i` letters. The last bucket also holds all longer
    /// words.
    buckets: Vec<Vec<Arc<str>>>,
    len: usize,
}

fn bucket_index(word: &str) -> usize {
    word.chars().count().min(MAX_BUCKET_LENGTH)
}

impl WordDictionary {
    /// Constructs a new `WordDictionary` by reading words from the given reader.
    ///
    /// Words are separated by any whitespace, so the reader may provide one word per line or
    /// several. Each word will be converted to lower case, and duplicates are ignored.
    ///
    /// ```
    /// use rs_dabble::WordDictionary;
    /// use std::io::Cursor;
    ///
    /// let dictionary = WordDictionary::from_reader(Cursor::new("ad bet\ncook\nCOOK\n"))?;
    ///
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("Bet"));
    /// # Ok::<(), rs_dabble::DabbleError>(())
    /// ```
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, DabbleError> {
        let mut buckets = empty_buckets();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            for token in line.split_whitespace() {
                insert(&mut buckets, token);
            }
        }
        Ok(Self::from_buckets(buckets))
    }

    /// Constructs a new `WordDictionary` using the given words.
    ///
    /// Each word is trimmed and converted to lower case. Empty words are skipped.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut buckets = empty_buckets();
        for word in words {
            insert(&mut buckets, word.as_ref());
        }
        Self::from_buckets(buckets)
    }

    /// Constructs a new `WordDictionary` from the word file at the given path.
    ///
    /// Returns [`DabbleError::ResourceMissing`] if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DabbleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DabbleError::ResourceMissing {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn from_buckets(sets: Vec<BTreeSet<Arc<str>>>) -> Self {
        let len = sets.iter().map(BTreeSet::len).sum();
        WordDictionary {
            buckets: sets
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            len,
        }
    }

    /// Returns `true` iff the given word is in this dictionary. Case is ignored, so
    /// `contains("Cook")` is the same as `contains("cook")`.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.buckets[bucket_index(&word)]
            .binary_search_by(|known| (**known).cmp(word.as_str()))
            .is_ok()
    }

    /// Returns the words with the given number of letters, in lexicographic order.
    ///
    /// Every length of [`MAX_BUCKET_LENGTH`] or more returns the same list: all words with at
    /// least [`MAX_BUCKET_LENGTH`] letters.
    pub fn words_of_length(&self, length: usize) -> &[Arc<str>] {
        &self.buckets[length.min(MAX_BUCKET_LENGTH)]
    }

    /// Iterates over every word, shortest first.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.buckets.iter().flatten()
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff there are no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Lexicon for WordDictionary {
    fn contains(&self, word: &str) -> bool {
        WordDictionary::contains(self, word)
    }

    fn words_of_length(&self, length: usize) -> &[Arc<str>] {
        WordDictionary::words_of_length(self, length)
    }
}

impl From<Vec<Arc<str>>> for WordDictionary {
    fn from(words: Vec<Arc<str>>) -> Self {
        WordDictionary::from_iterator(words)
    }
}

impl From<WordDictionary> for Vec<Arc<str>> {
    fn from(dictionary: WordDictionary) -> Self {
        dictionary.buckets.into_iter().flatten().collect()
    }
}

fn empty_buckets() -> Vec<BTreeSet<Arc<str>>> {
    vec![BTreeSet::new(); MAX_BUCKET_LENGTH + 1]
}

fn insert(buckets: &mut [BTreeSet<Arc<str>>], token: &str) {
    let word = token.trim().to_lowercase();
    if word.is_empty() {
        return;
    }
    buckets[bucket_index(&word)].insert(Arc::from(word));
}
