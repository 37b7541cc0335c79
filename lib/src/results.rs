use std::fmt;
use std::io;
use std::path::PathBuf;
use std::slice;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The shortest word length in a puzzle.
pub const MIN_WORD_LENGTH: usize = 2;

/// The longest word length in a puzzle.
pub const MAX_WORD_LENGTH: usize = 6;

/// The number of words in a puzzle, one for each length from [`MIN_WORD_LENGTH`] to
/// [`MAX_WORD_LENGTH`].
pub const NUM_WORDS: usize = MAX_WORD_LENGTH - MIN_WORD_LENGTH + 1;

/// Indicates that an error occurred while loading a dictionary or operating on a puzzle.
#[derive(Debug, Error)]
pub enum DabbleError {
    /// The word source could not be opened. No dictionary is produced.
    #[error("word source {} could not be opened: {source}", .path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The word source was opened, but reading from it failed.
    #[error("failed to read words: {0}")]
    Io(#[from] io::Error),
    /// The caller supplied an argument that the operation cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// The dictionary has no words of the given length, so no random puzzle can be built.
    #[error("the dictionary has no words of length {0}")]
    NoWordsAvailable(usize),
}

/// Details why an argument was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Exactly [`NUM_WORDS`] words are required, but this many were given.
    #[error("expected {} words, got {}", NUM_WORDS, .0)]
    WordCount(usize),
    /// The given word is not in the dictionary.
    #[error("\"{0}\" is not in the dictionary")]
    UnknownWord(String),
    /// The word at `position` should have had `expected` letters.
    #[error("word {position} should have {expected} letters, but has {actual}")]
    WordLength {
        position: usize,
        expected: usize,
        actual: usize,
    },
    /// The scrambled words are not a rearrangement of the solution's letters.
    #[error("the scrambled words do not use the same letters as the solution")]
    LetterMismatch,
    /// The given word length is not between [`MIN_WORD_LENGTH`] and [`MAX_WORD_LENGTH`].
    #[error("{0} is not a valid word length")]
    LengthOutOfRange(usize),
    /// The given index is past the end of the word with the given length.
    #[error("{index} is not a valid index for a word of length {length}")]
    IndexOutOfRange { length: usize, index: usize },
}

/// A read-only snapshot of the five words in a puzzle, keyed by word length.
///
/// Changing a snapshot never affects the puzzle it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PuzzleWords {
    words: Vec<Box<str>>,
}

impl PuzzleWords {
    /// Callers must provide exactly one word per length, shortest first.
    pub(crate) fn new(words: Vec<Box<str>>) -> PuzzleWords {
        debug_assert_eq!(words.len(), NUM_WORDS);
        PuzzleWords { words }
    }

    /// Returns the word with the given length, if that is a valid puzzle word length.
    ///
    /// ```
    /// use rs_dabble::{Puzzle, WordDictionary};
    ///
    /// let dictionary = WordDictionary::from_iterator(["ad", "bet", "cook", "dumps", "eclair"]);
    /// let puzzle = Puzzle::demo(&dictionary);
    ///
    /// assert_eq!(puzzle.solution_words().get(4), Some("cook"));
    /// assert_eq!(puzzle.solution_words().get(7), None);
    /// ```
    pub fn get(&self, length: usize) -> Option<&str> {
        if length < MIN_WORD_LENGTH {
            return None;
        }
        self.words
            .get(length - MIN_WORD_LENGTH)
            .map(|word| word.as_ref())
    }

    /// Iterates over `(length, word)` pairs, from the shortest word to the longest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.iter().enumerate(),
        }
    }

    /// The number of words, which is always [`NUM_WORDS`].
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a puzzle has a word for every length.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the letters of every word, sorted. Two snapshots with equal letters are
    /// rearrangements of each other.
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.words.iter().flat_map(|word| word.chars()).collect();
        letters.sort_unstable();
        letters
    }
}

impl fmt::Display for PuzzleWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PuzzleWords {
    type Item = (usize, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(length, word)` pairs of a [`PuzzleWords`].
pub struct Iter<'a> {
    inner: std::iter::Enumerate<slice::Iter<'a, Box<str>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, word)| (index + MIN_WORD_LENGTH, word.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: [&str; NUM_WORDS]) -> PuzzleWords {
        PuzzleWords::new(list.iter().map(|word| Box::from(*word)).collect())
    }

    #[test]
    fn puzzle_words_get_by_length() {
        let words = words(["it", "you", "here", "batch", "burner"]);

        assert_eq!(words.get(0), None);
        assert_eq!(words.get(1), None);
        assert_eq!(words.get(2), Some("it"));
        assert_eq!(words.get(6), Some("burner"));
        assert_eq!(words.get(7), None);
    }

    #[test]
    fn puzzle_words_iter_yields_lengths() {
        let words = words(["it", "you", "here", "batch", "burner"]);

        let pairs: Vec<(usize, &str)> = words.iter().collect();

        assert_eq!(
            pairs,
            vec![
                (2, "it"),
                (3, "you"),
                (4, "here"),
                (5, "batch"),
                (6, "burner")
            ]
        );
        assert_eq!(words.iter().len(), NUM_WORDS);
    }

    #[test]
    fn puzzle_words_display() {
        let words = words(["eb", "ueu", "eyoh", "rnhti", "rrtacb"]);

        assert_eq!(words.to_string(), "eb, ueu, eyoh, rnhti, rrtacb");
    }

    #[test]
    fn argument_error_messages() {
        assert_eq!(
            ArgumentError::WordCount(4).to_string(),
            "expected 5 words, got 4"
        );
        assert_eq!(
            ArgumentError::IndexOutOfRange {
                length: 3,
                index: 3
            }
            .to_string(),
            "3 is not a valid index for a word of length 3"
        );
        assert_eq!(
            DabbleError::from(ArgumentError::LengthOutOfRange(7)).to_string(),
            "invalid argument: 7 is not a valid word length"
        );
    }
}
