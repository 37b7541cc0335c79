use crate::data::Lexicon;
use crate::data::WordDictionary;
use crate::results::*;
use log::debug;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::result::Result;
use std::sync::Arc;

const DEMO_SCRAMBLED: [&str; NUM_WORDS] = ["ri", "alc", "espm", "udkoo", "ctebad"];
const DEMO_SOLUTION: [&str; NUM_WORDS] = ["ad", "bet", "cook", "dumps", "eclair"];

/// One Dabble puzzle: five scrambled words of lengths 2 through 6, along with the five
/// dictionary words that their letters were taken from.
///
/// The player exchanges letters between scrambled words until every scrambled word is in the
/// dictionary. Any set of dictionary words counts as a solution, not only the words the puzzle
/// was generated from.
///
/// ```
/// use rs_dabble::{Puzzle, WordDictionary};
///
/// let dictionary = WordDictionary::from_iterator(["ad", "bet", "cook", "dumps", "eclair"]);
/// let mut puzzle = Puzzle::demo(&dictionary);
/// assert_eq!(
///     puzzle.to_string(),
///     "ri, alc, espm, udkoo, ctebad : ad, bet, cook, dumps, eclair"
/// );
///
/// puzzle.exchange(2, 0, 6, 4)?;
/// assert_eq!(puzzle.scrambled_words().get(2), Some("ai"));
/// assert_eq!(puzzle.scrambled_words().get(6), Some("ctebrd"));
/// # Ok::<(), rs_dabble::DabbleError>(())
/// ```
pub struct Puzzle<'a, D: Lexicon + ?Sized = WordDictionary> {
    dictionary: &'a D,
    /// Slot `i` holds the scrambled word with `MIN_WORD_LENGTH + i` letters.
    scrambled: Vec<Vec<char>>,
    solution: Vec<Box<str>>,
}

impl<'a, D: Lexicon + ?Sized> Puzzle<'a, D> {
    /// Creates a random puzzle from the words in the given dictionary.
    ///
    /// Returns [`DabbleError::NoWordsAvailable`] if the dictionary lacks words of any length
    /// from [`MIN_WORD_LENGTH`] to [`MAX_WORD_LENGTH`].
    pub fn new(dictionary: &'a D) -> Result<Self, DabbleError> {
        Self::with_rng(dictionary, &mut rand::thread_rng())
    }

    /// Creates a random puzzle, drawing words and shuffling letters with the given generator.
    ///
    /// Words that `words_of_length` returns with the wrong number of letters are never drawn.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_dabble::{Puzzle, WordDictionary};
    ///
    /// let dictionary = WordDictionary::from_iterator(["it", "you", "here", "batch", "burner"]);
    /// let puzzle = Puzzle::with_rng(&dictionary, &mut StdRng::seed_from_u64(3))?;
    ///
    /// assert_eq!(puzzle.solution_words().to_string(), "it, you, here, batch, burner");
    /// # Ok::<(), rs_dabble::DabbleError>(())
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(
        dictionary: &'a D,
        rng: &mut R,
    ) -> Result<Self, DabbleError> {
        let solution = (MIN_WORD_LENGTH..=MAX_WORD_LENGTH)
            .map(|length| {
                let candidates: Vec<&Arc<str>> = dictionary
                    .words_of_length(length)
                    .iter()
                    .filter(|word| word.chars().count() == length)
                    .collect();
                candidates
                    .choose(&mut *rng)
                    .map(|word| word.to_lowercase().into_boxed_str())
                    .ok_or(DabbleError::NoWordsAvailable(length))
            })
            .collect::<Result<Vec<Box<str>>, DabbleError>>()?;
        check_lengths(&solution)?;
        Ok(Self::scramble(dictionary, solution, rng))
    }

    /// Creates a puzzle from the given solution words, scrambled with the thread-local
    /// generator.
    ///
    /// See [`Puzzle::from_words_with_rng`] for the requirements on `words`.
    pub fn from_words<S: AsRef<str>>(
        dictionary: &'a D,
        words: &[S],
    ) -> Result<Self, DabbleError> {
        Self::from_words_with_rng(dictionary, words, &mut rand::thread_rng())
    }

    /// Creates a puzzle from the given solution words, scrambled with the given generator.
    ///
    /// Exactly [`NUM_WORDS`] words must be given, each must be in the dictionary, and they must
    /// have lengths 2, 3, 4, 5 and 6, in that order. Words are converted to lower case.
    pub fn from_words_with_rng<S, R>(
        dictionary: &'a D,
        words: &[S],
        rng: &mut R,
    ) -> Result<Self, DabbleError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if words.len() != NUM_WORDS {
            return Err(ArgumentError::WordCount(words.len()).into());
        }
        if let Some(unknown) = words
            .iter()
            .map(|word| word.as_ref())
            .find(|word| !dictionary.contains(word))
        {
            return Err(ArgumentError::UnknownWord(unknown.to_string()).into());
        }
        let solution = lower_case(words);
        check_lengths(&solution)?;
        Ok(Self::scramble(dictionary, solution, rng))
    }

    /// Restores a puzzle with the given scrambled and solution words.
    ///
    /// Both lists must hold words of lengths 2, 3, 4, 5 and 6, in that order, and the scrambled
    /// words must use exactly the letters of the solution words. The solution words are not
    /// looked up in the dictionary.
    pub fn from_state<S, T>(
        dictionary: &'a D,
        scrambled: &[S],
        solution: &[T],
    ) -> Result<Self, DabbleError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        for count in [scrambled.len(), solution.len()] {
            if count != NUM_WORDS {
                return Err(ArgumentError::WordCount(count).into());
            }
        }
        let scrambled = lower_case(scrambled);
        let solution = lower_case(solution);
        check_lengths(&scrambled)?;
        check_lengths(&solution)?;
        if sorted_letters(&scrambled) != sorted_letters(&solution) {
            return Err(ArgumentError::LetterMismatch.into());
        }
        Ok(Puzzle {
            dictionary,
            scrambled: scrambled.iter().map(|word| word.chars().collect()).collect(),
            solution,
        })
    }

    /// Returns a fixed puzzle, useful for demonstrations and debugging:
    ///
    /// `ri, alc, espm, udkoo, ctebad : ad, bet, cook, dumps, eclair`
    pub fn demo(dictionary: &'a D) -> Self {
        Puzzle {
            dictionary,
            scrambled: DEMO_SCRAMBLED
                .iter()
                .map(|word| word.chars().collect())
                .collect(),
            solution: DEMO_SOLUTION
                .iter()
                .map(|word| Box::<str>::from(*word))
                .collect(),
        }
    }

    fn scramble<R: Rng + ?Sized>(
        dictionary: &'a D,
        solution: Vec<Box<str>>,
        rng: &mut R,
    ) -> Self {
        let mut letters: Vec<char> = solution.iter().flat_map(|word| word.chars()).collect();
        letters.shuffle(rng);

        let mut remaining = letters.as_slice();
        let scrambled = solution
            .iter()
            .map(|word| {
                let (head, tail) = remaining.split_at(word.chars().count());
                remaining = tail;
                head.to_vec()
            })
            .collect();
        let puzzle = Puzzle {
            dictionary,
            scrambled,
            solution,
        };
        debug!("Created puzzle {}", puzzle);
        puzzle
    }

    /// Exchanges the letter at `index1` of the scrambled word with `len1` letters with the letter
    /// at `index2` of the scrambled word with `len2` letters.
    ///
    /// The two words may be the same, in which case two letters within that word are swapped.
    /// Both lengths are checked before either index, and nothing changes unless every argument
    /// is valid. Indexes must be less than the word's length.
    pub fn exchange(
        &mut self,
        len1: usize,
        index1: usize,
        len2: usize,
        index2: usize,
    ) -> Result<(), DabbleError> {
        let slot1 = slot_for_length(len1)?;
        let slot2 = slot_for_length(len2)?;
        check_index(len1, index1)?;
        check_index(len2, index2)?;

        let letter1 = self.scrambled[slot1][index1];
        let letter2 = self.scrambled[slot2][index2];
        self.scrambled[slot1][index1] = letter2;
        self.scrambled[slot2][index2] = letter1;
        trace!(
            "Exchanged '{}' ({}, {}) with '{}' ({}, {})",
            letter1,
            len1,
            index1,
            letter2,
            len2,
            index2
        );
        Ok(())
    }

    /// Returns `true` iff every scrambled word is in the dictionary.
    pub fn is_solved(&self) -> bool {
        self.scrambled
            .iter()
            .all(|letters| self.dictionary.contains(&letters.iter().collect::<String>()))
    }

    /// Returns a snapshot of the current scrambled words.
    pub fn scrambled_words(&self) -> PuzzleWords {
        PuzzleWords::new(
            self.scrambled
                .iter()
                .map(|letters| letters.iter().collect::<String>().into_boxed_str())
                .collect(),
        )
    }

    /// Returns the words that this puzzle was generated from. Other solutions may exist.
    pub fn solution_words(&self) -> PuzzleWords {
        PuzzleWords::new(self.solution.clone())
    }
}

impl<'a, D: Lexicon + ?Sized> Clone for Puzzle<'a, D> {
    fn clone(&self) -> Self {
        Puzzle {
            dictionary: self.dictionary,
            scrambled: self.scrambled.clone(),
            solution: self.solution.clone(),
        }
    }
}

impl<'a, D: Lexicon + ?Sized> fmt::Debug for Puzzle<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puzzle")
            .field("scrambled", &self.scrambled_words())
            .field("solution", &self.solution_words())
            .finish()
    }
}

/// Formats as the scrambled words, then `" : "`, then the solution words, each list separated
/// by `", "`.
impl<'a, D: Lexicon + ?Sized> fmt::Display for Puzzle<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.scrambled_words(), self.solution_words())
    }
}

fn slot_for_length(length: usize) -> Result<usize, ArgumentError> {
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        return Err(ArgumentError::LengthOutOfRange(length));
    }
    Ok(length - MIN_WORD_LENGTH)
}

fn check_index(length: usize, index: usize) -> Result<(), ArgumentError> {
    if index >= length {
        return Err(ArgumentError::IndexOutOfRange { length, index });
    }
    Ok(())
}

fn check_lengths(words: &[Box<str>]) -> Result<(), ArgumentError> {
    for (position, word) in words.iter().enumerate() {
        let expected = MIN_WORD_LENGTH + position;
        let actual = word.chars().count();
        if actual != expected {
            return Err(ArgumentError::WordLength {
                position,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn lower_case<S: AsRef<str>>(words: &[S]) -> Vec<Box<str>> {
    words
        .iter()
        .map(|word| word.as_ref().to_lowercase().into_boxed_str())
        .collect()
}

fn sorted_letters(words: &[Box<str>]) -> Vec<char> {
    let mut letters: Vec<char> = words.iter().flat_map(|word| word.chars()).collect();
    letters.sort_unstable();
    letters
}
