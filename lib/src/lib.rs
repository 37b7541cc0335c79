//! This library provides the puzzle engine for Dabble, a word-unscrambling game.
//!
//! Five dictionary words of lengths 2, 3, 4, 5 and 6 have their letters shuffled together and
//! dealt back out as five scrambled words of the same lengths. The player repeatedly exchanges
//! two letters, possibly within the same word, until all five scrambled words are dictionary
//! words again. They don't need to be the original words.
//!
//! Start by loading a [`WordDictionary`], then create [`Puzzle`]s from it:
//!
//! ```
//! use rs_dabble::{Puzzle, WordDictionary};
//! use std::io::Cursor;
//!
//! let words = Cursor::new("at\nit\nbet\nyou\nhere\ncook\nbatch\ndumps\nburner\neclair\n");
//! let dictionary = WordDictionary::from_reader(words)?;
//!
//! let mut puzzle = Puzzle::new(&dictionary)?;
//! for (length, word) in puzzle.scrambled_words().iter() {
//!     assert_eq!(word.chars().count(), length);
//! }
//!
//! puzzle.exchange(2, 0, 6, 5)?;
//! if puzzle.is_solved() {
//!     println!("Solved!");
//! }
//! # Ok::<(), rs_dabble::DabbleError>(())
//! ```
//!
//! A [`Puzzle`] can use any [`Lexicon`], not only a [`WordDictionary`].

mod data;
mod engine;
mod results;

pub use data::Lexicon;
pub use data::WordDictionary;
pub use data::MAX_BUCKET_LENGTH;
pub use engine::*;
pub use results::*;
