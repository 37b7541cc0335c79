use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_dabble::*;
use std::io;
use std::io::Write;
use std::time::Instant;

/// Play Dabble in the terminal: exchange letters between five scrambled words until every one of
/// them is a dictionary word.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to a file that contains the dictionary, with words separated by whitespace.
    #[clap(short = 'f', long, default_value = "data/dictionary.txt")]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game.
    Play {
        /// Seed for the random number generator, to replay the same puzzles.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print randomly generated puzzles.
    Generate {
        /// How many puzzles to print.
        #[clap(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Seed for the random number generator.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print a puzzle made from the given words, with lengths 2, 3, 4, 5 and 6, in that order.
    Fixed {
        words: Vec<String>,
        /// Seed for the random number generator.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print the demonstration puzzle and an example exchange.
    Demo,
    /// Check whether each of the given words is in the dictionary.
    Check { words: Vec<String> },
}

fn main() -> Result<()> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let dictionary = WordDictionary::from_path(&args.words_file)
        .with_context(|| format!("Could not load the dictionary from {}", args.words_file))?;
    info!("There are {} words in the dictionary.", dictionary.len());

    match args.command {
        Command::Play { seed } => play_interactive_game(&dictionary, &mut create_rng(seed))?,
        Command::Generate { count, seed } => {
            let mut rng = create_rng(seed);
            for _ in 0..count {
                println!("{}", Puzzle::with_rng(&dictionary, &mut rng)?);
            }
        }
        Command::Fixed { words, seed } => {
            let puzzle =
                Puzzle::from_words_with_rng(&dictionary, &words, &mut create_rng(seed))?;
            println!("{}", puzzle);
        }
        Command::Demo => show_demo(&dictionary)?,
        Command::Check { words } => {
            for word in words.iter() {
                let known = if dictionary.contains(word) { "yes" } else { "no" };
                println!("{}: {}", word, known);
            }
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn show_demo(dictionary: &WordDictionary) -> Result<()> {
    let mut puzzle = Puzzle::demo(dictionary);
    println!("{}", puzzle);

    println!("Exchanging letter 0 of the 2-letter word with letter 4 of the 6-letter word:");
    puzzle.exchange(2, 0, 6, 4)?;
    println!("{}", puzzle);
    println!("Solved: {}", puzzle.is_solved());

    Ok(())
}

fn play_interactive_game(dictionary: &WordDictionary, rng: &mut StdRng) -> Result<()> {
    println!(
        "Unscramble the five words by exchanging letters.\n\n\
         Enter an exchange as four numbers: \"L1 I1 L2 I2\" swaps letter I1 of the word with L1\n\
         letters with letter I2 of the word with L2 letters. For example, \"2 0 6 5\" swaps the\n\
         first letter of the 2-letter word with the last letter of the 6-letter word.\n\n\
         Other commands:\n\n\
           * 'new' = start a new puzzle\n\
           * 'solution' = show the words this puzzle was made from\n\
           * 'quit' = stop playing"
    );

    let mut puzzle = Puzzle::with_rng(dictionary, rng)?;
    loop {
        print_board(&puzzle);
        let input = match read_input()? {
            Some(input) => input,
            None => return Ok(()),
        };

        match input.as_str() {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "new" | "n" => {
                println!("The puzzle was: {}", puzzle.solution_words());
                puzzle = Puzzle::with_rng(dictionary, rng)?;
                continue;
            }
            "solution" | "s" => {
                println!("One solution is: {}", puzzle.solution_words());
                continue;
            }
            _ => {}
        }

        let (len1, index1, len2, index2) = match parse_exchange(&input) {
            Some(exchange) => exchange,
            None => {
                println!("Enter four numbers, or one of 'new', 'solution' or 'quit'. Try again.");
                continue;
            }
        };
        match puzzle.exchange(len1, index1, len2, index2) {
            Ok(()) => debug!("Puzzle is now {}", puzzle),
            Err(DabbleError::InvalidArgument(reason)) => {
                println!("That exchange isn't possible: {}. Try again.", reason);
                continue;
            }
            Err(error) => return Err(error.into()),
        }

        if puzzle.is_solved() {
            println!("You won! {}", puzzle.scrambled_words());
            puzzle = Puzzle::with_rng(dictionary, rng)?;
        }
    }
}

fn print_board<D: Lexicon + ?Sized>(puzzle: &Puzzle<D>) {
    let indexes: Vec<String> = (0..MAX_WORD_LENGTH).map(|index| index.to_string()).collect();
    println!("\n     {}", indexes.join(" "));
    for (length, word) in puzzle.scrambled_words().iter() {
        let letters: Vec<String> = word.chars().map(|letter| letter.to_string()).collect();
        println!("  {}: {}", length, letters.join(" "));
    }
}

/// Returns `None` once stdin is closed.
fn read_input() -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_lowercase()))
}

fn parse_exchange(input: &str) -> Option<(usize, usize, usize, usize)> {
    let numbers = input
        .split_whitespace()
        .map(|token| token.parse::<usize>().ok())
        .collect::<Option<Vec<usize>>>()?;
    match numbers.as_slice() {
        &[len1, index1, len2, index2] => Some((len1, index1, len2, index2)),
        _ => None,
    }
}
