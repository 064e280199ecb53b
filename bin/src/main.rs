mod cheater;
mod report;

use anyhow::Context;
use anyhow::Result;
use cheater::InteractiveCheater;
use clap::{ArgEnum, Parser, Subcommand};
use log::info;
use rs_wordle_cheater::*;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Helps cheat at word puzzles by listing the words that fit what is known so far.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the list of known words, separated by whitespace.
    #[clap(short = 'f', long, env = "WORDS_FILE")]
    words_file: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an interactive Wordle cheater: enter each guess and its score to see the words that
    /// could still be the answer.
    Wordle {
        #[clap(long, default_value_t = DEFAULT_WORD_LENGTH)]
        word_length: usize,
    },
    /// Answer a single query string, such as "g0=nasty&s0=nannc&ShowPossible".
    Query {
        #[clap(arg_enum)]
        page: Page,
        query: String,
        /// The Wordle word length.
        #[clap(long, default_value_t = DEFAULT_WORD_LENGTH)]
        word_length: usize,
    },
    /// List the words that solve a Spelling Bee puzzle.
    SpellingBee {
        central_letter: char,
        other_letters: String,
        #[clap(long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },
    /// List the words that fit a Letter Boxed puzzle, and a chain of them that uses every
    /// letter.
    LetterBoxed {
        /// The letters of each side in turn, e.g. "lmikfaecputb".
        letters: String,
        #[clap(long, default_value_t = DEFAULT_BOX_SIDE_COUNT)]
        sides: usize,
        #[clap(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
        min_word_length: usize,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Page {
    Wordle,
    SpellingBee,
    LetterBoxed,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let words_text = fs::read_to_string(&args.words_file)
        .with_context(|| format!("reading words from {}", args.words_file.display()))?;
    info!(
        "read {} bytes of words from {}",
        words_text.len(),
        args.words_file.display()
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match args.command {
        Command::Wordle { word_length } => {
            let words = load_words(&words_text, word_length)?;
            let stdin = io::stdin();
            InteractiveCheater::new(stdin.lock(), output, words, word_length)
                .run()
                .context("running wordle")?;
        }
        Command::Query {
            page,
            query,
            word_length,
        } => {
            let query = parse_query(&query);
            match page {
                Page::Wordle => {
                    let words = load_words(&words_text, word_length)?;
                    let cheater = WordleCheater::from_query(query, &words, word_length)?;
                    report::write_wordle(&mut output, &cheater)?;
                }
                Page::SpellingBee => {
                    let cheater = SpellingBeeCheater::from_query(&query, &words_text)?;
                    report::write_spelling_bee(&mut output, &cheater)?;
                }
                Page::LetterBoxed => {
                    let cheater = LetterBoxedCheater::from_query(&query, &words_text)?;
                    report::write_letter_boxed(&mut output, &cheater)?;
                }
            }
        }
        Command::SpellingBee {
            central_letter,
            other_letters,
            min_length,
        } => {
            let cheater =
                spelling_bee_cheater(central_letter, &other_letters, min_length, &words_text)?;
            report::write_spelling_bee(&mut output, &cheater)?;
        }
        Command::LetterBoxed {
            letters,
            sides,
            min_word_length,
        } => {
            let letter_box = LetterBox::new(&letters.to_lowercase(), sides, min_word_length);
            let connections = letter_box.connections(&words_text)?;
            report::write_connections(&mut output, &connections)?;
        }
    }

    Ok(())
}

fn load_words(words_text: &str, word_length: usize) -> Result<WordBank> {
    let words = WordBank::from_text(words_text, word_length).context("loading words")?;
    info!("there are {} possible words", words.len());
    Ok(words)
}

/// Solves a Spelling Bee puzzle given on the command line, in any case.
fn spelling_bee_cheater(
    central_letter: char,
    other_letters: &str,
    min_length: usize,
    words_text: &str,
) -> Result<SpellingBeeCheater> {
    let spelling_bee = SpellingBee::new(
        central_letter.to_ascii_lowercase(),
        &other_letters.to_lowercase(),
        min_length,
    );
    let words = spelling_bee.words(words_text)?;
    Ok(SpellingBeeCheater {
        total_score: words.iter().map(|word| word.score).sum(),
        pangram_count: words.iter().filter(|word| word.is_pangram).count(),
        words: words.into_iter().rev().collect(),
        spelling_bee: Some(spelling_bee),
    })
}
