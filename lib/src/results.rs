use crate::data::WordBank;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::result::Result;
use thiserror::Error;

/// The word length used by the daily Wordle puzzle.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Indicates that some input could not be used.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A character outside `a-z` was given where only letters are allowed.
    #[error("{0:?} is not in a-z")]
    InvalidCharacter(char),
    /// A guess, score, or word did not have the expected number of letters.
    #[error("wanted {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The guess is not one of the known words.
    #[error("{0} is not a word")]
    NotInWordList(String),
    /// A score contained something other than `c`, `a`, or `n`.
    #[error("score must only contain the letters c, a, or n, got {0:?}")]
    InvalidScoreChar(char),
    /// A word list contained a word that was not lowercase.
    #[error("wanted all words to be lowercase, got {0:?}")]
    UppercaseWord(String),
    #[error("reading words: {0}")]
    Io(#[from] io::Error),
}

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum LetterResult {
    /// `c`: the letter is at this location.
    Correct,
    /// `a`: the letter is in the word, but somewhere else.
    PresentNotHere,
    /// `n`: the letter is not in the word, beyond any occurrences accounted for elsewhere in the
    /// same guess.
    NotPresent,
}

impl LetterResult {
    /// Parses a single score letter.
    pub fn from_code(code: char) -> Option<LetterResult> {
        match code {
            'c' => Some(LetterResult::Correct),
            'a' => Some(LetterResult::PresentNotHere),
            'n' => Some(LetterResult::NotPresent),
            _ => None,
        }
    }

    /// The score letter for this result.
    pub fn code(self) -> char {
        match self {
            LetterResult::Correct => 'c',
            LetterResult::PresentNotHere => 'a',
            LetterResult::NotPresent => 'n',
        }
    }
}

/// A word that might be the answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guess(String);

impl Guess {
    /// Creates a guess from raw input, converting it to lowercase.
    pub fn new(raw: &str) -> Guess {
        Guess(raw.to_lowercase())
    }

    /// Ensures the guess has `word_length` letters, all in `a-z`, and is in the given words.
    ///
    /// An empty word bank disables the word list check, so any string of letters is allowed.
    pub fn validate(&self, word_length: usize, words: &WordBank) -> Result<(), WordleError> {
        let actual = self.0.chars().count();
        if actual != word_length {
            return Err(WordleError::LengthMismatch {
                expected: word_length,
                actual,
            });
        }
        if let Some(letter) = self.0.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacter(letter));
        }
        if !words.is_empty() && !words.contains(&self.0) {
            return Err(WordleError::NotInWordList(self.0.clone()));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Guess {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The feedback for a guess, as one of `c`, `a`, or `n` per letter. See [`LetterResult`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(String);

impl Score {
    /// Creates a score from raw input, converting it to lowercase.
    pub fn new(raw: &str) -> Score {
        Score(raw.to_lowercase())
    }

    /// The score given when every letter of the guess is correct.
    pub fn all_correct(word_length: usize) -> Score {
        Score("c".repeat(word_length))
    }

    /// Creates a score from the result of each letter.
    pub fn from_results(results: &[LetterResult]) -> Score {
        Score(results.iter().map(|result| result.code()).collect())
    }

    /// Ensures the score has `word_length` letters, each of which is `c`, `a`, or `n`.
    pub fn validate(&self, word_length: usize) -> Result<(), WordleError> {
        let actual = self.0.chars().count();
        if actual != word_length {
            return Err(WordleError::LengthMismatch {
                expected: word_length,
                actual,
            });
        }
        match self
            .0
            .chars()
            .find(|code| LetterResult::from_code(*code).is_none())
        {
            Some(code) => Err(WordleError::InvalidScoreChar(code)),
            None => Ok(()),
        }
    }

    /// Returns `true` iff every letter is correct, meaning the puzzle is solved.
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|code| code == 'c')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guess together with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResult {
    pub guess: Guess,
    pub score: Score,
}

impl GuessResult {
    /// Parses and validates a guess and score from raw input.
    pub fn parse(
        raw_guess: &str,
        raw_score: &str,
        word_length: usize,
        words: &WordBank,
    ) -> Result<GuessResult, WordleError> {
        let guess = Guess::new(raw_guess);
        guess.validate(word_length, words)?;
        let score = Score::new(raw_score);
        score.validate(word_length)?;
        Ok(GuessResult { guess, score })
    }

    /// Iterates over `(location, letter, result)` for each letter in the guess.
    ///
    /// Letters with an unrecognized score code are skipped.
    pub fn letters(&self) -> impl Iterator<Item = (usize, char, LetterResult)> + '_ {
        self.guess
            .0
            .chars()
            .zip(self.score.0.chars())
            .enumerate()
            .filter_map(|(index, (letter, code))| {
                LetterResult::from_code(code).map(|result| (index, letter, result))
            })
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.score)
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters are scored the way Wordle scores them: exact matches first, then
/// [`LetterResult::PresentNotHere`] for as many remaining occurrences as the objective has.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let objective: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective.len() != guess_letters.len() {
        return Err(WordleError::LengthMismatch {
            expected: objective.len(),
            actual: guess_letters.len(),
        });
    }
    let mut unmatched: HashMap<char, usize> = HashMap::new();
    for (objective_letter, guess_letter) in objective.iter().zip(guess_letters.iter()) {
        if objective_letter != guess_letter {
            *unmatched.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    let results: Vec<LetterResult> = objective
        .iter()
        .zip(guess_letters.iter())
        .map(|(objective_letter, guess_letter)| {
            if objective_letter == guess_letter {
                return LetterResult::Correct;
            }
            match unmatched.get_mut(guess_letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterResult::PresentNotHere
                }
                _ => LetterResult::NotPresent,
            }
        })
        .collect();
    Ok(GuessResult {
        guess: Guess::new(guess),
        score: Score::from_results(&results),
    })
}
