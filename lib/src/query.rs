//! Runs the cheaters from URL query parameters.
//!
//! Every request is answered from scratch: the whole list of guesses and scores is replayed
//! against a fresh [`History`] and a fresh copy of the words each time.

use crate::data::WordBank;
use crate::history::History;
use crate::letter_boxed::LetterBox;
use crate::letter_boxed::LetterBoxedError;
use crate::letter_boxed::DEFAULT_BOX_SIDE_COUNT;
use crate::letter_boxed::DEFAULT_MIN_WORD_LENGTH;
use crate::results::Guess;
use crate::results::GuessResult;
use crate::results::Score;
use crate::results::WordleError;
use crate::spelling_bee::ScoredWord;
use crate::spelling_bee::SpellingBee;
use crate::spelling_bee::DEFAULT_MIN_LENGTH;
use std::collections::HashMap;
use std::result::Result;
use thiserror::Error;

/// Query parameters, by name. A parameter may be given more than once.
pub type Query = HashMap<String, Vec<String>>;

/// The number of guess and score pairs read from a query: `g0`/`s0` to `g9`/`s9`.
pub const MAX_GUESS_PAIRS: usize = 10;
/// The Wordle game is over once this many results have been given.
const MAX_RESULTS: usize = 9;

const SHOW_POSSIBLE_PARAM: &str = "ShowPossible";
const CENTRAL_LETTER_PARAM: &str = "central-letter";
const OTHER_LETTERS_PARAM: &str = "other-letters";
const LETTERS_PARAM: &str = "letters";

/// Indicates that a query could not be answered. Nothing is rendered for a bad query.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("wanted only one value for {0:?}")]
    RepeatedParam(String),
    #[error("{param:?} must be {expected} characters long")]
    ParamLength { param: &'static str, expected: usize },
    #[error("missing {param:?}")]
    MissingParam { param: &'static str },
    #[error("unparsed query params: {0} total")]
    UnparsedParams(usize),
    #[error("reading guess {index}: {source}")]
    InvalidGuess {
        index: usize,
        #[source]
        source: WordleError,
    },
    #[error("reading score {index}: {source}")]
    InvalidScore {
        index: usize,
        #[source]
        source: WordleError,
    },
    #[error("searching spelling bee words: {0}")]
    SpellingBee(#[source] WordleError),
    #[error("searching letter boxed words: {0}")]
    LetterBoxed(#[from] LetterBoxedError),
}

/// Parses a query string such as `g0=nasty&s0=nannc&ShowPossible`.
///
/// A leading `?` is ignored. Keys and values are form-url-decoded.
pub fn parse_query(raw: &str) -> Query {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut query = Query::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        query
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    query
}

/// The state of a Wordle game, rebuilt from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordleCheater {
    /// Every valid guess and score, in order.
    pub results: Vec<GuessResult>,
    pub history: History,
    /// The words that are still possible, in alphabetical order. Only filled when
    /// `show_possible` is set.
    pub possible: Vec<String>,
    pub show_possible: bool,
    /// Whether the game is over: the last score was all correct, or the guesses ran out.
    pub done: bool,
}

impl WordleCheater {
    /// Replays the guesses and scores in the query against the words.
    ///
    /// Guesses are not checked against the words, so any word of the right length may be used.
    pub fn from_query(
        mut query: Query,
        words: &WordBank,
        word_length: usize,
    ) -> Result<WordleCheater, RequestError> {
        ensure_single_values(&query)?;
        let any_word = WordBank::default();
        let mut available_words = words.clone();
        let mut history = History::new(word_length);
        let mut results = Vec::new();
        for index in 0..MAX_GUESS_PAIRS {
            let guess_key = format!("g{}", index);
            let score_key = format!("s{}", index);
            if !query.contains_key(&guess_key) || !query.contains_key(&score_key) {
                break;
            }
            let raw_guess = take_single(&mut query, &guess_key);
            let raw_score = take_single(&mut query, &score_key);
            if raw_guess.is_empty() && raw_score.is_empty() {
                continue;
            }
            let guess = Guess::new(&raw_guess);
            guess
                .validate(word_length, &any_word)
                .map_err(|source| RequestError::InvalidGuess { index, source })?;
            let score = Score::new(&raw_score);
            score
                .validate(word_length)
                .map_err(|source| RequestError::InvalidScore { index, source })?;
            let result = GuessResult { guess, score };
            history.add_result(&result, &mut available_words);
            results.push(result);
        }

        let show_possible = query.remove(SHOW_POSSIBLE_PARAM).is_some();
        if !query.is_empty() {
            return Err(RequestError::UnparsedParams(query.len()));
        }

        let done = results.len() >= MAX_RESULTS
            || results
                .last()
                .map_or(false, |result| result.score.is_all_correct());
        let possible = if show_possible {
            available_words.iter().map(str::to_string).collect()
        } else {
            Vec::new()
        };
        Ok(WordleCheater {
            results,
            history,
            possible,
            show_possible,
            done,
        })
    }
}

/// The words for a Spelling Bee puzzle, rebuilt from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellingBeeCheater {
    /// The puzzle, if one was given.
    pub spelling_bee: Option<SpellingBee>,
    pub total_score: usize,
    pub pangram_count: usize,
    /// The words that solve the puzzle, highest score first.
    pub words: Vec<ScoredWord>,
}

impl SpellingBeeCheater {
    /// Reads the `central-letter` and `other-letters` parameters. Either both or neither must be
    /// given; an empty value counts as not given.
    pub fn from_query(query: &Query, words_text: &str) -> Result<SpellingBeeCheater, RequestError> {
        let central_letter = single_param(query, CENTRAL_LETTER_PARAM, 1)?;
        let other_letters = single_param(query, OTHER_LETTERS_PARAM, 6)?;
        let (central_letter, other_letters) = match (central_letter, other_letters) {
            (None, None) => return Ok(SpellingBeeCheater::default()),
            (Some(_), None) => {
                return Err(RequestError::MissingParam {
                    param: OTHER_LETTERS_PARAM,
                })
            }
            (None, Some(_)) => {
                return Err(RequestError::MissingParam {
                    param: CENTRAL_LETTER_PARAM,
                })
            }
            (Some(central_letter), Some(other_letters)) => (central_letter, other_letters),
        };
        let central_letter = central_letter.chars().next().unwrap_or_default();
        let spelling_bee = SpellingBee::new(central_letter, &other_letters, DEFAULT_MIN_LENGTH);
        let mut words = spelling_bee
            .words(words_text)
            .map_err(RequestError::SpellingBee)?;
        words.reverse();
        Ok(SpellingBeeCheater {
            spelling_bee: Some(spelling_bee),
            total_score: words.iter().map(|word| word.score).sum(),
            pangram_count: words.iter().filter(|word| word.is_pangram).count(),
            words,
        })
    }
}

/// The words for a Letter Boxed puzzle, rebuilt from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterBoxedCheater {
    pub letter_box: LetterBox,
    /// The words that fit the box, longest first, then alphabetically.
    pub words: Vec<String>,
}

impl LetterBoxedCheater {
    /// Reads the optional `letters` parameter for a four sided box.
    pub fn from_query(query: &Query, words_text: &str) -> Result<LetterBoxedCheater, RequestError> {
        let letters = match query.get(LETTERS_PARAM).map(Vec::as_slice) {
            None | Some([]) => String::new(),
            Some([letters]) => letters.to_lowercase(),
            Some(_) => return Err(RequestError::RepeatedParam(LETTERS_PARAM.to_string())),
        };
        let letter_box = LetterBox::new(&letters, DEFAULT_BOX_SIDE_COUNT, DEFAULT_MIN_WORD_LENGTH);
        let mut words = letter_box.words(words_text)?;
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Ok(LetterBoxedCheater { letter_box, words })
    }
}

fn ensure_single_values(query: &Query) -> Result<(), RequestError> {
    match query.iter().find(|(_, values)| values.len() != 1) {
        Some((key, _)) => Err(RequestError::RepeatedParam(key.clone())),
        None => Ok(()),
    }
}

fn take_single(query: &mut Query, key: &str) -> String {
    query
        .remove(key)
        .and_then(|values| values.into_iter().next())
        .unwrap_or_default()
}

/// Reads a parameter that must be given at most once, with exactly `expected` characters.
fn single_param(
    query: &Query,
    param: &'static str,
    expected: usize,
) -> Result<Option<String>, RequestError> {
    match query.get(param).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) if value.is_empty() => Ok(None),
        Some([value]) if value.chars().count() == expected => Ok(Some(value.to_lowercase())),
        Some([_]) => Err(RequestError::ParamLength { param, expected }),
        Some(_) => Err(RequestError::RepeatedParam(param.to_string())),
    }
}
