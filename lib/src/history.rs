use crate::data::WordBank;
use crate::letter_set::LetterSet;
use crate::results::GuessResult;
use crate::results::LetterResult;
use log::debug;
use log::warn;
use std::collections::HashMap;
use std::fmt;

/// The letter restrictions learned from every result seen so far.
///
/// Results are merged one at a time, in the order they were scored. Nothing is ever removed
/// from the history, and contradictory results are not rejected: they just leave a history that
/// no word satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HistoryFields")
)]
pub struct History {
    /// The letter known to be at each location, if any.
    correct_letters: Vec<Option<char>>,
    /// Letters that must be in the word, one entry per required occurrence, in the order they
    /// were first required.
    almost_letters: Vec<char>,
    /// Letters known not to be at each location.
    prohibited_letters: Vec<LetterSet>,
}

/// The serialized form of a [`History`], checked before it is used.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HistoryFields {
    correct_letters: Vec<Option<char>>,
    almost_letters: Vec<char>,
    prohibited_letters: Vec<LetterSet>,
}

#[cfg(feature = "serde")]
impl TryFrom<HistoryFields> for History {
    type Error = crate::results::WordleError;

    /// Every location needs both a correct letter slot and a prohibited set.
    fn try_from(fields: HistoryFields) -> Result<History, Self::Error> {
        if fields.prohibited_letters.len() != fields.correct_letters.len() {
            return Err(crate::results::WordleError::LengthMismatch {
                expected: fields.correct_letters.len(),
                actual: fields.prohibited_letters.len(),
            });
        }
        Ok(History {
            correct_letters: fields.correct_letters,
            almost_letters: fields.almost_letters,
            prohibited_letters: fields.prohibited_letters,
        })
    }
}

impl History {
    /// Creates an empty history for words of the given length.
    pub fn new(word_length: usize) -> History {
        History {
            correct_letters: vec![None; word_length],
            almost_letters: Vec::new(),
            prohibited_letters: vec![LetterSet::new(); word_length],
        }
    }

    pub fn word_length(&self) -> usize {
        self.correct_letters.len()
    }

    pub fn correct_letters(&self) -> &[Option<char>] {
        &self.correct_letters
    }

    pub fn almost_letters(&self) -> &[char] {
        &self.almost_letters
    }

    pub fn prohibited_letters(&self) -> &[LetterSet] {
        &self.prohibited_letters
    }

    /// Merges the result into the history, then removes every word from `words` that the
    /// history no longer allows.
    pub fn add_result(&mut self, result: &GuessResult, words: &mut WordBank) {
        self.merge_result(result);
        let before = words.len();
        words.retain(|word| self.allows(word));
        debug!(
            "{}: removed {} words, {} remain",
            result,
            before - words.len(),
            words.len()
        );
    }

    /// Merges the result into the history.
    ///
    /// The result's guess must only contain letters `a-z`, as checked by
    /// [`Guess::validate`](crate::Guess::validate).
    pub fn merge_result(&mut self, result: &GuessResult) {
        debug_assert_eq!(result.guess.as_str().chars().count(), self.word_length());
        let mut used_letters: Vec<char> = Vec::new();
        for (index, letter, letter_result) in result.letters() {
            if index >= self.word_length() {
                break;
            }
            match letter_result {
                LetterResult::Correct => {
                    self.correct_letters[index] = Some(letter);
                    used_letters.push(letter);
                }
                LetterResult::PresentNotHere => {
                    self.prohibit(letter, index);
                    used_letters.push(letter);
                }
                LetterResult::NotPresent => {
                    if used_letters.contains(&letter) {
                        // An earlier copy of the letter scored, so only this location is known.
                        self.prohibit(letter, index);
                    } else {
                        for location in 0..self.word_length() {
                            self.prohibit(letter, location);
                        }
                    }
                }
            }
        }
        self.merge_required_letters(&used_letters);
    }

    /// Returns `true` iff the word is consistent with every result merged so far.
    pub fn allows(&self, word: &str) -> bool {
        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        let mut length = 0;
        for (index, letter) in word.chars().enumerate() {
            if index >= self.word_length() {
                return false;
            }
            match self.correct_letters[index] {
                Some(correct_letter) if correct_letter != letter => return false,
                None if self.prohibited_letters[index].has(letter) => return false,
                _ => {}
            }
            *letter_counts.entry(letter).or_insert(0) += 1;
            length += 1;
        }
        if length != self.word_length() {
            return false;
        }
        for letter in &self.almost_letters {
            match letter_counts.get_mut(letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    fn prohibit(&mut self, letter: char, index: usize) {
        let prohibited = &mut self.prohibited_letters[index];
        if self.correct_letters[index].is_none()
            && !prohibited.has(letter)
            && prohibited.would_fill(letter)
        {
            warn!("no letters remain possible at location {}", index);
        }
        prohibited.add(letter);
    }

    /// Adds the letters used by one result to the required letters. A letter is only added
    /// again when the result used it more times than it was already required.
    fn merge_required_letters(&mut self, used_letters: &[char]) {
        let existing_counts = letter_counts(&self.almost_letters);
        let mut new_counts = letter_counts(used_letters);
        for letter in used_letters {
            let existing = existing_counts.get(letter).copied().unwrap_or(0);
            if let Some(count) = new_counts.get_mut(letter) {
                if existing < *count {
                    *count -= 1;
                    self.almost_letters.push(*letter);
                }
            }
        }
    }
}

fn letter_counts(letters: &[char]) -> HashMap<char, usize> {
    let mut counts = HashMap::with_capacity(letters.len());
    for letter in letters {
        *counts.entry(*letter).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let correct: String = self
            .correct_letters
            .iter()
            .map(|letter| letter.unwrap_or('?'))
            .collect();
        let almost: Vec<String> = self
            .almost_letters
            .iter()
            .map(|letter| letter.to_string())
            .collect();
        let prohibited: Vec<String> = self
            .prohibited_letters
            .iter()
            .map(|letters| letters.to_string())
            .collect();
        write!(
            f,
            "{{correctLetters:{} almostLetters:[{}] prohibitedLetters:[{}]}}",
            correct,
            almost.join(" "),
            prohibited.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Guess;
    use crate::results::Score;

    fn result(guess: &str, score: &str) -> GuessResult {
        GuessResult {
            guess: Guess::new(guess),
            score: Score::new(score),
        }
    }

    fn letters(text: &str) -> LetterSet {
        text.chars().collect()
    }

    #[test]
    fn merge_result_letter_correct_later() {
        let mut history = History::new(5);

        history.merge_result(&result("treat", "nannc"));

        assert_eq!(history.correct_letters()[4], Some('t'));
        assert_eq!(history.almost_letters(), &['r', 't']);
        assert_eq!(
            history.prohibited_letters(),
            &[
                letters("aet"),
                letters("aert"),
                letters("aet"),
                letters("aet"),
                letters("aet"),
            ]
        );
        // "strut" would have scored "aannc".
        assert_eq!(history.allows("strut"), false);
        assert!(history.allows("short"));
    }

    #[test]
    fn merge_result_letter_scored_earlier() {
        let mut history = History::new(5);

        history.merge_result(&result("tatty", "cannn"));

        assert_eq!(history.almost_letters(), &['t', 'a']);
        assert_eq!(history.prohibited_letters()[0], letters("y"));
        assert_eq!(history.prohibited_letters()[1], letters("ay"));
        assert_eq!(history.prohibited_letters()[2], letters("ty"));
        assert_eq!(history.prohibited_letters()[3], letters("ty"));
        assert!(history.allows("toast"));
    }

    #[test]
    fn merge_result_mostly_correct() {
        let mut history = History::new(5);

        history.merge_result(&result("shove", "accnc"));

        assert_eq!(
            history.correct_letters(),
            &[None, Some('h'), Some('o'), None, Some('e')]
        );
        assert_eq!(history.almost_letters(), &['s', 'h', 'o', 'e']);
        assert_eq!(
            history.prohibited_letters(),
            &[
                letters("sv"),
                letters("v"),
                letters("v"),
                letters("v"),
                letters("v"),
            ]
        );
    }

    #[test]
    fn merge_result_repeated_letter_scored_later() {
        let mut history = History::new(5);

        history.merge_result(&result("eerie", "ananc"));

        assert_eq!(history.almost_letters(), &['e', 'r', 'e']);
        assert_eq!(history.prohibited_letters()[0], letters("ei"));
        assert_eq!(history.prohibited_letters()[1], letters("ei"));
        assert_eq!(history.prohibited_letters()[2], letters("ri"));
        assert!(history.allows("there"));
    }

    #[test]
    fn merge_required_letters() {
        let mut history = History::new(5);

        history.merge_required_letters(&[]);
        assert!(history.almost_letters().is_empty());

        history.merge_required_letters(&['a', 'b', 'c']);
        assert_eq!(history.almost_letters(), &['a', 'b', 'c']);

        let mut history = History::new(5);
        history.almost_letters = vec!['a', 'b'];
        history.merge_required_letters(&['a', 'a']);
        assert_eq!(history.almost_letters(), &['a', 'b', 'a']);

        let mut history = History::new(5);
        history.almost_letters = vec!['a', 'a', 'a'];
        history.merge_required_letters(&['a', 'a', 'b', 'b', 'c']);
        // More letters are required than fit in the word, so nothing is allowed.
        assert_eq!(history.almost_letters(), &['a', 'a', 'a', 'b', 'b', 'c']);
        assert_eq!(history.allows("aaabb"), false);
    }

    #[test]
    fn allows_counts_required_letters() {
        let mut history = History::new(5);
        history.almost_letters = vec!['t', 'a', 't'];
        history.prohibited_letters[0] = letters("f");

        assert!(history.allows("batty"));
        assert_eq!(history.allows("fatty"), false);
        assert_eq!(history.allows("party"), false);
    }

    #[test]
    fn allows_ignores_prohibited_at_correct_location() {
        let mut history = History::new(5);
        history.correct_letters[4] = Some('t');
        history.prohibited_letters = vec![letters("t"); 5];

        assert!(history.allows("great"));
        assert_eq!(history.allows("treat"), false);
    }

    #[test]
    fn allows_wrong_length() {
        let history = History::new(5);

        assert!(history.allows("abcde"));
        assert_eq!(history.allows("abcd"), false);
        assert_eq!(history.allows("abcdef"), false);
        assert_eq!(history.allows(""), false);
    }

    #[test]
    fn display() {
        let mut history = History::new(5);
        history.correct_letters[4] = Some('q');
        history.almost_letters = vec!['c', 'a', 'b'];
        history.prohibited_letters[1] = letters("zer");
        history.prohibited_letters[2] = letters("zxa");

        assert_eq!(
            history.to_string(),
            "{correctLetters:????q almostLetters:[c a b] prohibitedLetters:[[] [erz] [axz] [] []]}"
        );
    }
}
