use crate::letter_set::LetterSet;
use crate::results::WordleError;
use std::cmp::Ordering;
use std::result::Result;

/// The shortest word the Spelling Bee puzzle accepts.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// A Spelling Bee puzzle: words are built from the central letter and the other letters, and
/// must use the central letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellingBee {
    pub central_letter: char,
    /// Characters outside `a-z` are ignored.
    pub other_letters: String,
    pub min_length: usize,
}

/// A word that solves part of a [`SpellingBee`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredWord {
    pub value: String,
    pub score: usize,
    /// Whether the word uses every letter of the puzzle.
    pub is_pangram: bool,
}

impl SpellingBee {
    pub fn new(central_letter: char, other_letters: &str, min_length: usize) -> SpellingBee {
        SpellingBee {
            central_letter,
            other_letters: other_letters.to_string(),
            min_length,
        }
    }

    /// Finds every word in the whitespace-separated text that solves the puzzle, lowest score
    /// first.
    pub fn words(&self, words_text: &str) -> Result<Vec<ScoredWord>, WordleError> {
        let valid_letters = self.valid_letters()?;
        let mut words: Vec<ScoredWord> = words_text
            .split_whitespace()
            .filter_map(|value| {
                self.letters(value, &valid_letters)
                    .map(|letters| self.scored_word(value, letters, &valid_letters))
            })
            .collect();
        words.sort();
        Ok(words)
    }

    fn valid_letters(&self) -> Result<LetterSet, WordleError> {
        if !self.central_letter.is_ascii_lowercase() {
            return Err(WordleError::InvalidCharacter(self.central_letter));
        }
        let mut valid_letters: LetterSet = self
            .other_letters
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        valid_letters.add(self.central_letter);
        Ok(valid_letters)
    }

    /// The letters used by the word, if it solves the puzzle.
    fn letters(&self, value: &str, valid_letters: &LetterSet) -> Option<LetterSet> {
        if value.chars().count() < self.min_length {
            return None;
        }
        let mut letters = LetterSet::new();
        for letter in value.chars() {
            if !valid_letters.has(letter) {
                return None;
            }
            letters.add(letter);
        }
        if !letters.has(self.central_letter) {
            return None;
        }
        Some(letters)
    }

    fn scored_word(
        &self,
        value: &str,
        letters: LetterSet,
        valid_letters: &LetterSet,
    ) -> ScoredWord {
        let length = value.chars().count();
        let is_pangram = letters == *valid_letters;
        let mut score = 1;
        if self.min_length < length {
            score += length - 1;
        }
        if is_pangram {
            score += valid_letters.len();
        }
        ScoredWord {
            value: value.to_string(),
            score,
            is_pangram,
        }
    }
}

impl Ord for ScoredWord {
    /// Orders by score, then pangrams after other words, then by length, then alphabetically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.is_pangram.cmp(&other.is_pangram))
            .then(self.value.len().cmp(&other.value.len()))
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn scored(value: &str, score: usize, is_pangram: bool) -> ScoredWord {
        ScoredWord {
            value: value.to_string(),
            score,
            is_pangram,
        }
    }

    #[test]
    fn words() -> Result<(), WordleError> {
        let puzzle = SpellingBee::new('e', "hcking", DEFAULT_MIN_LENGTH);

        let words = puzzle.words("stuff inching chicken checking hen nice electro")?;

        assert_eq!(
            words,
            vec![
                scored("nice", 1, false),
                scored("chicken", 7, false),
                scored("checking", 15, true),
            ]
        );
        Ok(())
    }

    #[test]
    fn words_ignores_repeated_other_letters() -> Result<(), WordleError> {
        let puzzle = SpellingBee::new('f', "nun", 0);

        assert_eq!(puzzle.words("fun")?, vec![scored("fun", 6, true)]);
        Ok(())
    }

    #[test]
    fn words_ignores_invalid_other_letters() -> Result<(), WordleError> {
        let puzzle = SpellingBee::new('a', "B-t", 2);

        assert_eq!(puzzle.words("at bat tab")?, vec![scored("at", 3, true)]);
        Ok(())
    }

    #[test]
    fn words_empty_text() -> Result<(), WordleError> {
        let puzzle = SpellingBee::new('e', "hcking", DEFAULT_MIN_LENGTH);

        assert!(puzzle.words("")?.is_empty());
        Ok(())
    }

    #[test]
    fn words_invalid_central_letter() {
        let puzzle = SpellingBee::new('E', "hcking", DEFAULT_MIN_LENGTH);

        assert_matches!(
            puzzle.words("checking"),
            Err(WordleError::InvalidCharacter('E'))
        );
    }

    #[test]
    fn scored_word_order() {
        assert!(scored("large", 1, false) < scored("large", 8, false));
        assert!(scored("", 0, false) < scored("", 0, true));
        assert!(scored("tiny", 1, false) < scored("large", 1, false));
        assert!(scored("acne", 1, false) < scored("long", 1, false));
        assert_eq!(
            scored("long", 1, false).cmp(&scored("long", 1, false)),
            Ordering::Equal
        );
    }
}
