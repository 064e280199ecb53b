use crate::letter_set::LetterSet;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::result::Result;
use thiserror::Error;

pub const DEFAULT_BOX_SIDE_COUNT: usize = 4;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// The number of rounds in a row that may add a word without covering a new letter before
/// [`LetterBox::connections`] gives up.
const MAX_MISSES: usize = 5;

/// Indicates that a [`LetterBox`] is not a valid puzzle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LetterBoxedError {
    #[error("wanted a positive box side count")]
    NoSides,
    #[error("wanted a positive minimum word length")]
    ZeroMinWordLength,
    #[error("{letters} letters cannot be split evenly onto {sides} sides")]
    UnevenSides { letters: usize, sides: usize },
    #[error("{0:?} is duplicated or on multiple sides")]
    DuplicateLetter(char),
    #[error("{0:?} is not in a-z")]
    InvalidCharacter(char),
}

/// A Letter Boxed puzzle. The letters are split evenly onto the sides of the box, in order.
/// Words may not use two letters from the same side in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterBox {
    pub letters: String,
    pub box_side_count: usize,
    pub min_word_length: usize,
}

/// The words that fit a [`LetterBox`], and a chain of them that tries to use every letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connections {
    pub words: Vec<String>,
    /// Each word starts with the last letter of the word before it.
    pub chain: Vec<String>,
    /// Whether the chain uses every letter of the box.
    pub complete: bool,
}

#[derive(Debug)]
struct Connection {
    word: String,
    /// The box letters in the word that no chosen word has used yet.
    targets: LetterSet,
}

impl LetterBox {
    pub fn new(letters: &str, box_side_count: usize, min_word_length: usize) -> LetterBox {
        LetterBox {
            letters: letters.to_string(),
            box_side_count,
            min_word_length,
        }
    }

    /// Finds every word in the whitespace-separated text that can be spelled on the box, in
    /// alphabetical order.
    pub fn words(&self, words_text: &str) -> Result<Vec<String>, LetterBoxedError> {
        let letters: Vec<char> = self.letters.chars().collect();
        if letters.is_empty() {
            return Ok(Vec::new());
        }
        if self.box_side_count == 0 {
            return Err(LetterBoxedError::NoSides);
        }
        if self.min_word_length == 0 {
            return Err(LetterBoxedError::ZeroMinWordLength);
        }
        if letters.len() % self.box_side_count != 0 {
            return Err(LetterBoxedError::UnevenSides {
                letters: letters.len(),
                sides: self.box_side_count,
            });
        }
        let sides = self.sides(&letters)?;
        let mut words: Vec<String> = words_text
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_word_length && fits(&sides, word))
            .map(str::to_string)
            .collect();
        words.sort();
        Ok(words)
    }

    /// Greedily chains the words from the text so that together they use every letter.
    ///
    /// The chain starts with the best word. Each round then adds the best word that connects to
    /// either end of the chain; a word is only put at the start when it is strictly better than
    /// the best word for the end. The best word uses the most unused letters, then is shortest,
    /// then comes first alphabetically.
    pub fn connections(&self, words_text: &str) -> Result<Connections, LetterBoxedError> {
        let words = self.words(words_text)?;
        let mut targets: LetterSet = self.letters.chars().collect();
        let mut remaining: Vec<Connection> = words
            .iter()
            .map(|word| Connection::new(word, &targets))
            .collect();
        let mut chain: VecDeque<String> = VecDeque::new();
        let mut misses = 0;
        while !remaining.is_empty() && !targets.is_empty() && misses < MAX_MISSES {
            let num_targets = targets.len();
            if let Some((index, at_start)) = next_connection(&remaining, &chain) {
                let connection = remaining.swap_remove(index);
                for letter in connection.word.chars() {
                    targets.remove(letter);
                    for other in remaining.iter_mut() {
                        other.targets.remove(letter);
                    }
                }
                if at_start {
                    chain.push_front(connection.word);
                } else {
                    chain.push_back(connection.word);
                }
            }
            if targets.len() == num_targets {
                misses += 1;
            }
        }
        Ok(Connections {
            words,
            chain: chain.into(),
            complete: targets.is_empty(),
        })
    }

    /// Maps each letter to the index of its side.
    fn sides(&self, letters: &[char]) -> Result<HashMap<char, usize>, LetterBoxedError> {
        let side_length = letters.len() / self.box_side_count;
        let mut sides = HashMap::with_capacity(letters.len());
        for (index, letter) in letters.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(LetterBoxedError::InvalidCharacter(*letter));
            }
            if sides.insert(*letter, index / side_length).is_some() {
                return Err(LetterBoxedError::DuplicateLetter(*letter));
            }
        }
        Ok(sides)
    }
}

fn fits(sides: &HashMap<char, usize>, word: &str) -> bool {
    let mut previous_side = None;
    for letter in word.chars() {
        let side = match sides.get(&letter) {
            Some(side) => *side,
            None => return false,
        };
        if previous_side == Some(side) {
            return false;
        }
        previous_side = Some(side);
    }
    previous_side.is_some()
}

impl Connection {
    fn new(word: &str, targets: &LetterSet) -> Connection {
        Connection {
            word: word.to_string(),
            targets: word.chars().filter(|letter| targets.has(*letter)).collect(),
        }
    }

    fn first_letter(&self) -> Option<char> {
        self.word.chars().next()
    }

    fn last_letter(&self) -> Option<char> {
        self.word.chars().last()
    }
}

fn connection_order(a: &Connection, b: &Connection) -> Ordering {
    b.targets
        .len()
        .cmp(&a.targets.len())
        .then(a.word.len().cmp(&b.word.len()))
        .then_with(|| a.word.cmp(&b.word))
}

fn best_connection<P>(remaining: &[Connection], predicate: P) -> Option<usize>
where
    P: Fn(&Connection) -> bool,
{
    remaining
        .iter()
        .enumerate()
        .filter(|(_, connection)| predicate(*connection))
        .min_by(|(_, a), (_, b)| connection_order(a, b))
        .map(|(index, _)| index)
}

/// Returns the index of the next connection, and whether it goes at the start of the chain.
fn next_connection(remaining: &[Connection], chain: &VecDeque<String>) -> Option<(usize, bool)> {
    let (first_word, last_word) = match (chain.front(), chain.back()) {
        (Some(first_word), Some(last_word)) => (first_word, last_word),
        _ => return best_connection(remaining, |_| true).map(|index| (index, false)),
    };
    let chain_start = first_word.chars().next();
    let chain_end = last_word.chars().last();
    let before = best_connection(remaining, |connection| {
        connection.last_letter() == chain_start
    });
    let after = best_connection(remaining, |connection| {
        connection.first_letter() == chain_end
    });
    match (before, after) {
        (Some(before), Some(after))
            if connection_order(&remaining[before], &remaining[after]) == Ordering::Less =>
        {
            Some((before, true))
        }
        (Some(before), None) => Some((before, true)),
        (_, Some(after)) => Some((after, false)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("abc", 3, 2);

        assert_eq!(letter_box.words("ab cab bad")?, vec!["ab", "cab"]);
        Ok(())
    }

    #[test]
    fn words_four_sides() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("lmikfaecputb", 4, 3);

        assert_eq!(
            letter_box.words("zebra but fickle eat tamp puck bike left limp")?,
            vec!["bike", "eat", "fickle", "left", "puck", "tamp"]
        );
        Ok(())
    }

    #[test]
    fn words_two_letters() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("do", 2, 3);

        assert_eq!(letter_box.words("odd dodo")?, vec!["dodo"]);
        Ok(())
    }

    #[test]
    fn words_no_letters() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("", 0, 0);

        assert!(letter_box.words("a b c")?.is_empty());
        Ok(())
    }

    #[test]
    fn words_invalid_box() {
        let words_text = "a aa aaa";

        assert_eq!(
            LetterBox::new("abc", 0, 1).words(words_text),
            Err(LetterBoxedError::NoSides)
        );
        assert_eq!(
            LetterBox::new("ham", 3, 0).words(words_text),
            Err(LetterBoxedError::ZeroMinWordLength)
        );
        assert_eq!(
            LetterBox::new("rats", 3, 1).words(words_text),
            Err(LetterBoxedError::UnevenSides {
                letters: 4,
                sides: 3
            })
        );
        assert_eq!(
            LetterBox::new("aaaa", 4, 1).words(words_text),
            Err(LetterBoxedError::DuplicateLetter('a'))
        );
        assert_eq!(
            LetterBox::new("aBcd", 4, 1).words(words_text),
            Err(LetterBoxedError::InvalidCharacter('B'))
        );
    }

    #[test]
    fn new_connection_only_targets_box_letters() {
        let targets: LetterSet = "abcde".chars().collect();

        let connection = Connection::new("abracadabra", &targets);

        assert_eq!(connection.targets.to_string(), "[abcd]");
    }

    #[test]
    fn connection_order_prefers_more_targets_then_shorter() {
        let targets: LetterSet = "abcdefgh".chars().collect();
        let more = Connection::new("abcd", &targets);
        let fewer = Connection::new("abc", &targets);
        let longer = Connection::new("abcxyz", &targets);
        let later = Connection::new("bcd", &targets);

        assert_eq!(connection_order(&more, &fewer), Ordering::Less);
        assert_eq!(connection_order(&fewer, &longer), Ordering::Less);
        assert_eq!(connection_order(&fewer, &later), Ordering::Less);
        assert_eq!(connection_order(&later, &later), Ordering::Equal);
    }

    #[test]
    fn connections_one_word() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("love", 4, 4);

        let connections = letter_box.connections("far wide eat sleep pray love vowel")?;

        assert_eq!(connections.words, vec!["love"]);
        assert_eq!(connections.chain, vec!["love"]);
        assert!(connections.complete);
        Ok(())
    }

    #[test]
    fn connections_words_do_not_connect() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("farwide", 7, 3);

        let connections = letter_box.connections("far wide eat sleep pray love vowel")?;

        assert_eq!(connections.words, vec!["far", "wide"]);
        assert_eq!(connections.chain, vec!["wide"]);
        assert_eq!(connections.complete, false);
        Ok(())
    }

    #[test]
    fn connections_chain() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("lmikfaecputb", 4, 3);

        let connections = letter_box.connections("fickle eat tamp puck bike left")?;

        assert_eq!(connections.chain, vec!["fickle", "eat", "tamp", "puck"]);
        // Nothing connects to "b".
        assert_eq!(connections.complete, false);
        Ok(())
    }

    #[test]
    fn connections_prepends() -> Result<(), LetterBoxedError> {
        let letter_box = LetterBox::new("abcdef", 3, 2);

        let connections = letter_box.connections("face bdf")?;

        assert_eq!(connections.chain, vec!["bdf", "face"]);
        assert!(connections.complete);
        Ok(())
    }

    #[test]
    fn connections_invalid_box() {
        assert_eq!(
            LetterBox::new("x", 0, 0).connections(""),
            Err(LetterBoxedError::NoSides)
        );
    }
}
