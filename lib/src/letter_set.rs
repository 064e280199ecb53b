use crate::results::WordleError;
use std::fmt;

const ALL_LETTERS: u32 = (1 << 26) - 1;

/// A set of the letters `a` to `z`, stored as a bit field.
///
/// This is a plain value: copying it copies the whole set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    /// Creates an empty set.
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// Adds the letter to the set.
    ///
    /// # Panics
    ///
    /// Panics if the letter is not in `a-z`. User input must be validated before it reaches the
    /// set.
    pub fn add(&mut self, letter: char) {
        self.0 |= singleton(letter);
    }

    /// Removes the letter from the set.
    ///
    /// # Panics
    ///
    /// Panics if the letter is not in `a-z`.
    pub fn remove(&mut self, letter: char) {
        self.0 &= !singleton(letter);
    }

    /// Returns `true` iff the letter is in the set. Letters outside `a-z` are never in the set.
    pub fn has(&self, letter: char) -> bool {
        is_valid(letter) && self.0 & singleton(letter) != 0
    }

    /// Returns `true` iff adding the letter would leave the set holding every letter `a-z`.
    pub fn would_fill(&self, letter: char) -> bool {
        is_valid(letter) && self.0 | singleton(letter) == ALL_LETTERS
    }

    /// The number of letters in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the letters in the set in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(|letter| self.has(*letter))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let mut set = LetterSet::new();
        set.extend(letters);
        set
    }
}

impl Extend<char> for LetterSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, letters: I) {
        for letter in letters {
            self.add(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().collect::<String>())
    }
}

fn is_valid(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

fn singleton(letter: char) -> u32 {
    assert!(is_valid(letter), "{}", WordleError::InvalidCharacter(letter));
    1 << (letter as u32 - 'a' as u32)
}
