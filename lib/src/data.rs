use crate::results::WordleError;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::result::Result;

/// A collection of unique words of the same length.
///
/// Words are kept in alphabetical order. A `WordBank` is cheap enough to clone that each
/// request or game filters its own copy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: BTreeSet<String>,
}

impl WordBank {
    /// Loads the words from the given text. Words are separated by whitespace.
    ///
    /// Words that are not `word_length` letters long are skipped. Every other word must already
    /// be lowercase, or the whole load fails.
    ///
    /// ```
    /// use rs_wordle_cheater::WordBank;
    ///
    /// let bank = WordBank::from_text("nasty\nalley ab  ready\n", 5).unwrap();
    /// assert_eq!(bank.iter().collect::<Vec<_>>(), vec!["alley", "nasty", "ready"]);
    ///
    /// assert!(WordBank::from_text("nasty Ready", 5).is_err());
    /// ```
    pub fn from_text(text: &str, word_length: usize) -> Result<WordBank, WordleError> {
        WordBank::from_iterator(text.split_whitespace(), word_length)
    }

    /// Loads the words from the given reader. See [`WordBank::from_text`].
    pub fn from_reader<R: BufRead>(
        mut word_reader: R,
        word_length: usize,
    ) -> Result<WordBank, WordleError> {
        let mut text = String::new();
        word_reader.read_to_string(&mut text)?;
        WordBank::from_text(&text, word_length)
    }

    /// Builds a word bank from already separated words. See [`WordBank::from_text`].
    pub fn from_iterator<S, I>(words: I, word_length: usize) -> Result<WordBank, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut bank = WordBank::default();
        for word in words {
            let word = word.as_ref();
            if word.chars().count() != word_length {
                continue;
            }
            if word.to_lowercase() != word {
                return Err(WordleError::UppercaseWord(word.to_string()));
            }
            bank.words.insert(word.to_string());
        }
        Ok(bank)
    }

    /// Returns `true` iff the word is in the bank.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Keeps only the words for which the predicate returns `true`.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.words.retain(|word| keep(word));
    }

    /// Joins the words in alphabetical order with commas.
    pub fn sorted(&self) -> String {
        self.iter().collect::<Vec<_>>().join(",")
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
