//! Helpers for cheating at word puzzles: Wordle, Spelling Bee, and Letter Boxed.
//!
//! For Wordle, each guess and its score are merged into a [`History`], which then filters a
//! [`WordBank`] down to the words that could still be the answer.
//!
//! ```
//! use rs_wordle_cheater::GuessResult;
//! use rs_wordle_cheater::History;
//! use rs_wordle_cheater::WordBank;
//!
//! let mut words = WordBank::from_text("nasty alley early great ready touch", 5).unwrap();
//! let mut history = History::new(5);
//! let result = GuessResult::parse("nasty", "nannc", 5, &words).unwrap();
//!
//! history.add_result(&result, &mut words);
//!
//! assert_eq!(words.sorted(), "alley,ready");
//! ```

mod data;
mod history;
mod letter_boxed;
mod letter_set;
mod query;
mod results;
mod spelling_bee;

pub use data::WordBank;
pub use history::History;
pub use letter_boxed::*;
pub use letter_set::LetterSet;
pub use query::*;
pub use results::*;
pub use spelling_bee::*;
