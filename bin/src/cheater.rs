use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::info;
use rs_wordle_cheater::*;
use std::io::BufRead;
use std::io::Write;

/// Reads guesses and scores from the input, and shows which words could still be the answer.
pub struct InteractiveCheater<R: BufRead, W: Write> {
    input: R,
    output: W,
    /// Guesses must be one of these words, unless there are none.
    all_words: WordBank,
    available_words: WordBank,
    history: History,
    word_length: usize,
}

impl<R: BufRead, W: Write> InteractiveCheater<R, W> {
    pub fn new(input: R, output: W, words: WordBank, word_length: usize) -> Self {
        InteractiveCheater {
            input,
            output,
            available_words: words.clone(),
            all_words: words,
            history: History::new(word_length),
            word_length,
        }
    }

    /// Runs until a score with only correct letters is entered. Running out of input is an
    /// error.
    pub fn run(&mut self) -> Result<()> {
        self.print_rules()?;
        loop {
            let guess = self.read_guess()?;
            let score = self.read_score()?;
            if score.is_all_correct() {
                info!("solved with {}", guess);
                return Ok(());
            }
            let result = GuessResult { guess, score };
            self.history.add_result(&result, &mut self.available_words);
            self.show_possible()?;
        }
    }

    fn print_rules(&mut self) -> Result<()> {
        writeln!(self.output, "Running wordle-cheater")?;
        writeln!(
            self.output,
            " * Guesses and scores are {} letters long",
            self.word_length
        )?;
        writeln!(self.output, " * Scores are only made of the following letters:")?;
        writeln!(
            self.output,
            "   C - if a letter is in the word and in the correct location"
        )?;
        writeln!(
            self.output,
            "   A - if a letter is in the word, but in the wrong location"
        )?;
        writeln!(self.output, "   N - if a letter is not in the word")?;
        writeln!(
            self.output,
            "The app runs until the correct word is found from a guess with only correct letters.\n"
        )?;
        Ok(())
    }

    fn read_guess(&mut self) -> Result<Guess> {
        loop {
            write!(self.output, "Enter guess ({} letters): ", self.word_length)?;
            self.output.flush()?;
            let guess = Guess::new(&self.read_token().context("scanning guess")?);
            match guess.validate(self.word_length, &self.all_words) {
                Ok(()) => return Ok(guess),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn read_score(&mut self) -> Result<Score> {
        loop {
            write!(self.output, "Enter score: ")?;
            self.output.flush()?;
            let score = Score::new(&self.read_token().context("scanning score")?);
            match score.validate(self.word_length) {
                Ok(()) => return Ok(score),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Shows the remaining words unless the answer starts with `n`. An empty answer means yes.
    fn show_possible(&mut self) -> Result<()> {
        write!(self.output, "show possible words [Yn]: ")?;
        self.output.flush()?;
        let choice = self.read_line().context("scanning choice")?;
        if choice.trim().to_lowercase().starts_with('n') {
            return Ok(());
        }
        writeln!(
            self.output,
            "remaining valid words: {}",
            self.available_words.sorted()
        )?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow!("unexpected end of input"));
        }
        Ok(line)
    }

    /// Reads the first word of the next line that has one.
    fn read_token(&mut self) -> Result<String> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }
}
