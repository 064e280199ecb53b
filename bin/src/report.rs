use rs_wordle_cheater::*;
use std::io;
use std::io::Write;

pub fn write_wordle<W: Write>(output: &mut W, cheater: &WordleCheater) -> io::Result<()> {
    for (index, result) in cheater.results.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, result)?;
    }
    writeln!(output, "history: {}", cheater.history)?;
    if cheater.show_possible {
        writeln!(
            output,
            "remaining valid words ({}): {}",
            cheater.possible.len(),
            cheater.possible.join(",")
        )?;
    }
    if cheater.done {
        writeln!(output, "game over")?;
    }
    Ok(())
}

pub fn write_spelling_bee<W: Write>(output: &mut W, cheater: &SpellingBeeCheater) -> io::Result<()> {
    let spelling_bee = match &cheater.spelling_bee {
        Some(spelling_bee) => spelling_bee,
        None => return writeln!(output, "no puzzle given"),
    };
    writeln!(
        output,
        "central letter {}, other letters {}: {} words, {} points, {} pangrams",
        spelling_bee.central_letter,
        spelling_bee.other_letters,
        cheater.words.len(),
        cheater.total_score,
        cheater.pangram_count
    )?;
    for word in &cheater.words {
        if word.is_pangram {
            writeln!(output, "{} {} pangram", word.value, word.score)?;
        } else {
            writeln!(output, "{} {}", word.value, word.score)?;
        }
    }
    Ok(())
}

pub fn write_letter_boxed<W: Write>(output: &mut W, cheater: &LetterBoxedCheater) -> io::Result<()> {
    writeln!(
        output,
        "letters {}: {} words",
        cheater.letter_box.letters,
        cheater.words.len()
    )?;
    for word in &cheater.words {
        writeln!(output, "{}", word)?;
    }
    Ok(())
}

pub fn write_connections<W: Write>(output: &mut W, connections: &Connections) -> io::Result<()> {
    writeln!(output, "{} words", connections.words.len())?;
    let status = if connections.complete {
        "complete"
    } else {
        "incomplete"
    };
    writeln!(output, "chain ({}): {}", status, connections.chain.join(" - "))
}
