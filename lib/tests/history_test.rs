use rs_wordle_cheater::*;

use std::result::Result;

fn result(guess: &str, score: &str) -> GuessResult {
    GuessResult {
        guess: Guess::new(guess),
        score: Score::new(score),
    }
}

#[test]
fn add_result_filters_words() -> Result<(), WordleError> {
    let mut words = WordBank::from_text("nasty alley early great ready touch", 5)?;
    let mut history = History::new(5);

    history.add_result(&result("nasty", "nannc"), &mut words);

    assert_eq!(words.sorted(), "alley,ready");
    assert_eq!(history.correct_letters()[4], Some('y'));
    assert_eq!(history.almost_letters(), &['a', 'y']);
    for location in 0..4 {
        let prohibited = history.prohibited_letters()[location];
        assert!(prohibited.has('n'));
        assert!(prohibited.has('s'));
        assert!(prohibited.has('t'));
        assert_eq!(prohibited.has('a'), location == 1);
    }
    assert_eq!(history.allows("touch"), false);
    assert!(history.allows("ready"));
    Ok(())
}

#[test]
fn add_result_repeated_letters() -> Result<(), WordleError> {
    let mut words = WordBank::from_text("there where chare three ebony eerie", 5)?;
    let mut history = History::new(5);

    history.add_result(&result("ebony", "annnn"), &mut words);
    history.add_result(&result("eerie", "ananc"), &mut words);

    assert_eq!(history.almost_letters(), &['e', 'e', 'r']);
    assert_eq!(words.sorted(), "there,where");
    // Only one "e".
    assert_eq!(history.allows("chare"), false);
    // "r" was scored as not being in the middle.
    assert_eq!(history.allows("three"), false);
    Ok(())
}

#[test]
fn allows_does_not_change_history() {
    let mut history = History::new(5);
    history.merge_result(&result("nasty", "nannc"));
    let before = history.clone();

    assert_eq!(history.allows("ready"), history.allows("ready"));
    assert_eq!(history.allows("touch"), history.allows("touch"));
    assert_eq!(history, before);
}

#[test]
fn contradictory_results_allow_nothing() -> Result<(), WordleError> {
    let mut words = WordBank::from_text("aaaaa bbbba abbbb nasty", 5)?;
    let mut history = History::new(5);

    history.add_result(&result("aaaaa", "nnnnn"), &mut words);
    history.add_result(&result("bbbba", "nnnna"), &mut words);

    assert!(words.is_empty());
    Ok(())
}

#[test]
fn answer_survives_its_own_scores() -> Result<(), WordleError> {
    let all_words = WordBank::from_text(
        "eerie there where chare three ebony nasty alley early great ready touch sassy mesas \
         abbey array",
        5,
    )?;
    for answer in all_words.iter() {
        let mut history = History::new(5);
        for guess in all_words.iter() {
            let result = get_result_for_guess(answer, guess)?;
            history.merge_result(&result);
            assert!(
                history.allows(answer),
                "{} was removed by {} with history {}",
                answer,
                result,
                history
            );
        }
    }
    Ok(())
}

#[test]
fn all_correct_leaves_only_the_answer() -> Result<(), WordleError> {
    let mut words = WordBank::from_text("nasty alley early great ready touch", 5)?;
    let mut history = History::new(5);

    history.add_result(&get_result_for_guess("ready", "ready")?, &mut words);

    assert_eq!(words.sorted(), "ready");
    Ok(())
}

#[test]
fn letter_scored_not_present_before_correct_copy() -> Result<(), WordleError> {
    let mut words = WordBank::from_text("strut short treat great", 5)?;
    let mut history = History::new(5);

    history.add_result(&result("treat", "nannc"), &mut words);

    assert_eq!(words.sorted(), "short");
    Ok(())
}
