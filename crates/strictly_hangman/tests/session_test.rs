//! Tests for the hangman session engine.

use strictly_hangman::{
    Cell, GuessKind, InvalidWordError, Notice, Outcome, Session, TerminalReason,
};

#[test]
fn test_cat_is_won_on_third_guess() {
    let mut session = Session::start("CAT").unwrap();

    let first = session.submit_guess("C");
    assert_eq!(first.outcome(), Outcome::InProgress);
    let second = session.submit_guess("A");
    assert_eq!(second.outcome(), Outcome::InProgress);

    let third = session.submit_guess("T");
    assert_eq!(third.outcome(), Outcome::Won);
    assert!(third.ended());
    assert_eq!(third.reason(), &Some(TerminalReason::WordRevealed));
    assert_eq!(session.board().render(" "), "C A T");
    assert_eq!(session.notice(), Some(&Notice::Won));
}

#[test]
fn test_dog_is_lost_on_third_wrong_guess() {
    let mut session = Session::with_ceiling("DOG", 3).unwrap();

    for guess in ["X", "Y"] {
        let result = session.submit_guess(guess);
        assert!(!result.ended());
        assert_eq!(result.outcome(), Outcome::InProgress);
    }

    let fatal = session.submit_guess("Z");
    assert_eq!(fatal.kind(), &GuessKind::Wrong { stage: 3, fatal: true });
    assert!(fatal.ended());
    assert_eq!(fatal.outcome(), Outcome::Lost);
    assert_eq!(
        fatal.reason(),
        &Some(TerminalReason::MistakesExhausted {
            secret: "DOG".to_string()
        })
    );
    assert_eq!(session.disclosed_word().as_deref(), Some("DOG"));

    let ignored = session.submit_guess("W");
    assert_eq!(ignored.kind(), &GuessKind::SessionOver);
    assert_eq!(ignored.outcome(), Outcome::Lost);
    assert!(!ignored.ended());
    assert_eq!(session.mistakes().stage(), 3);
    assert!(!session.history().contains('W'));
}

#[test]
fn test_bat_duplicate_costs_nothing() {
    let mut session = Session::start("BAT").unwrap();
    session.submit_guess("B");
    let board_before = session.board().clone();

    let repeat = session.submit_guess("B");
    assert_eq!(repeat.kind(), &GuessKind::Duplicate);
    assert_eq!(repeat.letter(), Some('B'));
    assert_eq!(session.mistakes().stage(), 0);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.notice(), Some(&Notice::DuplicateGuess));
}

#[test]
fn test_duplicate_wrong_guess_costs_nothing() {
    let mut session = Session::start("BAT").unwrap();
    session.submit_guess("q");
    let repeat = session.submit_guess("Q");
    assert_eq!(repeat.kind(), &GuessKind::Duplicate);
    assert_eq!(session.mistakes().stage(), 1);
}

#[test]
fn test_empty_guess_mid_session() {
    let mut session = Session::start("BAT").unwrap();
    session.submit_guess("A");
    let before = session.snapshot();

    let result = session.submit_guess("");
    assert_eq!(result.kind(), &GuessKind::Empty);
    assert_eq!(result.outcome(), Outcome::InProgress);
    assert_eq!(result.letter(), None);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_repeated_letter_revealed_at_once() {
    let mut session = Session::start("banana").unwrap();
    let result = session.submit_guess("a");
    assert_eq!(
        result.kind(),
        &GuessKind::Correct {
            revealed: vec![1, 3, 5]
        }
    );
    assert_eq!(session.board().revealed_count(), 3);
    assert_eq!(session.board().render(""), "_A_A_A");
}

#[test]
fn test_won_session_is_idempotent() {
    let mut session = Session::start("ab").unwrap();
    session.submit_guess("a");
    session.submit_guess("b");
    let before = session.snapshot();

    for guess in ["c", "a", "", "zz"] {
        let result = session.submit_guess(guess);
        assert_eq!(result.kind(), &GuessKind::SessionOver);
        assert_eq!(result.outcome(), Outcome::Won);
        assert!(result.reason().is_none());
    }
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_win_with_one_mistake_left() {
    let mut session = Session::with_ceiling("ab", 2).unwrap();
    session.submit_guess("z");
    session.submit_guess("a");
    let result = session.submit_guess("b");
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(session.mistakes().remaining(), 1);
    assert!(session.disclosed_word().is_none());
}

#[test]
fn test_default_ceiling_survives_seven_wrong_guesses() {
    let mut session = Session::start("q").unwrap();
    for (i, guess) in "abcdefg".chars().enumerate() {
        let result = session.submit_letter(guess);
        assert_eq!(
            result.kind(),
            &GuessKind::Wrong {
                stage: i + 1,
                fatal: false
            }
        );
    }
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.mistakes().remaining(), 1);

    let result = session.submit_letter('h');
    assert_eq!(result.kind(), &GuessKind::Wrong { stage: 8, fatal: true });
    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_snapshot_contents() {
    let mut session = Session::with_ceiling("ox", 2).unwrap();
    session.submit_guess("x");
    session.submit_guess("e");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.cells(), &vec![Cell::Hidden, Cell::Revealed('X')]);
    assert_eq!(snapshot.stage(), 1);
    assert_eq!(snapshot.ceiling(), 2);
    assert_eq!(snapshot.used_letters(), &vec!['X', 'E']);
    assert_eq!(snapshot.outcome(), Outcome::InProgress);
    assert!(snapshot.disclosed_word().is_none());

    session.submit_guess("f");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.disclosed_word().as_deref(), Some("OX"));
    assert_eq!(snapshot.notice(), &Some(Notice::Lost("OX".to_string())));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = Session::start("ox").unwrap();
    session.submit_guess("o");
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["used_letters"][0], "O");
    assert_eq!(json["disclosed_word"], serde_json::Value::Null);
}

#[test]
fn test_invalid_words() {
    assert_eq!(Session::start("").unwrap_err(), InvalidWordError::Empty);
    assert!(Session::start("r2d2").is_err());
    assert!(Session::start("two words").is_err());
}
