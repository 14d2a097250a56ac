//! End-to-end session scenarios through the public API.

use gridmatch_core::{
    Board, Mark, Mode, MoveError, Outcome, Position, Round, RoundId, Session, SessionError,
    choose_move_with, rules,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn play(session: Session, indices: &[usize]) -> Session {
    indices
        .iter()
        .fold(session, |s, &idx| s.submit_move(idx).expect("Valid move"))
}

#[test]
fn test_top_row_win_scores_x() {
    let session = Session::new().start_round();
    assert_eq!(*session.score().x_wins(), 0);

    let session = play(session, &[0, 4, 1, 5, 2]);

    assert_eq!(session.outcome(), Some(Outcome::Won(Mark::X)));
    assert_eq!(*session.score().x_wins(), 1);
    assert_eq!(*session.score().o_wins(), 0);
    assert_eq!(*session.score().ties(), 0);
}

#[test]
fn test_full_board_tie_scores_tie() {
    let session = play(Session::new().start_round(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let round = session.round().expect("Round exists");
    assert_eq!(round.board().display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
    assert_eq!(round.outcome(), Outcome::Tied);
    assert_eq!(*session.score().ties(), 1);
    assert_eq!(session.score().total(), 1);
}

#[test]
fn test_diagonal_ends_round_before_board_fills() {
    // The seventh move (X at 6) completes 2-4-6; later moves bounce.
    let session = play(Session::new().start_round(), &[0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(session.outcome(), Some(Outcome::Won(Mark::X)));

    assert_eq!(
        session.submit_move(8),
        Err(SessionError::Move(MoveError::GameOver))
    );
    let round = session.round().expect("Round exists");
    assert_eq!(round.submit_move(8, Mark::O), Err(MoveError::GameOver));
    assert_eq!(*session.score().ties(), 0);
    assert_eq!(*session.score().x_wins(), 1);
}

#[test]
fn test_opponent_takes_diagonal_win() {
    // O holds 0 and 4, X holds 1 and 2; O to move must complete 0-4-8.
    let round = Round::replay(
        RoundId::FIRST,
        &[Position::TopCenter, Position::TopLeft, Position::TopRight, Position::Center, Position::MiddleLeft],
    )
    .expect("Valid replay");
    assert_eq!(round.active_mark(), Mark::O);

    for seed in 0..16 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        assert_eq!(
            choose_move_with(round.board(), Mark::O, &mut rng),
            Some(Position::BottomRight)
        );
    }
}

#[test]
fn test_occupied_square_rejected_without_side_effects() {
    let session = play(Session::new().start_round(), &[0, 4]);
    let before = session.clone();

    assert_eq!(
        session.submit_move(4),
        Err(SessionError::Move(MoveError::SquareOccupied(Position::Center)))
    );
    assert_eq!(session, before);
    assert_eq!(session.outcome(), Some(Outcome::InProgress));
    assert_eq!(session.score().total(), 0);
}

#[test]
fn test_out_of_range_rejected() {
    let session = Session::new().start_round();
    assert_eq!(
        session.submit_move(9),
        Err(SessionError::Move(MoveError::OutOfRange(9)))
    );
}

#[test]
fn test_select_mode_while_started_is_rejected() {
    let session = play(Session::new().start_round(), &[4]);

    assert_eq!(
        session.select_mode(Mode::HumanVsAutomated),
        Err(SessionError::RoundActive)
    );
    assert_eq!(session.mode(), Mode::HumanVsHuman);
    assert_eq!(session.round().map(|r| r.history().len()), Some(1));
}

#[test]
fn test_select_mode_between_rounds_clears_round() {
    let session = play(Session::new().start_round(), &[0, 4, 1, 5, 2]);

    let session = session
        .select_mode(Mode::HumanVsAutomated)
        .expect("No round in progress");
    assert_eq!(session.mode(), Mode::HumanVsAutomated);
    assert!(session.round().is_none());
    assert_eq!(*session.score().x_wins(), 1);
}

#[test]
fn test_reset_clears_everything() {
    let session = Session::with_mode(Mode::HumanVsAutomated);
    let session = play(session.start_round(), &[0, 4, 1, 5, 2]).start_round();

    let reset = session.reset();
    assert_eq!(reset, Session::new());
    assert_eq!(reset.mode(), Mode::HumanVsHuman);
    assert!(!reset.started());
}

#[test]
fn test_alternation_and_single_scoring_over_many_rounds() {
    let mut session = Session::with_mode(Mode::HumanVsAutomated);
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..50 {
        session = session.start_round();
        let mut expected = Mark::X;
        while session.started() {
            let round = session.round().expect("Round exists");
            assert_eq!(round.active_mark(), expected);

            let pos = choose_move_with(round.board(), expected, &mut rng).expect("Board has room");
            assert!(rules::legal_moves(round.board()).contains(&pos));
            session = session.submit_move(pos.to_index()).expect("Legal move");
            expected = expected.opponent();
        }
    }

    assert_eq!(session.score().total(), 50);
}

#[test]
fn test_chooses_none_only_on_full_board() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    assert!(choose_move_with(&Board::new(), Mark::X, &mut rng).is_some());

    let round = Round::replay(
        RoundId::FIRST,
        &[0, 1, 2, 4, 3, 5, 7, 6, 8].map(|i| Position::ALL[i]),
    )
    .expect("Valid replay");
    assert!(rules::legal_moves(round.board()).is_empty());
    assert_eq!(choose_move_with(round.board(), Mark::O, &mut rng), None);
}

#[test]
fn test_mid_round_session_survives_json() {
    let session = play(Session::new().start_round(), &[4, 0, 8]);

    let json = serde_json::to_string(&session).expect("Serialize");
    let restored: Session = serde_json::from_str(&json).expect("Deserialize");

    assert_eq!(restored, session);
    let next = restored.submit_move(2).expect("O may continue");
    assert_eq!(next.round().map(|r| r.history().len()), Some(4));
}
