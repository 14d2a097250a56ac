//! Application state and logic.
//!
//! The app holds the current [`Session`] value and replaces it after
//! every accepted operation. Rejections leave it in place and only
//! update the notice line.

use super::input::{Action, move_cursor};
use crate::config::GameConfig;
use crate::scheduler::{AppEvent, AutomatedTurn};
use crossterm::event::KeyCode;
use gridmatch_core::{GreedyOpponent, Mark, Mode, Outcome, Position, Session, SessionError};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    opponent: GreedyOpponent,
    turn: AutomatedTurn,
    notice: String,
}

impl App {
    /// Creates the app. Automated moves are delivered on `tx`.
    pub fn new(config: &GameConfig, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let opponent = match config.seed() {
            Some(seed) => GreedyOpponent::seeded(*seed),
            None => GreedyOpponent::new(),
        };
        Self {
            session: Session::with_mode(*config.mode()),
            cursor: Position::Center,
            opponent,
            turn: AutomatedTurn::new(config.automated_delay(), tx),
            notice: "Press 's' to start a round.".to_string(),
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last message for the player.
    pub fn notice(&self) -> &str {
        &self.notice
    }

    /// True while the computer's reply is pending.
    pub fn is_thinking(&self) -> bool {
        self.turn.is_pending()
    }

    /// Describes the round for the status line.
    pub fn status_line(&self) -> String {
        let Some(round) = self.session.round() else {
            return format!("{} - no round in progress", self.session.mode());
        };
        match round.outcome() {
            Outcome::InProgress if self.is_thinking() => "Computer is thinking...".to_string(),
            Outcome::InProgress => format!("Player {}'s turn", round.active_mark()),
            Outcome::Won(mark) => format!("Player {} wins!", mark),
            Outcome::Tied => "It's a tie!".to_string(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match super::input::action_for(key) {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    /// Carries out an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Control {
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::StartRound => self.start_round(),
            Action::ToggleMode => self.toggle_mode(),
            Action::ResetSession => self.reset_session(),
            Action::Quit => {
                info!("User quit");
                self.turn.cancel();
                return Control::Quit;
            }
        }
        Control::Continue
    }

    /// Handles an event from the scheduler.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AutomatedMove { round_id, position } => {
                self.turn.complete(round_id);
                match self.session.submit_scheduled_move(round_id, position.to_index()) {
                    Ok(next) => {
                        self.notice = format!("Computer played {}", position);
                        self.replace(next);
                    }
                    Err(e) => debug!(error = %e, "Automated move dropped"),
                }
            }
        }
    }

    fn place(&mut self, pos: Position) {
        if self.is_thinking() {
            self.notice = "Wait for the computer to move.".to_string();
            return;
        }

        let result = match self.session.mode() {
            Mode::HumanVsHuman => self.session.submit_move(pos.to_index()),
            Mode::HumanVsAutomated => self.session.submit_move_as(pos.to_index(), Mark::X),
        };

        match result {
            Ok(next) => {
                self.notice = format!("Played {}", pos);
                self.replace(next);
            }
            Err(SessionError::NotStarted) => {
                self.notice = "Press 's' to start a round.".to_string();
            }
            Err(e) => self.notice = e.to_string(),
        }
    }

    fn start_round(&mut self) {
        self.turn.cancel();
        self.notice = "New round. X moves first.".to_string();
        let next = self.session.start_round();
        self.replace(next);
    }

    fn toggle_mode(&mut self) {
        let mode = self.session.mode().toggle();
        match self.session.select_mode(mode) {
            Ok(next) => {
                self.notice = format!("Mode: {}. Press 's' to start.", mode);
                self.replace(next);
            }
            Err(e) => self.notice = e.to_string(),
        }
    }

    fn reset_session(&mut self) {
        self.turn.cancel();
        self.notice = "Session reset.".to_string();
        let next = self.session.reset();
        self.replace(next);
    }

    /// Installs a new session and schedules the computer if it is its turn.
    fn replace(&mut self, next: Session) {
        self.session = next;

        if let Some(round) = self.session.round()
            && self.session.is_automated_turn()
            && let Some(pos) = self.opponent.choose(round.board(), round.active_mark())
        {
            self.turn.schedule(round.id(), pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmatch_core::Cell;
    use std::time::Duration;

    fn app(mode: Mode, delay_ms: u64) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = GameConfig::default().with_overrides(Some(mode), Some(delay_ms), Some(3));
        (App::new(&config, tx), rx)
    }

    #[tokio::test]
    async fn test_two_humans_alternate() {
        let (mut app, _rx) = app(Mode::HumanVsHuman, 0);
        app.apply(Action::StartRound);
        app.apply(Action::Place(Position::Center));
        app.apply(Action::Place(Position::TopLeft));

        let round = app.session().round().expect("Round exists");
        assert_eq!(round.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(round.board().get(Position::TopLeft), Cell::Occupied(Mark::O));
        assert!(!app.is_thinking());
    }

    #[tokio::test]
    async fn test_computer_replies_after_delay() {
        let (mut app, mut rx) = app(Mode::HumanVsAutomated, 5);
        app.apply(Action::StartRound);
        app.apply(Action::Place(Position::Center));
        assert!(app.is_thinking());
        assert_eq!(app.status_line(), "Computer is thinking...");

        // Input is ignored while the reply is pending
        app.apply(Action::Place(Position::TopLeft));
        assert_eq!(app.session().round().map(|r| r.history().len()), Some(1));

        let event = rx.recv().await.expect("Automated move");
        app.handle_event(event);

        let round = app.session().round().expect("Round exists");
        assert_eq!(round.history().len(), 2);
        assert_eq!(round.active_mark(), Mark::X);
        assert!(!app.is_thinking());
    }

    #[tokio::test]
    async fn test_restart_discards_pending_reply() {
        let (mut app, mut rx) = app(Mode::HumanVsAutomated, 20);
        app.apply(Action::StartRound);
        app.apply(Action::Place(Position::Center));
        assert!(app.is_thinking());

        app.apply(Action::StartRound);
        assert!(!app.is_thinking());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(app.session().round().map(|r| r.board().occupied()), Some(0));
    }

    #[tokio::test]
    async fn test_stale_event_is_ignored() {
        let (mut app, mut rx) = app(Mode::HumanVsAutomated, 5);
        app.apply(Action::StartRound);
        app.apply(Action::Place(Position::Center));
        let stale = rx.recv().await.expect("Automated move");

        app.apply(Action::StartRound);
        app.handle_event(stale);

        assert_eq!(app.session().round().map(|r| r.board().occupied()), Some(0));
    }

    #[tokio::test]
    async fn test_mode_toggle_only_between_rounds() {
        let (mut app, _rx) = app(Mode::HumanVsHuman, 0);
        app.apply(Action::ToggleMode);
        assert_eq!(app.session().mode(), Mode::HumanVsAutomated);

        app.apply(Action::StartRound);
        app.apply(Action::ToggleMode);
        assert_eq!(app.session().mode(), Mode::HumanVsAutomated);
        assert_eq!(app.notice(), "Cannot change mode while a round is in progress");
    }

    #[tokio::test]
    async fn test_reset_returns_to_initial_session() {
        let (mut app, _rx) = app(Mode::HumanVsHuman, 0);
        app.apply(Action::StartRound);
        for pos in [0, 4, 1, 5, 2] {
            app.apply(Action::Place(Position::ALL[pos]));
        }
        assert_eq!(*app.session().score().x_wins(), 1);
        assert_eq!(app.status_line(), "Player X wins!");

        app.apply(Action::ResetSession);
        assert_eq!(app.session(), &Session::new());
    }

    #[tokio::test]
    async fn test_quit_and_unbound_keys() {
        let (mut app, _rx) = app(Mode::HumanVsHuman, 0);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
        assert_eq!(app.handle_key(KeyCode::Right), Control::Continue);
        assert_eq!(app.cursor(), Position::MiddleRight);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
