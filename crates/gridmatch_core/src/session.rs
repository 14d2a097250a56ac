//! Session controller: rounds, mode and score across a play session.
//!
//! Every operation borrows the current [`Session`] and returns the next
//! one. A rejected operation returns an error and the caller simply keeps
//! the session it already has, so rejection can never change the score.

use super::action::MoveError;
use super::opponent;
use super::round::{Round, RoundId};
use super::{Mark, Outcome, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who controls the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[display("Human vs Human")]
    HumanVsHuman,
    /// X is human, O is the automated player.
    #[display("Human vs Computer")]
    HumanVsAutomated,
}

impl Mode {
    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsAutomated,
            Self::HumanVsAutomated => Self::HumanVsHuman,
        }
    }

    /// The mark the automated player controls in this mode, if any.
    pub fn automated_mark(self) -> Option<Mark> {
        match self {
            Self::HumanVsHuman => None,
            Self::HumanVsAutomated => Some(Mark::O),
        }
    }
}

/// Accumulated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Tied rounds.
    ties: u32,
}

impl Score {
    /// Returns a score with `outcome` counted once. In-progress is ignored.
    pub fn record(self, outcome: Outcome) -> Self {
        let mut next = self;
        match outcome {
            Outcome::Won(Mark::X) => next.x_wins += 1,
            Outcome::Won(Mark::O) => next.o_wins += 1,
            Outcome::Tied => next.ties += 1,
            Outcome::InProgress => {}
        }
        next
    }

    /// Wins for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Number of finished rounds.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

/// Why a session operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// No round is in progress.
    #[display("No round in progress")]
    #[from(ignore)]
    NotStarted,

    /// Mode cannot change while a round is in progress.
    #[display("Cannot change mode while a round is in progress")]
    #[from(ignore)]
    RoundActive,

    /// A scheduled move targets a round that is no longer current.
    #[display("Move was for round {} but the current round is {:?}", expected, current)]
    #[from(ignore)]
    StaleRound {
        /// Round the move was computed against.
        expected: RoundId,
        /// Current round, if any.
        current: Option<RoundId>,
    },

    /// The round rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}

/// The context spanning multiple rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    mode: Mode,
    score: Score,
    round: Option<Round>,
    started: bool,
    next_round: RoundId,
}

impl Session {
    /// Creates a session: zero score, human-vs-human, no round.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(Mode::default())
    }

    /// Creates a session starting in `mode`.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            score: Score::default(),
            round: None,
            started: false,
            next_round: RoundId::FIRST,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Accumulated score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current round, `None` before the first start or after a mode change.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// True while the current round is in progress.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Outcome of the current round, if there is one.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.as_ref().map(Round::outcome)
    }

    /// Replaces the round with a fresh one and marks the session started.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn start_round(&self) -> Session {
        let id = self.next_round;
        info!(round_id = %id, "Starting round");
        Session {
            round: Some(Round::new(id)),
            started: true,
            next_round: id.next(),
            ..self.clone()
        }
    }

    /// Plays the active mark at `index` (0-8).
    ///
    /// Counts the outcome into the score exactly once, on the move that
    /// ends the round.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn submit_move(&self, index: usize) -> Result<Session, SessionError> {
        let acting = self.current_round()?.active_mark();
        self.apply(index, acting)
    }

    /// Plays `acting` at `index`, rejected with [`MoveError::WrongPlayer`]
    /// when it is not that mark's turn.
    ///
    /// For input whose owner is known, such as the human's keyboard in
    /// human-vs-automated mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn submit_move_as(&self, index: usize, acting: Mark) -> Result<Session, SessionError> {
        self.apply(index, acting)
    }

    /// Applies a delayed automated move only if `round_id` is still current.
    ///
    /// The move is played as the automated mark, so it is rejected if the
    /// turn has somehow passed back to the human.
    #[instrument(skip(self))]
    pub fn submit_scheduled_move(
        &self,
        round_id: RoundId,
        index: usize,
    ) -> Result<Session, SessionError> {
        let current = self.round.as_ref().map(Round::id);
        if current != Some(round_id) {
            warn!(expected = %round_id, ?current, "Discarding stale automated move");
            return Err(SessionError::StaleRound {
                expected: round_id,
                current,
            });
        }

        let acting = match self.mode.automated_mark() {
            Some(mark) => mark,
            None => self.current_round()?.active_mark(),
        };
        self.apply(index, acting)
    }

    fn current_round(&self) -> Result<&Round, SessionError> {
        match &self.round {
            Some(round) if self.started => Ok(round),
            Some(round) if round.is_terminal() => {
                warn!(round_id = %round.id(), "Move submitted after round ended");
                Err(SessionError::Move(MoveError::GameOver))
            }
            _ => {
                warn!("Move submitted with no round in progress");
                Err(SessionError::NotStarted)
            }
        }
    }

    fn apply(&self, index: usize, acting: Mark) -> Result<Session, SessionError> {
        let round = self.current_round()?;
        let next = round.submit_move(index, acting)?;

        let mut session = self.clone();
        if next.is_terminal() && !round.is_terminal() {
            session.score = session.score.record(next.outcome());
            session.started = false;
            info!(
                outcome = %next.outcome(),
                x_wins = session.score.x_wins,
                o_wins = session.score.o_wins,
                ties = session.score.ties,
                "Score updated"
            );
        }
        session.round = Some(next);
        Ok(session)
    }

    /// Changes mode and clears the round. Rejected while a round is in progress.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn select_mode(&self, mode: Mode) -> Result<Session, SessionError> {
        if self.started {
            warn!(to = %mode, "Mode change during round rejected");
            return Err(SessionError::RoundActive);
        }

        debug!(to = %mode, "Mode selected");
        Ok(Session {
            mode,
            round: None,
            ..self.clone()
        })
    }

    /// Returns a brand-new session with zero score in human-vs-human mode.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Session {
        info!(rounds_played = self.score.total(), "Resetting session");
        Session::new()
    }

    /// True when the automated player should move now.
    pub fn is_automated_turn(&self) -> bool {
        match (self.mode.automated_mark(), &self.round) {
            (Some(mark), Some(round)) => {
                round.outcome() == Outcome::InProgress && round.active_mark() == mark
            }
            _ => false,
        }
    }

    /// The automated player's choice for the current round, tagged with
    /// the round it was computed against.
    pub fn automated_move_with<R>(&self, rng: &mut R) -> Option<(RoundId, Position)>
    where
        R: rand::Rng + ?Sized,
    {
        if !self.is_automated_turn() {
            return None;
        }
        let round = self.round.as_ref()?;
        opponent::choose_move_with(round.board(), round.active_mark(), rng)
            .map(|pos| (round.id(), pos))
    }

    /// [`Session::automated_move_with`] using the thread RNG.
    pub fn automated_move(&self) -> Option<(RoundId, Position)> {
        self.automated_move_with(&mut rand::rng())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
