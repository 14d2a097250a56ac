//! Headless self-play: the greedy policy plays both marks.

use gridmatch_core::{GreedyOpponent, Mode, Score, Session};
use tracing::{debug, info, instrument, warn};

/// Plays `rounds` rounds and returns the final score.
///
/// Both marks are driven by one seeded [`GreedyOpponent`] through the
/// session controller, so results repeat for a given seed.
#[instrument]
pub fn simulate(rounds: u32, seed: u64) -> Score {
    let mut opponent = GreedyOpponent::seeded(seed);
    let mut session = Session::with_mode(Mode::HumanVsHuman);

    for n in 0..rounds {
        session = session.start_round();
        while session.started() {
            let Some(round) = session.round() else { break };
            let mark = round.active_mark();
            let Some(position) = opponent.choose(round.board(), mark) else {
                break;
            };
            match session.submit_move(position.to_index()) {
                Ok(next) => session = next,
                Err(e) => {
                    warn!(round = n, error = %e, "Self-play move rejected");
                    break;
                }
            }
        }
        debug!(round = n, outcome = ?session.outcome(), "Round complete");
    }

    let score = session.score();
    info!(
        x_wins = score.x_wins(),
        o_wins = score.o_wins(),
        ties = score.ties(),
        "Simulation finished"
    );
    score
}

/// Renders a score as a one-line summary.
pub fn summary(score: &Score) -> String {
    format!(
        "X wins: {}  O wins: {}  Ties: {}  (rounds: {})",
        score.x_wins(),
        score.o_wins(),
        score.ties(),
        score.total()
    )
}
