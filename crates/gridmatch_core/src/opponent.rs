//! Greedy one-ply opponent.
//!
//! Priority: take an immediate win, else block the opponent's immediate
//! win, else play a uniformly random empty square. It does not look for
//! forks or double threats and can lose to perfect play.

use super::{Board, Mark, Position, rules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Why the opponent picked a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the own mark.
    #[display("win")]
    Win,
    /// Stops the other mark completing a line.
    #[display("block")]
    Block,
    /// Random empty square.
    #[display("random")]
    Random,
}

/// First legal move (ascending) at which `mark` would complete a line.
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    rules::legal_moves(board)
        .into_iter()
        .find(|pos| rules::winner(&board.with_mark(*pos, mark)) == Some(mark))
}

/// Chooses a move and reports why, drawing fallback randomness from `rng`.
///
/// Returns `None` only when the board has no empty squares.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_move_explained<R>(board: &Board, own: Mark, rng: &mut R) -> Option<(Position, Reason)>
where
    R: rand::Rng + ?Sized,
{
    if let Some(pos) = winning_move(board, own) {
        return Some((pos, Reason::Win));
    }

    if let Some(pos) = winning_move(board, own.opponent()) {
        return Some((pos, Reason::Block));
    }

    rules::legal_moves(board)
        .choose(rng)
        .map(|pos| (*pos, Reason::Random))
}

/// Chooses a move for `own`, drawing fallback randomness from `rng`.
pub fn choose_move_with<R>(board: &Board, own: Mark, rng: &mut R) -> Option<Position>
where
    R: rand::Rng + ?Sized,
{
    let choice = choose_move_explained(board, own, rng);
    if let Some((pos, reason)) = choice {
        debug!(%own, position = %pos, %reason, "Opponent chose move");
    }
    choice.map(|(pos, _)| pos)
}

/// Chooses a move for `own` using the thread-local RNG.
pub fn choose_move(board: &Board, own: Mark) -> Option<Position> {
    choose_move_with(board, own, &mut rand::rng())
}

/// Greedy opponent that owns its RNG, for repeatable play.
#[derive(Debug, Clone)]
pub struct GreedyOpponent {
    rng: StdRng,
}

impl GreedyOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a move for `own` on `board`.
    pub fn choose(&mut self, board: &Board, own: Mark) -> Option<Position> {
        choose_move_with(board, own, &mut self.rng)
    }
}

impl Default for GreedyOpponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn board_of(marks: &[(usize, Mark)]) -> Board {
        marks.iter().fold(Board::new(), |b, (idx, mark)| {
            b.with_mark(Position::ALL[*idx], *mark)
        })
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Mark::{O, X};
        let board = board_of(&[
            (0, X),
            (1, O),
            (2, X),
            (3, O),
            (4, X),
            (5, X),
            (6, O),
            (7, X),
            (8, O),
        ]);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        assert_eq!(choose_move_with(&board, O, &mut rng), None);
    }

    #[test]
    fn test_win_beats_block() {
        // O can win at 5 (3,4,5); X threatens 2 (0,1,2).
        let board = board_of(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (4, Mark::O),
            (8, Mark::X),
        ]);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(
            choose_move_explained(&board, Mark::O, &mut rng),
            Some((Position::MiddleRight, Reason::Win))
        );
    }

    #[test]
    fn test_first_winning_index_is_taken() {
        // X wins at 2 (0,1,2) and at 6 (0,3,6); ascending order picks 2.
        let board = board_of(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
        ]);
        assert_eq!(winning_move(&board, Mark::X), Some(Position::TopRight));
    }

    #[test]
    fn test_block() {
        let board = board_of(&[(0, Mark::X), (4, Mark::O), (1, Mark::X)]);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(
            choose_move_explained(&board, Mark::O, &mut rng),
            Some((Position::TopRight, Reason::Block))
        );
    }

    #[test]
    fn test_random_fallback_is_legal_and_seeded() {
        let board = board_of(&[(4, Mark::X)]);
        let legal = rules::legal_moves(&board);

        for seed in 0..32 {
            let mut a = GreedyOpponent::seeded(seed);
            let mut b = GreedyOpponent::seeded(seed);
            let pos = a.choose(&board, Mark::O).expect("Board has room");
            assert!(legal.contains(&pos));
            assert_eq!(b.choose(&board, Mark::O), Some(pos));
        }
    }
}
