//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use gridmatch_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place directly at a square (keys 1-9).
    Place(Position),
    /// Start a new round.
    StartRound,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Zero the score and return to the initial mode.
    ResetSession,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_key_or_label(c.encode_utf8(&mut [0; 4])).map(Action::Place)
        }
        KeyCode::Char('s') => Some(Action::StartRound),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('r') => Some(Action::ResetSession),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
