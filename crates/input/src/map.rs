//! Mapping from terminal events to game commands.

use crate::types::BoardLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Click the board cell at (row, col)
    ClickCell { row: i32, col: i32 },
    /// Click the cell under the keyboard cursor
    ClickCursor,
    /// Move the keyboard cursor by (d_row, d_col)
    MoveCursor { d_row: i32, d_col: i32 },
    /// Start a new game
    Restart,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputCommand::MoveCursor { d_row: -1, d_col: 0 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputCommand::MoveCursor { d_row: 1, d_col: 0 })
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::MoveCursor { d_row: 0, d_col: -1 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputCommand::MoveCursor { d_row: 0, d_col: 1 })
        }

        // Select / move
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputCommand::ClickCursor),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),

        _ => None,
    }
}

/// Map a mouse event to a board click. Only left-button presses on the board count.
pub fn handle_mouse_event(event: MouseEvent, layout: &BoardLayout) -> Option<InputCommand> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .cell_at(event.column, event.row)
            .map(|(row, col)| InputCommand::ClickCell { row, col }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
