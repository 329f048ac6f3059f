use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Pause,
    Quit,
    None,
}

/// Vim keys, arrows and WASD all steer.
pub fn key_action(ev: &KeyEvent) -> KeyAction {
    if is_ctrl_c(ev) {
        return KeyAction::Quit;
    }

    match ev.code {
        KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => KeyAction::Turn(Direction::Up),
        KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => KeyAction::Turn(Direction::Right),
        KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => KeyAction::Turn(Direction::Down),
        KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => KeyAction::Turn(Direction::Left),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => KeyAction::Pause,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers, .. } if modifiers.contains(KeyModifiers::CONTROL))
}
