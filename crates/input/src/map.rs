//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a slide direction.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Direction::Up
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Direction::Down
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Direction::Left
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Direction::Right
        }
        _ => return None,
    };
    Some(Command::Move(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<Command> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(key(KeyCode::Char('w')), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('S')), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('a')), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('D')), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_arrow_and_vi_keys() {
        assert_eq!(key(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(Command::Move(Direction::Right)));

        assert_eq!(key(KeyCode::Char('k')), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('J')), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('h')), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('l')), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_other_keys_do_nothing() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
