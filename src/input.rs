use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Confirm,
    Quit,
}

/// Waits up to `timeout` for one key press and maps it to a game input.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Maps a key press to a game input. Unbound keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            GameInput::Direction(Direction::Right)
        }
        KeyCode::Char('p' | 'P' | ' ') => GameInput::Pause,
        KeyCode::Char('r' | 'R') => GameInput::Restart,
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{GameInput, map_key};
    use crate::direction::Direction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('D'))),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn control_keys_map_to_commands() {
        assert_eq!(map_key(press(KeyCode::Char('p'))), Some(GameInput::Pause));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(GameInput::Pause));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(GameInput::Restart));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
