use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// A key press translated to its game meaning. Arrow keys and WASD map to
/// the same four directions; anything not listed here is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Reset,
    Quit,
}

impl Command {
    pub fn from_key_event(event: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(event) {
            return Some(Command::Quit);
        }

        let command = match event.code {
            KeyCode::Up | KeyCode::Char('w') => Command::Turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => Command::Turn(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => Command::Turn(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => Command::Turn(Direction::Right),
            KeyCode::Enter => Command::Start,
            KeyCode::Char('r') => Command::Reset,
            _ => return None,
        };

        Some(command)
    }
}

fn is_ctrl_c(event: &KeyEvent) -> bool {
    matches!(
        event,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn both_key_sets_map_to_the_four_directions() {
        let pairs = [
            (KeyCode::Up, KeyCode::Char('w'), Direction::Up),
            (KeyCode::Down, KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, KeyCode::Char('a'), Direction::Left),
            (KeyCode::Right, KeyCode::Char('d'), Direction::Right),
        ];

        for &(arrow, letter, dir) in pairs.iter() {
            assert_eq!(
                Command::from_key_event(&key(arrow)),
                Some(Command::Turn(dir))
            );
            assert_eq!(
                Command::from_key_event(&key(letter)),
                Some(Command::Turn(dir))
            );
        }
    }

    #[test]
    fn control_keys_map_to_controls() {
        assert_eq!(
            Command::from_key_event(&key(KeyCode::Enter)),
            Some(Command::Start)
        );
        assert_eq!(
            Command::from_key_event(&key(KeyCode::Char('r'))),
            Some(Command::Reset)
        );

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(Command::from_key_event(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('x'))), None);
        assert_eq!(Command::from_key_event(&key(KeyCode::Esc)), None);
        assert_eq!(Command::from_key_event(&key(KeyCode::F(1))), None);
        // A bare 'c' is not a quit request.
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('c'))), None);
    }
}
