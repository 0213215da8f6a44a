//! Key bindings from crossterm events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

/// Map a key event to a command. Releases and unbound keys map to nothing;
/// auto-repeat counts as another press.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Play(Action::MoveLeft)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Play(Action::MoveRight)),
        KeyCode::Char(' ') => Some(Command::Play(Action::Fire)),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
