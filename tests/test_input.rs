use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_invaders::compute::Action;
use space_invaders::input::{command_for, Command};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrows_and_letters_move() {
    assert_eq!(command_for(&press(KeyCode::Left)), Some(Command::Play(Action::MoveLeft)));
    assert_eq!(command_for(&press(KeyCode::Char('a'))), Some(Command::Play(Action::MoveLeft)));
    assert_eq!(command_for(&press(KeyCode::Right)), Some(Command::Play(Action::MoveRight)));
    assert_eq!(command_for(&press(KeyCode::Char('D'))), Some(Command::Play(Action::MoveRight)));
}

#[test]
fn space_fires() {
    assert_eq!(command_for(&press(KeyCode::Char(' '))), Some(Command::Play(Action::Fire)));
}

#[test]
fn quit_keys() {
    assert_eq!(command_for(&press(KeyCode::Esc)), Some(Command::Quit));
    assert_eq!(command_for(&press(KeyCode::Char('q'))), Some(Command::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
}

#[test]
fn releases_and_unbound_keys_are_ignored() {
    let release = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(command_for(&release), None);
    assert_eq!(command_for(&press(KeyCode::Char('c'))), None);
    assert_eq!(command_for(&press(KeyCode::Up)), None);
}

#[test]
fn repeats_count_as_presses() {
    let repeat = KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(command_for(&repeat), Some(Command::Play(Action::Fire)));
}
