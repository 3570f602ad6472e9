//! Key bindings
//!
//! Maps key events to application actions per mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Paste,
    RemoveTashkeel,
    CopyOutput,
    SaveOutput,
    Reset,
    Quit,
    EnterInsert,
    Cancel,
    Confirm,
    Deny,
    None,
}

/// Control shortcuts shared by Normal and Insert mode.
fn global_action(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('v'), KeyModifiers::CONTROL) => Some(Action::Paste),
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Some(Action::RemoveTashkeel),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(Action::CopyOutput),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::SaveOutput),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(Action::Reset),
        _ => None,
    }
}

pub fn normal_mode_action(key: KeyEvent) -> Action {
    if let Some(action) = global_action(key) {
        return action;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::EnterInsert,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::Paste,
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::RemoveTashkeel,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::CopyOutput,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::SaveOutput,
        (KeyCode::Char('R'), KeyModifiers::SHIFT | KeyModifiers::NONE) => Action::Reset,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        _ => Action::None,
    }
}

/// Insert mode only intercepts Esc and the control shortcuts; everything
/// else goes to the input buffer.
pub fn insert_mode_action(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Esc {
        return Some(Action::Cancel);
    }
    global_action(key)
}

pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Deny,
        _ => Action::None,
    }
}
