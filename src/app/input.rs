use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{
    handle_text_key,
    keymap::{confirm_action, insert_mode_action, normal_mode_action, Action},
    modes::InputMode,
    TextEditing,
};

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = self.resolve_action(key);
        self.execute_action(action);
    }

    /// Bracketed paste from the terminal.
    pub fn handle_paste_event(&mut self, text: &str) {
        match self.mode_state.mode {
            InputMode::Normal => self.load_pasted_text(text),
            InputMode::Insert => self.insert_pasted_text(text),
            InputMode::Save => self.paste_into_save_path(text),
            InputMode::Confirm => {}
        }
    }

    fn resolve_action(&mut self, key: KeyEvent) -> Action {
        match self.mode_state.mode {
            InputMode::Normal => normal_mode_action(key),
            InputMode::Insert => self.resolve_insert_action(key),
            InputMode::Save => self.handle_save_key(key),
            InputMode::Confirm => confirm_action(key),
        }
    }

    fn resolve_insert_action(&mut self, key: KeyEvent) -> Action {
        if let Some(action) = insert_mode_action(key) {
            return action;
        }
        self.edit_input(key.code, key.modifiers);
        Action::None
    }

    fn edit_input(&mut self, code: KeyCode, mods: KeyModifiers) {
        match (code, mods) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_typed_char(c),
            (KeyCode::Enter, _) => self.input.insert_char('\n'),
            _ => {
                handle_text_key(&mut self.input, code, mods, false);
            }
        }
    }

    fn handle_save_key(&mut self, key: KeyEvent) -> Action {
        let Some(dialog) = self.save_dialog.as_mut() else {
            self.mode_state.to_normal();
            return Action::None;
        };

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.cancel_save(),
            (KeyCode::Enter, _) => self.confirm_save(),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
            (code, mods) => {
                dialog.error = None;
                handle_text_key(&mut dialog.path, code, mods, true);
            }
        }

        Action::None
    }

    fn paste_into_save_path(&mut self, text: &str) {
        let Some(dialog) = self.save_dialog.as_mut() else {
            return;
        };
        let line = text.lines().next().unwrap_or_default();
        dialog.path.insert_str(line.trim());
    }
}
