//! Input Modes
//!
//! Which part of the screen owns the keyboard.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key actions (paste, strip, copy, save, reset)
    Normal,
    /// Editing the input buffer
    Insert,
    /// Typing a path in the save dialog
    Save,
    /// Waiting for y/n
    Confirm,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Save => "SAVE",
            Self::Confirm => "CONFIRM",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModeState {
    pub mode: InputMode,
}

impl Default for ModeState {
    fn default() -> Self {
        Self { mode: InputMode::Normal }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    pub fn to_insert(&mut self) {
        self.set_mode(InputMode::Insert);
    }

    pub fn to_save(&mut self) {
        self.set_mode(InputMode::Save);
    }

    pub fn to_confirm(&mut self) {
        self.set_mode(InputMode::Confirm);
    }
}
