//! Application State
//!
//! Owns both text buffers and every piece of UI state. Each user action
//! is a method on [`App`] that runs to completion before the next event.

mod actions;
mod clipboard;
mod config;
mod input;

use std::time::Instant;

use ratatui::Frame;

use crate::input::modes::ModeState;
use crate::input::TextBuffer;
use crate::ui::components::{MessageType, SaveDialog};
use crate::ui::renderer::{Renderer, UiState};

pub use clipboard::{ClipboardError, ClipboardProvider, MemoryClipboard, SystemClipboard};
pub use config::{AppConfig, PendingAction};

pub struct App {
    pub config: AppConfig,
    pub mode_state: ModeState,
    pub input: TextBuffer,
    output: String,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    pub save_dialog: Option<SaveDialog>,
    pub should_quit: bool,
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            config,
            mode_state: ModeState::new(),
            input: TextBuffer::new(),
            output: String::new(),
            message: None,
            pending_action: None,
            save_dialog: None,
            should_quit: false,
            clipboard,
        }
    }

    /// The stripped result. Only `process_text` and `reset` write it.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());

        let state = UiState {
            mode: self.mode_state.mode,
            input: &self.input,
            output: &self.output,
            message,
            confirm_message,
            save_dialog: self.save_dialog.as_ref(),
        };

        Renderer::render(frame, &state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref().map(|(m, _, _)| m.as_str())
    }

    pub fn message_type(&self) -> Option<MessageType> {
        self.message.as_ref().map(|(_, t, _)| *t)
    }
}
