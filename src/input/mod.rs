//! Input Module
//!
//! Keyboard handling: modes, bindings and the editable text buffer.

pub mod keymap;
pub mod modes;
pub mod text_buffer;

// Re-exports
pub use modes::InputMode;
pub use text_buffer::{handle_text_key, TextBuffer, TextEditing};
