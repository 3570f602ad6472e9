//! UI Components
//!
//! TUI widgets for the two text panes, status bars and dialogs.

pub mod dialogs;
pub mod input_field;
pub mod layout;
pub mod save_dialog;
pub mod statusline;
pub mod text_pane;

// Re-exports
pub use dialogs::ConfirmDialog;
pub use save_dialog::{SaveDialog, SaveDialogWidget};
pub use statusline::{HelpBar, MessageType, StatusLine};
pub use text_pane::TextPane;
