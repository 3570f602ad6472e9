use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::export;
use crate::input::keymap::Action;
use crate::input::TextEditing;
use crate::text::{count_tashkeel, ensure_no_latin, is_latin_letter, strip_tashkeel};
use crate::ui::components::{MessageType, SaveDialog};

use super::{App, PendingAction};

pub const MSG_ARABIC_ONLY: &str = "This tool supports Arabic text only. English characters are not allowed.";
pub const MSG_LETTER_REJECTED: &str = "Only Arabic letters are allowed.";
pub const MSG_EMPTY_INPUT: &str = "Please paste or enter Arabic text before removing Tashkeel.";
pub const MSG_NOTHING_TO_COPY: &str = "There is no text to copy.";
pub const MSG_NOTHING_TO_SAVE: &str = "There is no text to save.";
pub const MSG_COPIED: &str = "Output text copied to clipboard.";

impl App {
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Paste => self.paste_from_clipboard(),
            Action::RemoveTashkeel => self.process_text(),
            Action::CopyOutput => self.copy_output(),
            Action::SaveOutput => self.open_save_dialog(),
            Action::Reset => self.reset(),
            Action::Quit => self.quit(),
            Action::EnterInsert => self.mode_state.to_insert(),
            Action::Cancel => self.mode_state.to_normal(),
            Action::Confirm => self.confirm_pending(),
            Action::Deny => self.cancel_pending(),
            Action::None => {}
        }
    }

    /// Replace the input buffer with the clipboard contents.
    ///
    /// An unreadable or empty clipboard is ignored without a notice.
    pub fn paste_from_clipboard(&mut self) {
        let text = match self.clipboard.get_text() {
            Ok(text) => text,
            Err(e) => {
                debug!("paste skipped: {}", e);
                return;
            }
        };
        self.load_pasted_text(&text);
    }

    /// Replace the input buffer with pasted text, unless it is empty or has
    /// Latin letters.
    pub fn load_pasted_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if ensure_no_latin(text).is_err() {
            info!("paste rejected: latin letters in {} chars", text.chars().count());
            self.set_message(MSG_ARABIC_ONLY, MessageType::Warning);
            return;
        }
        self.input.set_content(text);
        info!("pasted {} chars", self.input.len());
    }

    /// Insert pasted text at the cursor (terminal paste while editing).
    pub fn insert_pasted_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if ensure_no_latin(text).is_err() {
            info!("paste rejected: latin letters in {} chars", text.chars().count());
            self.set_message(MSG_ARABIC_ONLY, MessageType::Warning);
            return;
        }
        self.input.insert_str(text);
    }

    /// Insert a typed character, suppressing Latin letters.
    pub fn insert_typed_char(&mut self, c: char) {
        if is_latin_letter(c) {
            self.set_message(MSG_LETTER_REJECTED, MessageType::Warning);
            return;
        }
        self.input.insert_char(c);
    }

    pub fn process_text(&mut self) {
        let input = self.input.content().trim();
        if input.is_empty() {
            self.set_message(MSG_EMPTY_INPUT, MessageType::Info);
            return;
        }

        let removed = count_tashkeel(input);
        self.output = strip_tashkeel(input).into_owned();
        info!("removed {} marks, output {} chars", removed, self.output.chars().count());

        let msg = match removed {
            0 => "No tashkeel found".to_string(),
            1 => "Removed 1 diacritic mark".to_string(),
            n => format!("Removed {} diacritic marks", n),
        };
        self.set_message(&msg, MessageType::Success);
    }

    pub fn copy_output(&mut self) {
        let text = self.output.trim().to_string();
        if text.is_empty() {
            self.set_message(MSG_NOTHING_TO_COPY, MessageType::Warning);
            return;
        }

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                info!("copied {} chars to clipboard", text.chars().count());
                self.set_message(MSG_COPIED, MessageType::Success);
            }
            Err(e) => {
                warn!("copy failed: {}", e);
                self.set_message(&format!("Copy failed: {}", e), MessageType::Error);
            }
        }
    }

    pub fn open_save_dialog(&mut self) {
        if self.output.trim().is_empty() {
            self.set_message(MSG_NOTHING_TO_SAVE, MessageType::Warning);
            return;
        }
        self.save_dialog = Some(SaveDialog::new(&self.config.default_save_path));
        self.mode_state.to_save();
    }

    /// Save to the path typed in the dialog, asking first if it exists.
    pub fn confirm_save(&mut self) {
        let Some(dialog) = self.save_dialog.as_mut() else {
            return;
        };

        let path = match export::resolve_path(dialog.path.content()) {
            Ok(path) => path,
            Err(e) => {
                dialog.error = Some(e.to_string());
                return;
            }
        };

        if path.exists() {
            self.pending_action = Some(PendingAction::OverwriteFile(path));
            self.mode_state.to_confirm();
            return;
        }

        self.save_output_to(&path);
    }

    pub fn save_output_to(&mut self, path: &Path) {
        let text = self.output.trim();
        if text.is_empty() {
            self.set_message(MSG_NOTHING_TO_SAVE, MessageType::Warning);
            return;
        }

        match export::save_text(text, path) {
            Ok(written) => self.finalize_save(written),
            Err(e) => {
                warn!("save failed: {}", e);
                self.set_save_error(e.to_string());
            }
        }
    }

    fn finalize_save(&mut self, written: PathBuf) {
        info!("saved output to {}", written.display());
        self.save_dialog = None;
        self.mode_state.to_normal();
        self.set_message(&format!("Output saved to: {}", written.display()), MessageType::Success);
    }

    fn set_save_error(&mut self, error: String) {
        match self.save_dialog.as_mut() {
            Some(dialog) => {
                dialog.error = Some(error);
                self.mode_state.to_save();
            }
            None => self.set_message(&error, MessageType::Error),
        }
    }

    pub fn cancel_save(&mut self) {
        self.save_dialog = None;
        self.pending_action = None;
        self.mode_state.to_normal();
    }

    fn confirm_pending(&mut self) {
        let Some(action) = self.pending_action.take() else {
            self.mode_state.to_normal();
            return;
        };

        match action {
            PendingAction::OverwriteFile(path) => self.save_output_to(&path),
        }
    }

    fn cancel_pending(&mut self) {
        self.pending_action = None;
        if self.save_dialog.is_some() {
            self.mode_state.to_save();
        } else {
            self.mode_state.to_normal();
        }
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.output.clear();
        debug!("buffers cleared");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppConfig, ClipboardError, ClipboardProvider, MemoryClipboard};
    use crate::input::InputMode;
    use tempfile::TempDir;

    /// Clipboard that is never available, like a headless session.
    struct FailingClipboard;

    impl ClipboardProvider for FailingClipboard {
        fn get_text(&mut self) -> Result<String, ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }

        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }
    }

    fn app_with_clipboard(clipboard: MemoryClipboard) -> App {
        App::with_clipboard(AppConfig::default(), Box::new(clipboard))
    }

    fn app() -> App {
        app_with_clipboard(MemoryClipboard::default())
    }

    fn app_with_output(output: &str) -> App {
        let mut app = app();
        app.input.set_content(output);
        app.process_text();
        app.message = None;
        app
    }

    #[test]
    fn test_process_strips_tashkeel() {
        let mut app = app();
        app.input.set_content("مَرْحَبًا");

        app.process_text();

        assert_eq!(app.output(), "مرحبا");
        assert_eq!(app.input.content(), "مَرْحَبًا");
        assert_eq!(app.message_type(), Some(MessageType::Success));
    }

    #[test]
    fn test_process_trims_input() {
        let mut app = app();
        app.input.set_content("  \nكِتابٌ \n");

        app.process_text();

        assert_eq!(app.output(), "كتاب");
    }

    #[test]
    fn test_process_empty_input() {
        let mut app = app_with_output("سَلام");
        app.input.set_content("   \n ");

        app.process_text();

        assert_eq!(app.output(), "سلام");
        assert_eq!(app.message_text(), Some(MSG_EMPTY_INPUT));
        assert_eq!(app.message_type(), Some(MessageType::Info));
    }

    #[test]
    fn test_paste_arabic() {
        let mut app = app_with_clipboard(MemoryClipboard::with_text("مَرْحَبًا"));
        app.input.set_content("قديم");

        app.paste_from_clipboard();

        assert_eq!(app.input.content(), "مَرْحَبًا");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_paste_with_latin_rejected() {
        let mut app = app_with_clipboard(MemoryClipboard::with_text("Hello مرحبا"));
        app.input.set_content("قديم");

        app.paste_from_clipboard();

        assert_eq!(app.input.content(), "قديم");
        assert_eq!(app.message_text(), Some(MSG_ARABIC_ONLY));
        assert_eq!(app.message_type(), Some(MessageType::Warning));
    }

    #[test]
    fn test_paste_empty_clipboard_is_silent() {
        let mut app = app();
        app.input.set_content("قديم");

        app.paste_from_clipboard();

        assert_eq!(app.input.content(), "قديم");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_terminal_paste_inserts_at_cursor() {
        let mut app = app();
        app.input.set_content("أهلا");
        app.input.cursor_home();

        app.insert_pasted_text("يا ");
        assert_eq!(app.input.content(), "يا أهلا");

        app.insert_pasted_text("abc");
        assert_eq!(app.input.content(), "يا أهلا");
        assert_eq!(app.message_type(), Some(MessageType::Warning));
    }

    #[test]
    fn test_typed_latin_suppressed() {
        let mut app = app();
        app.insert_typed_char('ب');
        app.insert_typed_char('x');
        app.insert_typed_char('1');

        assert_eq!(app.input.content(), "ب1");
        assert_eq!(app.message_text(), Some(MSG_LETTER_REJECTED));
    }

    #[test]
    fn test_copy_output() {
        let mut app = app_with_output("مرحبا");

        app.copy_output();

        assert_eq!(app.clipboard.get_text().unwrap(), "مرحبا");
        assert_eq!(app.message_text(), Some(MSG_COPIED));
        assert_eq!(app.message_type(), Some(MessageType::Success));
    }

    #[test]
    fn test_copy_without_clipboard_reports_error() {
        let mut app = App::with_clipboard(AppConfig::default(), Box::new(FailingClipboard));
        app.input.set_content("مرحبا");
        app.process_text();

        app.copy_output();

        assert_eq!(app.message_type(), Some(MessageType::Error));
        assert!(app.message_text().unwrap().contains("no display"));
        assert_eq!(app.output(), "مرحبا");
    }

    #[test]
    fn test_paste_without_clipboard_is_silent() {
        let mut app = App::with_clipboard(AppConfig::default(), Box::new(FailingClipboard));
        app.input.set_content("قديم");

        app.paste_from_clipboard();

        assert_eq!(app.input.content(), "قديم");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_empty_paste_keeps_input() {
        let mut app = app();
        app.input.set_content("قديم");

        app.load_pasted_text("");
        app.insert_pasted_text("");

        assert_eq!(app.input.content(), "قديم");
        assert!(app.message.is_none());
    }

    #[test]
    fn test_copy_empty_output() {
        let mut app = app_with_clipboard(MemoryClipboard::with_text("سابق"));

        app.copy_output();

        assert_eq!(app.clipboard.get_text().unwrap(), "سابق");
        assert_eq!(app.message_text(), Some(MSG_NOTHING_TO_COPY));
        assert_eq!(app.message_type(), Some(MessageType::Warning));
    }

    #[test]
    fn test_save_empty_output_warns() {
        let mut app = app();

        app.open_save_dialog();

        assert!(app.save_dialog.is_none());
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(app.message_text(), Some(MSG_NOTHING_TO_SAVE));
    }

    #[test]
    fn test_save_empty_output_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let mut app = app();

        app.save_output_to(&path);

        assert!(!path.exists());
        assert_eq!(app.message_type(), Some(MessageType::Warning));
    }

    #[test]
    fn test_save_through_dialog() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("result");
        let mut app = app_with_output("بِسْمِ اللَّهِ");

        app.open_save_dialog();
        assert_eq!(app.mode_state.mode, InputMode::Save);

        let dialog = app.save_dialog.as_mut().unwrap();
        dialog.path.set_content(&target.to_string_lossy());
        app.confirm_save();

        let written = dir.path().join("result.txt");
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "بسم الله");
        assert!(app.save_dialog.is_none());
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(app.message_type(), Some(MessageType::Success));
    }

    #[test]
    fn test_save_existing_file_asks_first() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        std::fs::write(&target, "old").unwrap();
        let mut app = app_with_output("نص");

        app.open_save_dialog();
        app.save_dialog.as_mut().unwrap().path.set_content(&target.to_string_lossy());
        app.confirm_save();

        assert_eq!(app.mode_state.mode, InputMode::Confirm);
        assert_eq!(app.pending_action, Some(PendingAction::OverwriteFile(target.clone())));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old");

        app.execute_action(Action::Confirm);

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "نص");
        assert_eq!(app.mode_state.mode, InputMode::Normal);
    }

    #[test]
    fn test_overwrite_declined_returns_to_dialog() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        std::fs::write(&target, "old").unwrap();
        let mut app = app_with_output("نص");

        app.open_save_dialog();
        app.save_dialog.as_mut().unwrap().path.set_content(&target.to_string_lossy());
        app.confirm_save();
        app.execute_action(Action::Deny);

        assert_eq!(app.mode_state.mode, InputMode::Save);
        assert!(app.save_dialog.is_some());
        assert!(app.pending_action.is_none());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old");
    }

    #[test]
    fn test_save_write_failure_keeps_dialog_open() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();
        let target = blocker.join("out.txt");
        let mut app = app_with_output("نص");

        app.open_save_dialog();
        app.save_dialog.as_mut().unwrap().path.set_content(&target.to_string_lossy());
        app.confirm_save();

        let dialog = app.save_dialog.as_ref().unwrap();
        assert!(dialog.error.is_some());
        assert_eq!(app.mode_state.mode, InputMode::Save);
        assert!(!target.exists());
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "file");
    }

    #[test]
    fn test_save_empty_path_sets_dialog_error() {
        let mut app = app_with_output("نص");

        app.open_save_dialog();
        app.save_dialog.as_mut().unwrap().path.clear();
        app.confirm_save();

        let dialog = app.save_dialog.as_ref().unwrap();
        assert_eq!(dialog.error.as_deref(), Some("Output path is required"));
        assert_eq!(app.mode_state.mode, InputMode::Save);
    }

    #[test]
    fn test_cancel_save_is_silent() {
        let mut app = app_with_output("نص");

        app.open_save_dialog();
        app.cancel_save();

        assert!(app.save_dialog.is_none());
        assert!(app.message.is_none());
        assert_eq!(app.mode_state.mode, InputMode::Normal);
    }

    #[test]
    fn test_reset_clears_both_buffers() {
        let mut app = app_with_output("مَرْحَبًا");
        assert!(!app.output().is_empty());

        app.reset();

        assert!(app.input.is_empty());
        assert!(app.output().is_empty());
    }

    #[test]
    fn test_output_independent_of_input_edits() {
        let mut app = app_with_output("سَلامٌ");
        app.input.set_content("شيء آخر");
        assert_eq!(app.output(), "سلام");
    }

    #[test]
    fn test_quit_action() {
        let mut app = app();
        app.execute_action(Action::Quit);
        assert!(app.should_quit);
    }
}
