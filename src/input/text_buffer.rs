//! Text Buffer
//!
//! Multi-line editing buffer with a character-indexed cursor.

use crossterm::event::{KeyCode, KeyModifiers};

/// Trait for text editing operations
pub trait TextEditing {
    fn content(&self) -> &str;
    fn cursor(&self) -> usize;
    fn set_cursor(&mut self, pos: usize);
    fn set_content(&mut self, content: &str);
    fn insert_char(&mut self, c: char);
    fn insert_str(&mut self, s: &str);
    fn delete_char(&mut self);
    fn delete_char_forward(&mut self);
    fn delete_word(&mut self);
    fn clear_to_start(&mut self);
    fn clear(&mut self);
    fn cursor_left(&mut self);
    fn cursor_right(&mut self);
    fn cursor_up(&mut self);
    fn cursor_down(&mut self);
    fn cursor_home(&mut self);
    fn cursor_end(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Handle common editing keys, returns true if key was handled.
///
/// Printable characters are left to the caller when `insert_chars` is
/// false, so it can validate them first.
pub fn handle_text_key<T: TextEditing>(buf: &mut T, code: KeyCode, mods: KeyModifiers, insert_chars: bool) -> bool {
    match (code, mods) {
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => buf.delete_word(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word(),
        (KeyCode::Backspace, _) => buf.delete_char(),
        (KeyCode::Delete, _) => buf.delete_char_forward(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => buf.cursor_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => buf.cursor_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear_to_start(),
        (KeyCode::Left, _) => buf.cursor_left(),
        (KeyCode::Right, _) => buf.cursor_right(),
        (KeyCode::Up, _) => buf.cursor_up(),
        (KeyCode::Down, _) => buf.cursor_down(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if insert_chars => buf.insert_char(c),
        _ => return false,
    }
    true
}

pub fn find_word_boundary_back(s: &str, from: usize) -> usize {
    let chars: Vec<char> = s.chars().take(from).collect();
    let mut pos = chars.len();
    let is_word = |c: char| c.is_alphanumeric() || c == '_' || crate::text::is_tashkeel(c);
    let is_punct = |c: char| !c.is_whitespace() && !is_word(c);

    // Skip trailing whitespace
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    if pos == 0 { return 0; }

    if is_word(chars[pos - 1]) {
        while pos > 0 && is_word(chars[pos - 1]) {
            pos -= 1;
        }
    } else {
        // Punctuation, then preceding word chars
        while pos > 0 && is_punct(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word(chars[pos - 1]) {
            pos -= 1;
        }
    }
    pos
}

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Zero-based (line, column) of the cursor, both in characters.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: Vec<char> = self.content.chars().take(self.cursor).collect();
        let line = before.iter().filter(|c| **c == '\n').count();
        let col = before.iter().rev().take_while(|c| **c != '\n').count();
        (line, col)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn line_start(&self) -> usize {
        let (_, col) = self.cursor_position();
        self.cursor - col
    }

    fn line_end(&self) -> usize {
        let rest = self.content.chars().skip(self.cursor).take_while(|c| *c != '\n').count();
        self.cursor + rest
    }

    fn line_lengths(&self) -> Vec<usize> {
        self.content.split('\n').map(|l| l.chars().count()).collect()
    }

    fn move_to_line(&mut self, target: usize, col: usize) {
        let lengths = self.line_lengths();
        let start: usize = lengths.iter().take(target).map(|len| len + 1).sum();
        self.cursor = start + col.min(lengths[target]);
    }
}

impl TextEditing for TextBuffer {
    fn content(&self) -> &str {
        &self.content
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len());
    }

    fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    fn insert_str(&mut self, s: &str) {
        let idx = self.byte_index(self.cursor);
        self.content.insert_str(idx, s);
        self.cursor += s.chars().count();
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.content.remove(idx);
    }

    fn delete_char_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.content.remove(idx);
    }

    fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = find_word_boundary_back(&self.content, self.cursor);
        let start = self.byte_index(new_cursor);
        let end = self.byte_index(self.cursor);
        self.content.drain(start..end);
        self.cursor = new_cursor;
    }

    fn clear_to_start(&mut self) {
        let line_start = self.line_start();
        if self.cursor == line_start {
            return;
        }
        let start = self.byte_index(line_start);
        let end = self.byte_index(self.cursor);
        self.content.drain(start..end);
        self.cursor = line_start;
    }

    fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    fn cursor_up(&mut self) {
        let (line, col) = self.cursor_position();
        if line == 0 {
            return;
        }
        self.move_to_line(line - 1, col);
    }

    fn cursor_down(&mut self) {
        let (line, col) = self.cursor_position();
        if line + 1 >= self.line_lengths().len() {
            return;
        }
        self.move_to_line(line + 1, col);
    }

    fn cursor_home(&mut self) {
        self.cursor = self.line_start();
    }

    fn cursor_end(&mut self) {
        self.cursor = self.line_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut buf = TextBuffer::new();
        buf.insert_char('س');
        buf.insert_char('ل');
        assert_eq!(buf.content(), "سل");
        assert_eq!(buf.cursor(), 2);

        buf.delete_char();
        assert_eq!(buf.content(), "س");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_insert_in_middle_of_multibyte() {
        let mut buf = TextBuffer::with_content("مرحبا");
        buf.set_cursor(2);
        buf.insert_char('ـ');
        assert_eq!(buf.content(), "مرـحبا");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_insert_str() {
        let mut buf = TextBuffer::with_content("أهلا");
        buf.cursor_home();
        buf.insert_str("يا ");
        assert_eq!(buf.content(), "يا أهلا");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_cursor_movement() {
        let mut buf = TextBuffer::with_content("مرحبا");
        assert_eq!(buf.cursor(), 5);

        buf.cursor_home();
        assert_eq!(buf.cursor(), 0);

        buf.cursor_end();
        assert_eq!(buf.cursor(), 5);

        buf.cursor_left();
        assert_eq!(buf.cursor(), 4);

        buf.cursor_right();
        assert_eq!(buf.cursor(), 5);

        buf.cursor_right();
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = TextBuffer::with_content("نور");
        buf.cursor_home();
        buf.delete_char_forward();
        assert_eq!(buf.content(), "ور");
        assert_eq!(buf.cursor(), 0);

        buf.cursor_end();
        buf.delete_char_forward();
        assert_eq!(buf.content(), "ور");
    }

    #[test]
    fn test_delete_word_simple() {
        let mut buf = TextBuffer::with_content("مرحبا بالعالم");
        buf.delete_word();
        assert_eq!(buf.content(), "مرحبا ");
    }

    #[test]
    fn test_delete_word_with_tashkeel() {
        let mut buf = TextBuffer::with_content("أَهْلًا وَسَهْلًا");
        buf.delete_word();
        assert_eq!(buf.content(), "أَهْلًا ");
    }

    #[test]
    fn test_delete_word_with_spaces() {
        let mut buf = TextBuffer::with_content("كلمة   ");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_delete_word_symbol() {
        let mut buf = TextBuffer::with_content("سلام!");
        buf.delete_word();
        assert_eq!(buf.content(), "");
    }

    #[test]
    fn test_clear_to_start_of_line() {
        let mut buf = TextBuffer::with_content("سطر أول\nسطر ثان");
        buf.clear_to_start();
        assert_eq!(buf.content(), "سطر أول\n");
        assert_eq!(buf.cursor(), 8);
    }

    #[test]
    fn test_cursor_position_multiline() {
        let buf = TextBuffer::with_content("ab\ncde\nf");
        assert_eq!(buf.cursor_position(), (2, 1));

        let mut buf = buf;
        buf.set_cursor(4);
        assert_eq!(buf.cursor_position(), (1, 1));
    }

    #[test]
    fn test_cursor_up_down_clamps_column() {
        let mut buf = TextBuffer::with_content("طويل جدا\nقصير");
        assert_eq!(buf.cursor_position(), (1, 4));

        buf.cursor_up();
        assert_eq!(buf.cursor_position(), (0, 4));

        buf.cursor_end();
        buf.cursor_down();
        assert_eq!(buf.cursor_position(), (1, 4));

        buf.cursor_down();
        assert_eq!(buf.cursor_position(), (1, 4));
    }

    #[test]
    fn test_home_end_are_line_local() {
        let mut buf = TextBuffer::with_content("ab\ncd");
        buf.set_cursor(1);
        buf.cursor_end();
        assert_eq!(buf.cursor(), 2);

        buf.set_cursor(4);
        buf.cursor_home();
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_handle_text_key() {
        let mut buf = TextBuffer::new();

        assert!(handle_text_key(&mut buf, KeyCode::Char('ب'), KeyModifiers::NONE, true));
        assert_eq!(buf.content(), "ب");

        assert!(handle_text_key(&mut buf, KeyCode::Backspace, KeyModifiers::NONE, true));
        assert_eq!(buf.content(), "");

        assert!(!handle_text_key(&mut buf, KeyCode::Enter, KeyModifiers::NONE, true));
    }

    #[test]
    fn test_handle_text_key_leaves_chars_to_caller() {
        let mut buf = TextBuffer::new();
        assert!(!handle_text_key(&mut buf, KeyCode::Char('ب'), KeyModifiers::NONE, false));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_len_counts_chars() {
        let buf = TextBuffer::with_content("مرحبا");
        assert_eq!(buf.len(), 5);
        assert!(!buf.is_empty());
    }
}
