//! Bordered text area for the input and output buffers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::layout::{render_cursor, render_empty_message};

pub struct TextPane<'a> {
    title: &'a str,
    text: &'a str,
    placeholder: &'a str,
    cursor: Option<(usize, usize)>,
    focused: bool,
}

impl<'a> TextPane<'a> {
    pub fn new(title: &'a str, text: &'a str) -> Self {
        Self { title, text, placeholder: "", cursor: None, focused: false }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Show a cursor at (line, column) in characters.
    pub fn cursor(mut self, position: (usize, usize)) -> Self {
        self.cursor = Some(position);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::Blue } else { Color::DarkGray };
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.text.is_empty() && !self.focused {
            render_empty_message(inner, buf, self.placeholder);
            return;
        }

        let cursor_line = self.cursor.map(|(line, _)| line).unwrap_or(0);
        let scroll = vertical_scroll(cursor_line, inner.height);

        Paragraph::new(self.text)
            .style(Style::default().fg(Color::White))
            .scroll((scroll as u16, 0))
            .render(inner, buf);

        if let (Some((line, col)), true) = (self.cursor, self.focused) {
            let x = inner.x + cursor_x_offset(self.text, line, col);
            let y = inner.y + (line - scroll) as u16;
            render_cursor(buf, x, y, inner.x + inner.width);
        }
    }
}

/// First visible line so that `cursor_line` stays on screen.
fn vertical_scroll(cursor_line: usize, height: u16) -> usize {
    cursor_line.saturating_sub((height as usize).saturating_sub(1))
}

/// Display width of the first `col` characters of `line`.
fn cursor_x_offset(text: &str, line: usize, col: usize) -> u16 {
    let prefix: String = text
        .split('\n')
        .nth(line)
        .unwrap_or_default()
        .chars()
        .take(col)
        .collect();
    Line::from(prefix).width() as u16
}
