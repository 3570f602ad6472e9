//! Single-line input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::layout::{fill_background, render_cursor};

pub struct InputField<'a> {
    label: &'a str,
    value: &'a str,
    cursor: usize,
    style: Style,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, value: &'a str, cursor: usize) -> Self {
        Self { label, value, cursor, style: Style::default().fg(Color::Blue) }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_string(area.x, area.y, self.label, Style::default().fg(Color::Cyan));
        if area.height < 2 {
            return;
        }

        let input_y = area.y + 1;
        fill_background(buf, area.x, input_y, area.width, Color::DarkGray);

        let scroll = compute_scroll_offset(self.cursor, area.width);
        let visible: String = self.value.chars().skip(scroll).take(area.width as usize).collect();
        buf.set_string(area.x, input_y, &visible, self.style.bg(Color::DarkGray));

        let cursor_x = area.x + self.cursor.saturating_sub(scroll) as u16;
        render_cursor(buf, cursor_x, input_y, area.x + area.width);
    }
}

/// Keep the cursor inside the field, leaving one cell of slack.
pub fn compute_scroll_offset(cursor: usize, width: u16) -> usize {
    let width = width as usize;
    if cursor >= width.saturating_sub(1) {
        cursor.saturating_sub(width.saturating_sub(2))
    } else {
        0
    }
}
