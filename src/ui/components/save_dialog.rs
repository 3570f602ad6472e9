//! Save Dialog Component
//!
//! Asks for the file to write the stripped text to.

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Widget},
};

use crate::input::{TextBuffer, TextEditing};

use super::input_field::InputField;
use super::layout::{create_popup_block, render_footer};

#[derive(Debug, Clone)]
pub struct SaveDialog {
    pub path: TextBuffer,
    pub error: Option<String>,
}

impl SaveDialog {
    pub fn new(default_path: &Path) -> Self {
        Self {
            path: TextBuffer::with_content(default_path.to_string_lossy()),
            error: None,
        }
    }
}

pub struct SaveDialogWidget<'a> {
    dialog: &'a SaveDialog,
}

impl<'a> SaveDialogWidget<'a> {
    pub fn new(dialog: &'a SaveDialog) -> Self {
        Self { dialog }
    }
}

impl Widget for SaveDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_area = calculate_form_area(area);
        Clear.render(form_area, buf);

        let block = create_popup_block(" Save Output As ", Color::Green);
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        let field_area = Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height));
        InputField::new("Path (.txt added if missing):", self.dialog.path.content(), self.dialog.path.cursor())
            .style(Style::default().fg(Color::Yellow))
            .render(field_area, buf);

        if let Some(err) = &self.dialog.error {
            if inner.height > 3 {
                buf.set_string(inner.x, inner.y + 3, err, Style::default().fg(Color::Red));
            }
        }

        render_footer(buf, form_area, " enter save · esc cancel ");
    }
}

fn calculate_form_area(area: Rect) -> Rect {
    let content_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(2));
    let form_width = 64u16.min(content_area.width.saturating_sub(4));
    let form_height = 6u16.min(content_area.height);
    let form_x = content_area.x + (content_area.width.saturating_sub(form_width)) / 2;
    let form_y = content_area.y + (content_area.height.saturating_sub(form_height)) / 2;
    Rect::new(form_x, form_y, form_width, form_height)
}
