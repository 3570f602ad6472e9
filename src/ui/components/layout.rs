//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Fixed size rect centered above the two bottom bars
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let available_height = r.height.saturating_sub(2);
    let remainder = (available_height.saturating_sub(height)) % 2;
    let adjusted_height = height + remainder;
    let y = r.y + (available_height.saturating_sub(adjusted_height)) / 2;
    Rect::new(x, y, width.min(r.width), adjusted_height.min(r.height))
}

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn render_empty_message(area: Rect, buf: &mut Buffer, msg: &str) {
    Paragraph::new(msg)
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}

pub fn render_footer(buf: &mut Buffer, popup: Rect, text: &str) {
    let popup = popup.intersection(buf.area);
    if popup.height == 0 || popup.width == 0 {
        return;
    }
    let y = popup.y + popup.height.saturating_sub(1);
    let x = popup.x + (popup.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, y, text, Style::default().fg(Color::DarkGray));
}

pub fn fill_background(buf: &mut Buffer, x: u16, y: u16, width: u16, color: Color) {
    for px in x..x + width {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(color);
        }
    }
}

pub fn render_cursor(buf: &mut Buffer, x: u16, y: u16, max_x: u16) {
    if x >= max_x {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}
