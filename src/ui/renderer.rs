//! Renderer
//!
//! Lays out the screen and draws every widget from a borrowed snapshot of
//! application state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::input::{InputMode, TextBuffer, TextEditing};

use super::components::{
    ConfirmDialog, HelpBar, MessageType, SaveDialog, SaveDialogWidget, StatusLine, TextPane,
};

pub struct UiState<'a> {
    pub mode: InputMode,
    pub input: &'a TextBuffer,
    pub output: &'a str,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub save_dialog: Option<&'a SaveDialog>,
}

/// Two bordered panes of at least one text line each plus the two bars.
pub const MIN_HEIGHT: u16 = 8;
pub const MIN_WIDTH: u16 = 20;

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let area = frame.area();
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            render_too_small(frame, area);
            return;
        }

        let [input_area, output_area, status_area, help_area] = split_screen(area);

        let editing = state.mode == InputMode::Insert;
        let input_pane = TextPane::new(" Input ", state.input.content())
            .placeholder("Press p to paste or i to type Arabic text")
            .cursor(state.input.cursor_position())
            .focused(editing);
        frame.render_widget(input_pane, input_area);

        let output_pane = TextPane::new(" Output (tashkeel removed) ", state.output)
            .placeholder("Press x to remove tashkeel");
        frame.render_widget(output_pane, output_area);

        let mut status = StatusLine::new(state.mode)
            .char_counts(state.input.len(), state.output.chars().count());
        if let Some((msg, msg_type)) = state.message {
            status = status.message(msg, msg_type);
        }
        frame.render_widget(status, status_area);
        frame.render_widget(HelpBar::for_mode(state.mode), help_area);

        render_overlays(frame, state, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new("Terminal too small")
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}

fn split_screen(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn render_overlays(frame: &mut Frame, state: &UiState, area: Rect) {
    if let Some(dialog) = state.save_dialog {
        frame.render_widget(SaveDialogWidget::new(dialog), area);
    }

    if state.mode == InputMode::Confirm {
        let message = state.confirm_message.unwrap_or("Are you sure?");
        frame.render_widget(ConfirmDialog::new(" Confirm ", message), area);
    }
}
