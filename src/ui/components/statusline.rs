//! Status Line Component
//!
//! Displays mode indicator, the current notice and buffer sizes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    char_counts: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            char_counts: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn char_counts(mut self, input: usize, output: usize) -> Self {
        self.char_counts = Some((input, output));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Normal => base.bg(Color::Magenta),
        InputMode::Insert => base.bg(Color::Blue),
        InputMode::Save => base.bg(Color::Green),
        InputMode::Confirm => base.bg(Color::Red),
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn render_message(buf: &mut Buffer, x: u16, y: u16, message: Option<(&str, MessageType)>) {
    let Some((msg, msg_type)) = message else { return };
    let style = Style::default().bg(Color::DarkGray).fg(msg_type.color());
    buf.set_string(x, y, msg, style);
}

/// Right-aligned counts, dropped when they would cover the mode indicator.
fn render_right_section(buf: &mut Buffer, area: Rect, min_x: u16, char_counts: Option<(usize, usize)>) {
    let Some((input, output)) = char_counts else { return };

    let label = Style::default().fg(Color::Gray).bg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan).bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled("in ", label),
        Span::styled(input.to_string(), value),
        Span::styled(" | ", Style::default().fg(Color::White).bg(Color::DarkGray)),
        Span::styled("out ", label),
        Span::styled(output.to_string(), value),
    ]);

    let width = line.width() as u16;
    let Some(x) = (area.x + area.width).checked_sub(width + 1) else { return };
    if x < min_x {
        return;
    }
    buf.set_line(x, area.y, &line, width);
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_width = render_mode_indicator(buf, area, self.mode);
        let x = area.x + mode_width + 1;

        render_message(buf, x, area.y, self.message);
        render_right_section(buf, area, x, self.char_counts);
    }
}

pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl HelpBar<'_> {
    pub fn for_mode(mode: InputMode) -> Self {
        Self { hints: hints_for_mode(mode) }
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Normal => vec![
            ("i", "edit"),
            ("p", "paste"),
            ("x", "remove tashkeel"),
            ("y", "copy"),
            ("s", "save"),
            ("R", "reset"),
            ("q", "quit"),
        ],
        InputMode::Insert => vec![
            ("esc", "done"),
            ("ctrl+v", "paste"),
            ("ctrl+x", "remove tashkeel"),
            ("ctrl+y", "copy"),
            ("ctrl+s", "save"),
            ("ctrl+r", "reset"),
            ("ctrl+c", "quit"),
        ],
        InputMode::Save => vec![
            ("enter", "save"),
            ("esc", "cancel"),
        ],
        InputMode::Confirm => vec![
            ("y", "yes"),
            ("n", "no"),
        ],
    }
}

fn build_hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.height == 0 || area.width == 0 {
            return;
        }
        let spans = build_hint_spans(&self.hints);
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
