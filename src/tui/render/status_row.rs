use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, Mode};

use super::helpers::push_right_aligned;

/// Render the status row (bottom of screen): the error banner when one is
/// up, otherwise key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(banner) = &app.banner {
        Line::from(Span::styled(
            format!(" {}", banner.message),
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate => match app.focus {
                Focus::Tasks if app.surfaces.sidebar => "a add  x toggle  Tab lists  ? help",
                Focus::Tasks => "a add  x toggle  ? help",
                Focus::Sidebar => "Enter open  n new list  Tab tasks",
            },
            Mode::Input => "Enter add  Esc leave  Ctrl-U clear",
            Mode::ListName => "Enter create  Esc cancel",
            Mode::Confirm => "y delete  n cancel",
        };
        let mut spans = Vec::new();
        push_right_aligned(
            &mut spans,
            vec![Span::styled(
                format!("{hint} "),
                Style::default().fg(app.theme.dim).bg(bg),
            )],
            width,
            Style::default().bg(bg),
        );
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
