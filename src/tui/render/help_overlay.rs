use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Space/x", "Toggle done", key_style, desc_style);
    add_binding(&mut lines, " a/i/Enter", "Type a new task", key_style, desc_style);
    add_binding(&mut lines, " e", "Edit task", key_style, desc_style);
    add_binding(&mut lines, " d/Del", "Delete task", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Input", header_style)));
    add_binding(&mut lines, " Enter", "Add task", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Leave the field", key_style, desc_style);
    add_binding(&mut lines, " Ctrl-W", "Delete word", key_style, desc_style);
    add_binding(&mut lines, " Ctrl-U", "Clear the field", key_style, desc_style);
    lines.push(Line::from(""));

    if app.surfaces.sidebar {
        lines.push(Line::from(Span::styled(" Lists", header_style)));
        add_binding(&mut lines, " Tab", "Switch pane", key_style, desc_style);
        add_binding(&mut lines, " Enter", "Open list", key_style, desc_style);
        add_binding(&mut lines, " n", "New list", key_style, desc_style);
        lines.push(Line::from(""));
    }

    add_binding(&mut lines, " ?", "Close help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .title(" Key Bindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
