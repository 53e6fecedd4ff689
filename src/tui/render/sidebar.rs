use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the list of named lists, marking the selected one
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Sidebar;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .title(" Lists ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let selected = app.controller.selected_list();
    let names = app.list_names();

    let mut lines: Vec<Line> = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let is_selected = name == selected;
        let under_cursor = focused && i == app.sidebar_cursor;
        let row_bg = if under_cursor {
            app.theme.selection_bg
        } else {
            bg
        };
        let marker = if is_selected { "\u{25CF} " } else { "  " };
        let mut style = Style::default().fg(app.theme.text).bg(row_bg);
        if is_selected {
            style = style.fg(app.theme.text_bright).add_modifier(Modifier::BOLD);
        }
        let label = unicode::truncate_to_width(name, width.saturating_sub(3));
        let pad = width.saturating_sub(3 + unicode::display_width(&label));
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(label, style),
            Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
        ]));
    }

    // Leave the last row for the hint
    let list_height = inner.height.saturating_sub(1) as usize;
    let offset = if focused {
        app.sidebar_cursor.saturating_sub(list_height.saturating_sub(1))
    } else {
        0
    };
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(list_height).collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        Rect::new(inner.x, inner.y, inner.width, list_height as u16),
    );

    if inner.height > 0 {
        let hint = Line::from(vec![
            Span::styled(" n", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(" new list", Style::default().fg(app.theme.dim).bg(bg)),
        ]);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().bg(bg)),
            Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn selected_list_is_marked() {
        let mut app = empty_app();
        app.controller.add_list("Work").unwrap();
        app.controller.add_list("Groceries").unwrap();
        app.controller.select_list("Work").unwrap();
        let output = render_to_string(24, 8, |frame, area| render_sidebar(frame, &app, area));
        assert!(output.contains("Lists"));
        assert!(output.contains("   Default"));
        assert!(output.contains("\u{25CF} Work"));
        assert!(output.contains("   Groceries"));
        assert!(output.contains("n new list"));
    }

    #[test]
    fn long_names_are_truncated() {
        let mut app = empty_app();
        app.controller
            .add_list("A list with a really long name")
            .unwrap();
        let output = render_to_string(16, 6, |frame, area| render_sidebar(frame, &app, area));
        assert!(output.contains("\u{2026}"));
        assert!(!output.contains("really long name"));
    }
}
