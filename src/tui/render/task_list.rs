use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, Mode};
use crate::util::unicode;

use super::helpers::push_right_aligned;

/// Render the rows of the active list
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rows = app.controller.rows();

    if rows.is_empty() {
        if app.surfaces.empty_state {
            render_empty_state(frame, app, area);
        }
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let show_cursor = app.focus == Focus::Tasks && app.mode != Mode::Input;
    let offset = app.cursor.saturating_sub(height.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in rows.iter().enumerate().skip(offset).take(height) {
        let under_cursor = show_cursor && i == app.cursor;
        let row_bg = if under_cursor {
            app.theme.selection_bg
        } else {
            bg
        };

        let (check, check_color) = if row.checked {
            ("[x]", app.theme.green)
        } else {
            ("[ ]", app.theme.text)
        };
        let text_style = if row.checked {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };

        let mut hints: Vec<Span> = Vec::new();
        if under_cursor {
            // Edit is unavailable on completed rows
            let edit_color = if row.edit_enabled() {
                app.theme.highlight
            } else {
                app.theme.dim
            };
            hints.push(Span::styled("e", Style::default().fg(edit_color).bg(row_bg)));
            hints.push(Span::styled(" edit  ", Style::default().fg(app.theme.dim).bg(row_bg)));
            hints.push(Span::styled("d", Style::default().fg(app.theme.highlight).bg(row_bg)));
            hints.push(Span::styled(" delete ", Style::default().fg(app.theme.dim).bg(row_bg)));
        }
        let hint_width = super::helpers::spans_width(&hints);

        // " [x] " takes five cells
        let text_budget = width.saturating_sub(5 + hint_width + 1);
        let text = unicode::truncate_to_width(&row.text, text_budget);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(check, Style::default().fg(check_color).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(text, text_style),
        ];
        push_right_aligned(&mut spans, hints, width, Style::default().bg(row_bg));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let key = Style::default().fg(app.theme.highlight).bg(bg);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Nothing to do here.", dim)),
        Line::from(vec![
            Span::styled("  Press ", dim),
            Span::styled("a", key),
            Span::styled(" to add a task.", dim),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn rows_show_checkbox_state() {
        let app = app_with_tasks(&[("Buy milk", true), ("Walk dog", false)]);
        let output = render_to_string(50, 4, |frame, area| render_task_list(frame, &app, area));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with(" [x] Buy milk"));
        assert!(lines[0].ends_with("e edit  d delete"));
        assert_eq!(lines[1], " [ ] Walk dog");
    }

    #[test]
    fn empty_state_toggles_with_surface() {
        let mut app = empty_app();
        let output = render_to_string(50, 4, |frame, area| render_task_list(frame, &app, area));
        assert!(output.contains("Nothing to do here."));

        app.surfaces.empty_state = false;
        let output = render_to_string(50, 4, |frame, area| render_task_list(frame, &app, area));
        assert!(output.is_empty());
    }

    #[test]
    fn cursor_scrolls_into_view() {
        let tasks: Vec<(String, bool)> = (1..=10).map(|i| (format!("task {i}"), false)).collect();
        let refs: Vec<(&str, bool)> = tasks.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let mut app = app_with_tasks(&refs);
        app.cursor = 9;
        let output = render_to_string(50, 3, |frame, area| render_task_list(frame, &app, area));
        assert!(output.contains("task 10"));
        assert!(!output.contains("task 7"));
    }

    #[test]
    fn long_text_is_truncated_before_hints() {
        let app = app_with_tasks(&[("a task whose text runs well past the edge", false)]);
        let output = render_to_string(40, 2, |frame, area| render_task_list(frame, &app, area));
        assert!(output.contains("\u{2026}"));
        assert!(output.contains("d delete"));
    }
}
