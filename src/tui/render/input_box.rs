use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

/// Render the task input field. The border turns red while an error is up.
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = app.mode == Mode::Input;
    let input = app.controller.input();

    let border_color = if app.banner_active() {
        app.theme.red
    } else if active {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let title = if app.controller.pending_edit().is_some() {
        " Editing task "
    } else {
        " New task "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = if input.is_empty() && !active {
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("a", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(" to type a task", Style::default().fg(app.theme.dim).bg(bg)),
        ])
    } else {
        Line::from(Span::styled(
            input.text().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    // Keep the cursor in view on long input
    let cursor_col = input.cursor_col() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(bg))
            .scroll((0, scroll)),
        inner,
    );

    if active {
        frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn placeholder_when_idle() {
        let app = empty_app();
        let output = render_to_string(40, 3, |frame, area| render_input_box(frame, &app, area));
        assert!(output.contains("New task"));
        assert!(output.contains("Press a to type a task"));
    }

    #[test]
    fn edit_in_progress_changes_title() {
        let mut app = app_with_tasks(&[("Walk dog", false)]);
        app.controller.edit(0).unwrap();
        app.mode = Mode::Input;
        let output = render_to_string(40, 3, |frame, area| render_input_box(frame, &app, area));
        assert!(output.contains("Editing task"));
        assert!(output.contains("Walk dog"));
    }

    #[test]
    fn long_input_scrolls_to_cursor() {
        let mut app = empty_app();
        app.controller
            .input_mut()
            .set("the start of this line scrolls away, the end stays");
        app.mode = Mode::Input;
        let output = render_to_string(20, 3, |frame, area| render_input_box(frame, &app, area));
        assert!(output.contains("stays"));
        assert!(!output.contains("the start"));
    }
}
