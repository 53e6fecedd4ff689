pub mod confetti_layer;
pub mod confirm_popup;
pub mod help_overlay;
mod helpers;
pub mod input_box;
pub mod list_prompt;
pub mod progress_bar;
pub mod sidebar;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Mode};

/// Width of the list sidebar, borders included
const SIDEBAR_WIDTH: u16 = 24;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | body | input box | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // body
            Constraint::Length(3), // input box
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let body = if app.surfaces.sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(chunks[1]);
        sidebar::render_sidebar(frame, app, columns[0]);
        columns[1]
    } else {
        chunks[1]
    };

    let tasks_area = if app.surfaces.progress {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(body);
        progress_bar::render_progress_bar(frame, app, rows[0]);
        rows[1]
    } else {
        body
    };
    task_list::render_task_list(frame, app, tasks_area);

    input_box::render_input_box(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays, rendered on top of everything
    if app.confetti.is_some() {
        confetti_layer::render_confetti(frame, app, area);
    }
    match app.mode {
        Mode::Confirm => confirm_popup::render_confirm_popup(frame, app, area),
        Mode::ListName => list_prompt::render_list_prompt(frame, app, area),
        Mode::Navigate | Mode::Input => {}
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            " tick ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{203A} ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.controller.selected_list().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn full_screen_shows_every_surface() {
        let app = app_with_tasks(&[("Buy milk", true), ("Walk dog", false)]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(output.contains("tick \u{203A} Default"));
        assert!(output.contains("Lists"));
        assert!(output.contains("1 / 2"));
        assert!(output.contains("[x] Buy milk"));
        assert!(output.contains("[ ] Walk dog"));
        assert!(output.contains("New task"));
    }

    #[test]
    fn disabled_surfaces_are_not_drawn() {
        let mut app = app_with_tasks(&[("Buy milk", true), ("Walk dog", false)]);
        app.surfaces.sidebar = false;
        app.surfaces.progress = false;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(!output.contains("Lists"));
        assert!(!output.contains("1 / 2"));
        assert!(output.contains("[ ] Walk dog"));
    }

    #[test]
    fn confirm_popup_names_the_task() {
        let mut app = app_with_tasks(&[("Walk dog", false)]);
        app.pending_delete = Some(app.controller.request_delete(0).unwrap());
        app.mode = Mode::Confirm;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &app));
        assert!(output.contains("Delete this task?"));
        assert!(output.contains("\"Walk dog\""));
    }
}
