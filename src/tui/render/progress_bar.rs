use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::progress::Progress;
use crate::tui::app::App;

/// Filled and empty cells of a bar `width` cells wide
fn bar_cells(progress: Progress, width: usize) -> (usize, usize) {
    let filled = ((progress.ratio() * width as f64).round() as usize).min(width);
    (filled, width - filled)
}

/// Render the completion bar with its "c / t" label and percentage
pub fn render_progress_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let progress = app.controller.progress();

    let label = format!(" {}  {:.0}% ", progress.label(), progress.percent());
    let bar_width = (area.width as usize).saturating_sub(label.len() + 1);
    let (filled, empty) = bar_cells(progress, bar_width);

    let bar_color = if progress.all_complete() {
        app.theme.green
    } else {
        app.theme.highlight
    };

    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(bar_color).bg(bg)),
        Span::styled("\u{2591}".repeat(empty), Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(label, Style::default().fg(app.theme.text).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
