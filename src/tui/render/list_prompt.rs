use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

/// Render the "new list" name prompt
pub fn render_list_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let popup_w: u16 = 40.min(area.width.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, 4, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" New list ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let input = &app.list_name_input;
    let cursor_col = input.cursor_col() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    let name = Line::from(Span::styled(
        input.text().to_string(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
    frame.render_widget(
        Paragraph::new(name)
            .style(Style::default().bg(bg))
            .scroll((0, scroll)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    if inner.height > 1 {
        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(" create  ", Style::default().fg(app.theme.text).bg(bg)),
            Span::styled("Esc", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(" cancel", Style::default().fg(app.theme.text).bg(bg)),
        ]);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().bg(bg)),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );
    }
    frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
}
