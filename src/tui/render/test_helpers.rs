use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::controller::Controller;
use crate::io::store::MemoryStore;
use crate::model::Config;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over an in-memory store with no tasks.
pub fn empty_app() -> App {
    App::new(
        Controller::open(Box::new(MemoryStore::new())),
        &Config::default(),
    )
}

/// An App whose default list holds `tasks` as (text, completed) pairs.
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let mut app = empty_app();
    for (text, completed) in tasks {
        app.controller.add(text, *completed, None).unwrap();
    }
    // Drop any celebration the setup triggered
    app.controller.take_feedback();
    app
}
