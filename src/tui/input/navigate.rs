use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Instant) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::BackTab if app.surfaces.sidebar => {
            app.focus = match app.focus {
                Focus::Tasks => Focus::Sidebar,
                Focus::Sidebar => Focus::Tasks,
            };
            if app.focus == Focus::Sidebar {
                app.sync_sidebar_cursor();
            }
        }
        KeyCode::Char('n') if app.surfaces.sidebar => {
            app.list_name_input.clear();
            app.mode = Mode::ListName;
        }
        _ => match app.focus {
            Focus::Tasks => handle_tasks_key(app, key, now),
            Focus::Sidebar => handle_sidebar_key(app, key, now),
        },
    }
}

fn handle_tasks_key(app: &mut App, key: KeyEvent, now: Instant) {
    let count = app.controller.rows().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = count.saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if count > 0 {
                let result = app.controller.toggle(app.cursor);
                app.report(result, now);
            }
        }
        KeyCode::Char('e') => {
            if count > 0 {
                let result = app.controller.edit(app.cursor);
                if app.report(result, now).is_some() {
                    app.mode = Mode::Input;
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if count > 0 {
                let result = app.controller.request_delete(app.cursor);
                if let Some(pending) = app.report(result, now) {
                    app.pending_delete = Some(pending);
                    app.mode = Mode::Confirm;
                }
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => app.mode = Mode::Input,
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent, now: Instant) {
    let names = app.list_names();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_cursor + 1 < names.len() {
                app.sidebar_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_cursor = app.sidebar_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let Some(name) = names.get(app.sidebar_cursor) else {
                return;
            };
            let result = app.controller.select_list(name);
            if app.report(result, now).is_some() {
                app.cursor = 0;
            }
        }
        _ => {}
    }
}
