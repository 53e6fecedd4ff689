use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::line_input::LineInput;

/// Keys shared by every single-line field. Returns false when the key
/// isn't a text-editing key.
fn edit_line(input: &mut LineInput, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
            input.delete_word_left();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => input.home(),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => input.end(),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert_char(c),
        _ => return false,
    }
    true
}

/// Task input field
pub(super) fn handle_input(app: &mut App, key: KeyEvent, now: Instant) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            let result = app.controller.submit();
            if let Some(row) = app.report(result, now) {
                app.cursor = row;
            }
        }
        // Leave the field; text and any pending edit stay put
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.controller.cancel_input(),
        _ => {
            edit_line(app.controller.input_mut(), key);
        }
    }
}

/// New list name prompt
pub(super) fn handle_list_name(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => {
            let name = app.list_name_input.text().to_string();
            app.list_name_input.clear();
            app.mode = Mode::Navigate;
            let result = app.controller.add_list(&name);
            if app.report(result, now).is_some() {
                app.cursor = 0;
                app.sync_sidebar_cursor();
            }
        }
        KeyCode::Esc => {
            app.list_name_input.clear();
            app.mode = Mode::Navigate;
        }
        _ => {
            edit_line(&mut app.list_name_input, key);
        }
    }
}
