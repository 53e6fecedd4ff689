mod confirm;
mod edit;
mod navigate;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use confirm::handle_confirm;
use edit::{handle_input, handle_list_name};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key, now),
        Mode::Input => handle_input(app, key, now),
        Mode::ListName => handle_list_name(app, key, now),
        Mode::Confirm => handle_confirm(app, key),
    }

    app.absorb_feedback(now);
    app.clamp_cursor();
}

/// Handle a bracketed paste: the text goes into whichever field is active
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Input => app.controller.input_mut().insert_str(text),
        Mode::ListName => app.list_name_input.insert_str(text),
        Mode::Navigate | Mode::Confirm => {}
    }
}
