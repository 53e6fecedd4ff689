use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Enter) => {
            let pending = app.pending_delete.take();
            app.mode = Mode::Navigate;
            if let Some(pending) = pending {
                app.controller.confirm_delete(&pending);
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.pending_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
