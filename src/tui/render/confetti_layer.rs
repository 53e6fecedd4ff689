use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::app::App;

/// Paint the confetti particles straight into the buffer, over whatever is
/// already drawn
pub fn render_confetti(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confetti) = &app.confetti else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette = app.theme.confetti_palette();
    let buf = frame.buffer_mut();

    for p in confetti.particles() {
        if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
            continue;
        }
        let x = area.x + (p.x * area.width as f32) as u16;
        let y = area.y + (p.y * area.height as f32) as u16;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(p.glyph)
                .set_fg(palette[p.color % palette.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::confetti::Confetti;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn particles_land_on_screen() {
        let mut app = empty_app();
        let mut confetti = Confetti::launch();
        for _ in 0..5 {
            confetti.step();
        }
        app.confetti = Some(confetti);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confetti(frame, &app, area)
        });
        assert!(!output.trim().is_empty());
    }

    #[test]
    fn nothing_drawn_without_confetti() {
        let app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confetti(frame, &app, area)
        });
        assert!(output.is_empty());
    }
}
