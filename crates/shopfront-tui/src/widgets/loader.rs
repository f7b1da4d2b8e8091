//! Loading indicator overlay.
//!
//! Stateless: whether it shows is decided entirely by the `visible` flag the
//! caller passes in. The only state is the spinner frame, which the owning
//! screen advances on every tick.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

const HEIGHT: u16 = 3;

/// Draw a centered spinner box over `area` when `visible`.
pub fn render_loader(
    frame: &mut Frame,
    area: Rect,
    visible: bool,
    label: &str,
    state: &ThrobberState,
) {
    if !visible || area.height < HEIGHT {
        return;
    }

    let overlay = centered(area, label);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(theme::NEON_CYAN))
        .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));

    frame.render_stateful_widget(throbber, inner, &mut state.clone());
}

fn centered(area: Rect, label: &str) -> Rect {
    let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    let width = label_width.saturating_add(6).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - HEIGHT) / 2;
    Rect::new(x, y, width, HEIGHT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(visible: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        let state = ThrobberState::default();
        terminal
            .draw(|frame| render_loader(frame, frame.area(), visible, "Loading", &state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn hidden_loader_draws_nothing() {
        assert!(draw(false).trim().is_empty());
    }

    #[test]
    fn visible_loader_shows_label() {
        assert!(draw(true).contains("Loading"));
    }

    #[test]
    fn overlay_is_centered() {
        let area = Rect::new(0, 0, 40, 9);
        let rect = centered(area, "Loading");
        assert_eq!(rect, Rect::new(13, 3, 13, 3));
    }
}
