//! Product detail screen.

use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use shopfront_core::{DetailConfig, ProductDetail, RouteContext, display_number};

use crate::action::Action;
use crate::component::Component;
use crate::screen::Route;
use crate::theme;
use crate::widgets::loader::render_loader;

pub struct DetailScreen {
    route: RouteContext,
    detail: ProductDetail,
    throbber_state: ThrobberState,
}

impl DetailScreen {
    /// Mount for `pid`. Path parameters are resolved synchronously, so the
    /// route is ready from the start.
    pub fn new(config: &DetailConfig, pid: impl Into<String>) -> Self {
        Self {
            route: RouteContext::ready(pid),
            detail: ProductDetail::new(config),
            throbber_state: ThrobberState::default(),
        }
    }

    #[cfg(test)]
    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    fn field_line<'a>(label: &'a str, value: String, style: Style) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {label:<8}"), theme::key_hint()),
            Span::styled(value, style),
        ])
    }
}

impl Component for DetailScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        if let Some(id) = self.detail.on_route(&self.route) {
            action_tx.send(Action::FetchProduct(id))?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                Ok(Some(Action::Navigate(Route::List)))
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.detail.tick(Instant::now());
                if self.detail.is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::ProductFetched { id, result, .. } => match result {
                Ok(payload) => {
                    self.detail.apply_response(id, payload, Instant::now());
                }
                Err(reason) => self.detail.apply_failure(id, reason),
            },
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let pid = self.route.pid.as_deref().unwrap_or_default();
        let block = Block::default()
            .title(format!(" Product {pid} "))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let product = self.detail.product();
        let mut lines = vec![
            Line::from(""),
            Self::field_line("ID", product.id.to_string(), Style::default().fg(theme::DIM_WHITE)),
            Self::field_line("Name", product.name.clone(), Style::default().fg(theme::NEON_CYAN)),
            Self::field_line("Price", display_number(product.price), theme::price()),
            Self::field_line("Stock", product.stock.to_string(), Style::default().fg(theme::DIM_WHITE)),
        ];
        let tags = product.tag_list();
        if !tags.is_empty() {
            lines.push(Self::field_line(
                "Tags",
                tags.join(" · "),
                Style::default().fg(theme::ELECTRIC_YELLOW),
            ));
        }
        if !product.picture.is_empty() {
            lines.push(Self::field_line(
                "Picture",
                product.picture.clone(),
                Style::default().fg(theme::CORAL),
            ));
        }
        frame.render_widget(Paragraph::new(lines), layout[0]);

        let hints = Line::from(vec![
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("back to list", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);

        render_loader(
            frame,
            inner,
            self.detail.is_loading(),
            "Loading product…",
            &self.throbber_state,
        );
    }

    fn id(&self) -> &'static str {
        "ProductDetail"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;
    use tokio::sync::mpsc;

    use super::*;

    fn instant_config() -> DetailConfig {
        DetailConfig {
            loader_delay: Duration::ZERO,
        }
    }

    fn screen_text(screen: &DetailScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|frame| screen.render(frame, frame.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn mount_requests_the_route_id_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = DetailScreen::new(&instant_config(), "7");
        screen.init(tx.clone()).unwrap();
        screen.init(tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(Action::FetchProduct(ref id)) if id == "7"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_id_never_fetches() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = DetailScreen::new(&instant_config(), "");
        screen.init(tx).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(screen.detail().is_loading());
    }

    #[test]
    fn adopted_product_renders_and_loader_hides_on_tick() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut screen = DetailScreen::new(&instant_config(), "7");
        screen.init(tx).unwrap();

        screen
            .update(&Action::ProductFetched {
                mount: 0,
                id: "7".into(),
                result: Ok(json!({ "id": 7, "name": "X", "price": 10, "tags": "a,b" })),
            })
            .unwrap();
        assert!(screen.detail().is_loading());

        screen.update(&Action::Tick).unwrap();
        assert!(!screen.detail().is_loading());

        let text = screen_text(&screen);
        assert!(text.contains("Product 7"));
        assert!(text.contains("a · b"));
        assert!(!text.contains("Loading product"));
    }

    #[test]
    fn rejected_payload_keeps_loader_up() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut screen = DetailScreen::new(&instant_config(), "7");
        screen.init(tx).unwrap();

        screen
            .update(&Action::ProductFetched {
                mount: 0,
                id: "7".into(),
                result: Ok(json!([1, 2, 3])),
            })
            .unwrap();
        screen.update(&Action::Tick).unwrap();

        assert!(screen.detail().is_loading());
        assert_eq!(screen.detail().product().id, 0);
        assert!(screen_text(&screen).contains("Loading product"));
    }

    #[test]
    fn escape_goes_back_to_the_list() {
        let mut screen = DetailScreen::new(&instant_config(), "7");
        let action = screen
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert!(matches!(action, Some(Action::Navigate(Route::List))));
    }
}
