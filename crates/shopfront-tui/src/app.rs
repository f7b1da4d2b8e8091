//! Application core: event loop, routing and action dispatch.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use shopfront_core::{Catalog, DetailConfig, ListConfig};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge;
use crate::event::{Event, EventReader};
use crate::screen::Route;
use crate::screens::create_screen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    route: Route,
    /// The mounted screen. Replaced wholesale on every navigation.
    screen: Box<dyn Component>,
    /// Bumped on every mount; fetch results carry the value current when
    /// they were requested.
    mount: u64,
    catalog: Catalog,
    list_config: ListConfig,
    detail_config: DetailConfig,
    running: bool,
    help_visible: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Build the app with the screen for `route` already mounted. Its
    /// initial fetch waits in the action queue until `run` starts.
    pub fn new(
        catalog: Catalog,
        list_config: ListConfig,
        detail_config: DetailConfig,
        route: Route,
    ) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screen = create_screen(&route, &list_config, &detail_config);

        let mut app = Self {
            route,
            screen,
            mount: 0,
            catalog,
            list_config,
            detail_config,
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
        };
        app.init_screen()?;
        Ok(app)
    }

    /// Replace the current screen with a fresh one for `route` and run its
    /// mount logic.
    fn mount_screen(&mut self, route: Route) -> Result<()> {
        self.screen = create_screen(&route, &self.list_config, &self.detail_config);
        self.route = route;
        self.init_screen()
    }

    fn init_screen(&mut self) -> Result<()> {
        self.mount += 1;
        self.screen.init(self.action_tx.clone())?;
        info!(path = %self.route, screen = self.screen.id(), mount = self.mount, "mounted");
        Ok(())
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(
            Duration::from_millis(100), // loader animation + hide timer
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(api = self.catalog.base_url(), "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render | Event::Resize => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, then the mounted screen. While the screen has a
    /// text field focused only Ctrl+C is global.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        if !self.screen.captures_input() {
            match key.code {
                KeyCode::Char('q') => return Ok(Some(Action::Quit)),
                KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
                _ => {}
            }
        }

        self.screen.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.screen.handle_mouse_event(mouse)
    }

    /// Whether a fetch result is addressed to the mounted screen.
    fn is_current(&self, action: &Action) -> bool {
        match action {
            Action::ProductsFetched { mount, .. } | Action::ProductFetched { mount, .. } => {
                *mount == self.mount
            }
            _ => true,
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        if !self.is_current(action) {
            debug!(mount = self.mount, "dropping fetch result for an unmounted screen");
            return Ok(());
        }

        match action {
            Action::Quit => self.running = false,

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Navigate(route) => {
                if *route != self.route {
                    debug!("navigating: {} → {}", self.route, route);
                }
                self.mount_screen(route.clone())?;
            }

            Action::FetchProducts(request) => {
                data_bridge::spawn_products_fetch(
                    self.catalog.clone(),
                    self.mount,
                    request.clone(),
                    self.action_tx.clone(),
                );
            }

            Action::FetchProduct(id) => {
                data_bridge::spawn_product_fetch(
                    self.catalog.clone(),
                    self.mount,
                    id.clone(),
                    self.action_tx.clone(),
                );
            }

            Action::Render => {}

            other => {
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // screen content
            Constraint::Length(1), // status bar
        ])
        .split(area);

        self.screen.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.route.path(), Style::default().fg(theme::ELECTRIC_PURPLE)),
            Span::styled(format!("  {}", self.catalog.base_url()), theme::key_hint()),
            Span::styled(" │ ", theme::key_hint()),
            Span::styled("? ", theme::key_hint_key()),
            Span::styled("help  ", theme::key_hint()),
            Span::styled("q ", theme::key_hint_key()),
            Span::styled("quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));
        let help_area = Rect::new(
            area.x + area.width.saturating_sub(help_width) / 2,
            area.y + area.height.saturating_sub(help_height) / 2,
            help_width,
            help_height,
        );

        frame.render_widget(Clear, help_area);
        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::NEON_CYAN),
            ))
        };
        let entry = |keys: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(label, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            section("Product list"),
            entry("j/k ↑/↓", "Select product"),
            entry("Enter", "Open details / run search"),
            entry("h/l ←/→", "Previous / next page"),
            entry("Home/End", "First / last page"),
            entry("s / S", "Next / previous sort"),
            entry("+ / -", "Page size"),
            entry("Tab", "Cycle filter fields"),
            entry("/", "Edit name filter"),
            entry("Space", "Toggle brand"),
            Line::from(""),
            section("Global"),
            entry("Esc", "Back / leave field"),
            entry("?", "This help"),
            entry("q  Ctrl+C", "Quit"),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shopfront_core::CatalogConfig;

    use super::*;

    fn app(route: Route) -> App {
        let catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        App::new(catalog, ListConfig::default(), DetailConfig::default(), route).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn new_mounts_the_start_screen_once() {
        let mut app = app(Route::List);
        assert_eq!(app.screen.id(), "ProductList");
        assert_eq!(app.mount, 1);
        assert!(matches!(app.action_rx.try_recv(), Ok(Action::FetchProducts(_))));
        assert!(app.action_rx.try_recv().is_err());
    }

    #[test]
    fn start_on_a_detail_path_fetches_that_product() {
        let mut app = app(Route::Detail("7".into()));
        assert_eq!(app.screen.id(), "ProductDetail");
        assert!(matches!(app.action_rx.try_recv(), Ok(Action::FetchProduct(ref id)) if id == "7"));
    }

    #[test]
    fn navigate_remounts_with_a_new_generation() {
        let mut app = app(Route::List);
        let first = app.mount;

        app.process_action(&Action::Navigate(Route::Detail("7".into())))
            .unwrap();

        assert_eq!(app.route, Route::Detail("7".into()));
        assert_eq!(app.screen.id(), "ProductDetail");
        assert_eq!(app.mount, first + 1);
    }

    #[test]
    fn results_for_an_old_mount_are_not_current() {
        let mut app = app(Route::List);
        let stale = Action::ProductsFetched {
            mount: app.mount,
            seq: 1,
            result: Ok(json!({ "products": [] })),
        };
        assert!(app.is_current(&stale));

        app.process_action(&Action::Navigate(Route::List)).unwrap();
        assert!(!app.is_current(&stale));
        assert!(app.is_current(&Action::Tick));
    }

    #[test]
    fn q_quits_unless_a_field_is_focused() {
        let mut app = app(Route::List);
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Quit)
        ));

        app.handle_key_event(key(KeyCode::Char('/'))).unwrap();
        assert!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap().is_none());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(app.handle_key_event(ctrl_c).unwrap(), Some(Action::Quit)));
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app(Route::List);
        app.process_action(&Action::ToggleHelp).unwrap();

        assert!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap().is_none());
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ToggleHelp)
        ));
    }
}
