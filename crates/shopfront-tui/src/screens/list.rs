//! Product list screen: search form, brand checkboxes, sortable results
//! table and page bar.
//!
//! Edits to the name, brand and price controls are staged in the
//! [`ProductList`] and only sent when the user presses Enter. Sort, page and
//! page-size changes fetch straight away. The page bar also takes mouse
//! clicks on its arrows and page numbers.

use std::cell::Cell as StdCell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use shopfront_core::{FetchRequest, ListConfig, Product, ProductList, display_number};

use crate::action::Action;
use crate::component::Component;
use crate::screen::Route;
use crate::theme;
use crate::widgets::loader::render_loader;
use crate::widgets::pagination::{PagerTarget, pagination_line, target_at};

/// Page sizes offered by `+` / `-`.
const PAGE_SIZES: [u32; 5] = [5, 10, 20, 50, 100];

/// Numbered slots shown in the page bar.
const PAGER_SLOTS: u32 = 9;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    Results,
    Name,
    Brands,
    PriceMin,
    PriceMax,
}

impl Field {
    const ALL: [Field; 5] = [
        Self::Results,
        Self::Name,
        Self::Brands,
        Self::PriceMin,
        Self::PriceMax,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        let idx = (self.position() + 1) % Self::ALL.len();
        Self::ALL.get(idx).copied().unwrap_or_default()
    }

    fn prev(self) -> Self {
        let idx = (self.position() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL.get(idx).copied().unwrap_or_default()
    }

    fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::PriceMin | Self::PriceMax)
    }
}

pub struct ListScreen {
    list: ProductList,
    field: Field,
    name_input: String,
    price_min_input: String,
    price_max_input: String,
    brand_cursor: usize,
    table_state: TableState,
    throbber_state: ThrobberState,
    /// Where the page bar was last drawn, for click hit-testing.
    pager_area: StdCell<Rect>,
}

impl ListScreen {
    pub fn new(config: &ListConfig) -> Self {
        let list = ProductList::new(config);
        Self {
            price_min_input: display_number(list.filter().price_gte),
            price_max_input: display_number(list.filter().price_lte),
            list,
            field: Field::default(),
            name_input: String::new(),
            brand_cursor: 0,
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
            pager_area: StdCell::new(Rect::default()),
        }
    }

    #[cfg(test)]
    pub fn list(&self) -> &ProductList {
        &self.list
    }

    // ── Selection ───────────────────────────────────────────────────

    fn items(&self) -> &[Product] {
        &self.list.results().items
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn selected_product(&self) -> Option<&Product> {
        self.items().get(self.selected_index())
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    /// Keep the selection inside the freshly loaded page.
    fn clamp_selection(&mut self) {
        let len = self.items().len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.selected_index().min(len - 1)));
        }
    }

    // ── Staged edits ────────────────────────────────────────────────

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.field {
            Field::Name => Some(&mut self.name_input),
            Field::PriceMin => Some(&mut self.price_min_input),
            Field::PriceMax => Some(&mut self.price_max_input),
            Field::Results | Field::Brands => None,
        }
    }

    /// Copy the text inputs into the staged filter. An empty or unparsable
    /// price counts as zero.
    fn stage_inputs(&mut self) {
        self.list.set_name_like(self.name_input.clone());
        self.list.set_price_bounds(
            parse_price(&self.price_min_input),
            parse_price(&self.price_max_input),
        );
    }

    fn search(&mut self) -> Option<Action> {
        self.stage_inputs();
        let request = self.list.search();
        self.table_state.select(Some(0));
        Some(Action::FetchProducts(request))
    }

    fn toggle_brand_at_cursor(&mut self) {
        let Some(brand) = self.list.brand_options().get(self.brand_cursor).cloned() else {
            return;
        };
        let selected = self.list.toggle_brand(&brand);
        debug!(brand = %brand, selected, "brand toggled");
    }

    fn move_brand_cursor(&mut self, forward: bool) {
        let len = self.list.brand_options().len();
        if len == 0 {
            return;
        }
        self.brand_cursor = if forward {
            (self.brand_cursor + 1) % len
        } else {
            (self.brand_cursor + len - 1) % len
        };
    }

    // ── Browse ──────────────────────────────────────────────────────

    fn step_page_size(&mut self, larger: bool) -> Option<FetchRequest> {
        let current = self.list.page().per_page;
        let next = if larger {
            PAGE_SIZES.iter().copied().find(|&s| s > current)
        } else {
            PAGE_SIZES.iter().rev().copied().find(|&s| s < current)
        }?;
        self.list.set_page_size(next)
    }

    /// Resolve a left click on the page bar.
    fn click_pager(&mut self, column: u16, row: u16) -> Option<FetchRequest> {
        let area = self.pager_area.get();
        if area.width == 0 || row != area.y || column < area.x || column >= area.right() {
            return None;
        }
        let target = target_at(
            self.list.page().current,
            self.list.results().page_count,
            PAGER_SLOTS,
            column - area.x,
        )?;
        debug!(?target, "page bar clicked");
        match target {
            PagerTarget::Prev => self.list.prev_page(),
            PagerTarget::Next => self.list.next_page(),
            PagerTarget::Page(page) => self.list.go_to_page(i64::from(page)),
        }
    }

    // ── Key handling per field ──────────────────────────────────────

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<Action> {
        let request = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            KeyCode::Enter => {
                return self
                    .selected_product()
                    .map(|p| Action::Navigate(Route::Detail(p.id.to_string())));
            }
            KeyCode::Char('/') => {
                self.field = Field::Name;
                None
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => self.list.prev_page(),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => self.list.next_page(),
            KeyCode::Home => self.list.first_page(),
            KeyCode::End => self.list.last_page(),
            KeyCode::Char('s') => self.list.cycle_sort(),
            KeyCode::Char('S') => self.list.cycle_sort_back(),
            KeyCode::Char('+' | '=') => self.step_page_size(true),
            KeyCode::Char('-') => self.step_page_size(false),
            _ => None,
        };
        request.map(Action::FetchProducts)
    }

    fn handle_brands_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.move_brand_cursor(false),
            KeyCode::Char('l') | KeyCode::Right => self.move_brand_cursor(true),
            KeyCode::Char(' ') => self.toggle_brand_at_cursor(),
            KeyCode::Enter => return self.search(),
            KeyCode::Esc => self.field = Field::Results,
            _ => {}
        }
        None
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Option<Action> {
        let numeric = matches!(self.field, Field::PriceMin | Field::PriceMax);
        match key.code {
            KeyCode::Enter => return self.search(),
            KeyCode::Esc => self.field = Field::Results,
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                }
                self.stage_inputs();
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.active_input_mut() {
                    if !numeric || accepts_price_char(input, c) {
                        input.push(c);
                    }
                }
                self.stage_inputs();
            }
            _ => {}
        }
        None
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render_input(&self, frame: &mut Frame, area: Rect, label: &str, field: Field) {
        let active = self.field == field;
        let value = match field {
            Field::Name => self.name_input.as_str(),
            Field::PriceMin => self.price_min_input.as_str(),
            Field::PriceMax => self.price_max_input.as_str(),
            Field::Results | Field::Brands => "",
        };

        let block = Block::default()
            .title(format!(" {label} "))
            .title_style(if active {
                Style::default().fg(theme::NEON_CYAN)
            } else {
                Style::default().fg(theme::DIM_WHITE)
            })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(active));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = if active {
            format!("{value}\u{2588}")
        } else {
            value.to_string()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(theme::NEON_CYAN))),
            inner,
        );
    }

    fn render_brands(&self, frame: &mut Frame, area: Rect) {
        let active = self.field == Field::Brands;
        let block = Block::default()
            .title(" Brands ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(active));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let filter = self.list.filter();
        let mut spans = Vec::new();
        for (i, brand) in self.list.brand_options().iter().enumerate() {
            let checked = filter.is_selected(brand);
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut style = if checked {
                Style::default().fg(theme::SUCCESS_GREEN)
            } else {
                Style::default().fg(theme::DIM_WHITE)
            };
            if active && i == self.brand_cursor {
                style = style.fg(theme::ELECTRIC_PURPLE).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{mark} {brand}"), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn render_sort(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Sort ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![
            Span::styled(self.list.sort().label(), Style::default().fg(theme::CORAL)),
            Span::styled(
                format!("  · {}/page", self.list.page().per_page),
                theme::key_hint(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let results = self.list.results();
        let block = Block::default()
            .title(format!(" Results ({}) ", results.total))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.field == Field::Results));

        let header = Row::new(vec!["ID", "Name", "Price", "Stock", "Tags"]).style(theme::table_header());
        let rows: Vec<Row> = results
            .items
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.id.to_string()),
                    Cell::from(p.name.clone()).style(Style::default().fg(theme::NEON_CYAN)),
                    Cell::from(display_number(p.price)).style(theme::price()),
                    Cell::from(p.stock.to_string()),
                    Cell::from(p.tags.clone()).style(Style::default().fg(theme::ELECTRIC_YELLOW)),
                ])
                .style(theme::table_row())
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Fill(3),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Fill(2),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state;
        frame.render_stateful_widget(table, area, &mut state);

        render_loader(
            frame,
            area,
            self.list.is_loading(),
            "Loading products…",
            &self.throbber_state,
        );
    }

    fn render_footer(&self, frame: &mut Frame, pager_area: Rect, hint_area: Rect) {
        let page = self.list.page();
        let results = self.list.results();

        self.pager_area.set(pager_area);
        let mut pager = pagination_line(page.current, results.page_count, PAGER_SLOTS);
        pager.spans.push(Span::styled(
            format!("   page {} of {}", page.current, results.page_count),
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(pager), pager_area);

        let hints: &[(&str, &str)] = match self.field {
            Field::Results => &[
                ("j/k ", "select  "),
                ("Enter ", "details  "),
                ("h/l ", "page  "),
                ("s ", "sort  "),
                ("+/- ", "per page  "),
                ("Tab ", "filters"),
            ],
            Field::Brands => &[
                ("h/l ", "move  "),
                ("Space ", "toggle  "),
                ("Enter ", "search  "),
                ("Esc ", "results"),
            ],
            Field::Name | Field::PriceMin | Field::PriceMax => &[
                ("Enter ", "search  "),
                ("Tab ", "next field  "),
                ("Esc ", "results"),
            ],
        };
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, theme::key_hint_key()),
                    Span::styled(*label, theme::key_hint()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), hint_area);
    }
}

// ── Component impl ───────────────────────────────────────────────────

impl Component for ListScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        let request = self.list.mount();
        action_tx.send(Action::FetchProducts(request))?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab => {
                self.field = self.field.next();
                return Ok(None);
            }
            KeyCode::BackTab => {
                self.field = self.field.prev();
                return Ok(None);
            }
            _ => {}
        }

        let action = match self.field {
            Field::Results => self.handle_results_key(key),
            Field::Brands => self.handle_brands_key(key),
            Field::Name | Field::PriceMin | Field::PriceMax => self.handle_text_key(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(1),
            MouseEventKind::ScrollUp => self.move_selection(-1),
            MouseEventKind::Down(MouseButton::Left) => {
                return Ok(self
                    .click_pager(mouse.column, mouse.row)
                    .map(Action::FetchProducts));
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.list.is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::ProductsFetched { seq, result, .. } => {
                match result {
                    Ok(payload) => {
                        self.list.apply_response(*seq, payload);
                    }
                    Err(reason) => self.list.apply_failure(*seq, reason),
                }
                self.clamp_selection();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Products ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(3), // name + prices
            Constraint::Length(3), // brands + sort
            Constraint::Min(3),    // results
            Constraint::Length(1), // pager
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let search_row = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(14),
        ])
        .split(layout[0]);
        self.render_input(frame, search_row[0], "Name", Field::Name);
        self.render_input(frame, search_row[1], "Price ≥", Field::PriceMin);
        self.render_input(frame, search_row[2], "Price ≤", Field::PriceMax);

        let option_row =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(34)]).split(layout[1]);
        self.render_brands(frame, option_row[0]);
        self.render_sort(frame, option_row[1]);

        self.render_table(frame, layout[2]);
        self.render_footer(frame, layout[3], layout[4]);
    }

    fn captures_input(&self) -> bool {
        self.field.is_text()
    }

    fn id(&self) -> &'static str {
        "ProductList"
    }
}

fn parse_price(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Digits, plus a single decimal point.
fn accepts_price_char(current: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !current.contains('.'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;
    use tokio::sync::mpsc;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ListScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn mounted() -> (ListScreen, mpsc::UnboundedReceiver<Action>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = ListScreen::new(&ListConfig::default());
        screen.init(tx).unwrap();
        let Some(Action::FetchProducts(request)) = rx.try_recv().ok() else {
            panic!("mount should request products");
        };
        screen
            .update(&Action::ProductsFetched {
                mount: 0,
                seq: request.seq,
                result: Ok(json!({
                    "products": [
                        { "id": 7, "name": "Pixel phone", "price": 18000, "stock": 3, "tags": "google,phone" },
                        { "id": 8, "name": "Galaxy phone", "price": 21000.5, "stock": 1, "tags": "" }
                    ],
                    "total": 42,
                    "pageCount": 5
                })),
            })
            .unwrap();
        (screen, rx)
    }

    fn fetched(action: Option<Action>) -> FetchRequest {
        match action {
            Some(Action::FetchProducts(request)) => request,
            other => panic!("expected a products fetch, got {other:?}"),
        }
    }

    #[test]
    fn mount_fetches_first_page_with_defaults() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut screen = ListScreen::new(&ListConfig::default());
        screen.init(tx).unwrap();

        let Ok(Action::FetchProducts(request)) = rx.try_recv() else {
            panic!("expected a fetch on mount");
        };
        assert_eq!(request.params.page, 1);
        assert_eq!(request.params.per_page, 10);
        assert_eq!(request.params.value("price_lte").as_deref(), Some("15000"));
    }

    #[test]
    fn typed_name_is_staged_until_enter() {
        let (mut screen, _rx) = mounted();
        screen.handle_key_event(key(KeyCode::Char('/'))).unwrap();
        assert!(screen.captures_input());

        type_text(&mut screen, "phone");
        assert_eq!(screen.list().filter().name_like, "phone");

        let request = fetched(screen.handle_key_event(key(KeyCode::Enter)).unwrap());
        assert_eq!(request.params.name_like, "phone");
        assert_eq!(request.params.page, 1);
    }

    #[test]
    fn next_page_keeps_the_committed_name() {
        let (mut screen, _rx) = mounted();
        screen.handle_key_event(key(KeyCode::Char('/'))).unwrap();
        type_text(&mut screen, "phone");
        let search = fetched(screen.handle_key_event(key(KeyCode::Enter)).unwrap());
        screen
            .update(&Action::ProductsFetched {
                mount: 0,
                seq: search.seq,
                result: Ok(json!({ "products": [], "total": 12, "pageCount": 2 })),
            })
            .unwrap();

        screen.handle_key_event(key(KeyCode::Esc)).unwrap();
        let request = fetched(screen.handle_key_event(key(KeyCode::Char('l'))).unwrap());
        assert_eq!(request.params.page, 2);
        assert_eq!(request.params.name_like, "phone");
    }

    #[test]
    fn brand_toggle_does_not_fetch() {
        let (mut screen, _rx) = mounted();
        screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        screen.handle_key_event(key(KeyCode::Tab)).unwrap();

        assert!(screen.handle_key_event(key(KeyCode::Char(' '))).unwrap().is_none());
        assert!(screen.list().filter().is_selected("Apple"));

        screen.handle_key_event(key(KeyCode::Right)).unwrap();
        screen.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        let request = fetched(screen.handle_key_event(key(KeyCode::Enter)).unwrap());
        assert_eq!(request.params.brands, "Apple,Google");
    }

    #[test]
    fn price_fields_accept_only_numbers() {
        let (mut screen, _rx) = mounted();
        for _ in 0..3 {
            screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        }
        screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        type_text(&mut screen, "1a2.5.0");

        assert!((screen.list().filter().price_gte - 12.50).abs() < f64::EPSILON);
    }

    #[test]
    fn sort_applies_immediately_without_resetting_page() {
        let (mut screen, _rx) = mounted();
        fetched(screen.handle_key_event(key(KeyCode::Char('l'))).unwrap());

        let request = fetched(screen.handle_key_event(key(KeyCode::Char('s'))).unwrap());
        assert_eq!(request.params.page, 2);
        assert_eq!(request.params.value("order").as_deref(), Some("desc"));
    }

    #[test]
    fn page_size_steps_through_presets() {
        let (mut screen, _rx) = mounted();
        let request = fetched(screen.handle_key_event(key(KeyCode::Char('+'))).unwrap());
        assert_eq!(request.params.per_page, 20);
        let request = fetched(screen.handle_key_event(key(KeyCode::Char('-'))).unwrap());
        assert_eq!(request.params.per_page, 10);
    }

    #[test]
    fn enter_on_a_row_opens_its_detail() {
        let (mut screen, _rx) = mounted();
        screen.handle_key_event(key(KeyCode::Down)).unwrap();
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, Some(Action::Navigate(Route::Detail(ref id))) if id == "8"));
    }

    #[test]
    fn failed_fetch_keeps_rows() {
        let (mut screen, _rx) = mounted();
        let request = fetched(screen.handle_key_event(key(KeyCode::Char('l'))).unwrap());
        screen
            .update(&Action::ProductsFetched {
                mount: 0,
                seq: request.seq,
                result: Err("503 Service Unavailable".into()),
            })
            .unwrap();

        assert_eq!(screen.list().results().items.len(), 2);
        assert!(!screen.list().is_loading());
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(screen: &ListScreen) {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| screen.render(frame, frame.area())).unwrap();
    }

    #[test]
    fn clicking_a_page_number_jumps_to_it() {
        let (mut screen, _rx) = mounted();
        draw(&screen);
        let bar = screen.pager_area.get();

        // "‹  1  2  3  4  5  ›": page 3 spans columns 8..11
        let request = fetched(screen.handle_mouse_event(click(bar.x + 9, bar.y)).unwrap());
        assert_eq!(request.params.page, 3);

        draw(&screen);
        let request = fetched(screen.handle_mouse_event(click(bar.x, bar.y)).unwrap());
        assert_eq!(request.params.page, 2);
    }

    #[test]
    fn clicks_off_the_page_bar_do_nothing() {
        let (mut screen, _rx) = mounted();
        draw(&screen);
        let bar = screen.pager_area.get();

        assert!(screen.handle_mouse_event(click(bar.x + 9, bar.y - 1)).unwrap().is_none());
        assert!(screen.handle_mouse_event(click(bar.x + 1, bar.y)).unwrap().is_none());
        // current page
        assert!(screen.handle_mouse_event(click(bar.x + 3, bar.y)).unwrap().is_none());
    }

    #[test]
    fn renders_rows_and_pager() {
        let (screen, _rx) = mounted();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| screen.render(frame, frame.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Pixel phone"));
        assert!(text.contains("21000.5"));
        assert!(text.contains("Results (42)"));
        assert!(text.contains("page 1 of 5"));
        assert!(!text.contains("Loading products"));
    }
}
