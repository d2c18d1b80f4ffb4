//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! Both views own their criteria state and a results table; both hand their
//! criteria to [`Roster::filter`]. They differ only in *when* they call it:
//! the simple view on submit, the advanced view after every edit.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        filter_form::{FilterForm, FilterInputs},
        help::HelpPopup,
        nav_bar::{NavBar, APP_TITLE, VIEWS},
        results_table::{ResultsTable, ResultsTableState},
        search_bar::{SearchBar, SearchBarFocus},
        text_input::TextInput,
    },
};
use chrono::Datelike;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eos_core::{config::Config, Criteria, Field, Roster, SearchMode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Simple view text input.
    Search,
    /// Simple view field selector.
    Fields,
    /// One of the advanced view's inputs.
    Filter(Field),
    /// Results table of the current view.
    Table,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    /// First input of a view; where focus lands when the view opens.
    fn entry(view: SearchMode) -> Focus {
        match view {
            SearchMode::Simple => Focus::Search,
            SearchMode::Advanced => Focus::Filter(Field::Name),
        }
    }

    fn next(self, view: SearchMode) -> Focus {
        match (view, self) {
            (SearchMode::Simple, Focus::Search) => Focus::Fields,
            (SearchMode::Simple, Focus::Fields) => Focus::Table,
            (SearchMode::Advanced, Focus::Filter(Field::Location)) => Focus::Table,
            (SearchMode::Advanced, Focus::Filter(f)) => Focus::Filter(f.next()),
            _ => Focus::entry(view),
        }
    }

    fn prev(self, view: SearchMode) -> Focus {
        match (view, self) {
            (SearchMode::Simple, Focus::Fields) => Focus::Search,
            (SearchMode::Simple, Focus::Table) => Focus::Fields,
            (SearchMode::Simple, _) => Focus::Table,
            (SearchMode::Advanced, Focus::Filter(Field::Name)) => Focus::Table,
            (SearchMode::Advanced, Focus::Filter(f)) => Focus::Filter(f.prev()),
            (SearchMode::Advanced, _) => Focus::Filter(Field::Location),
        }
    }
}

/// Returns true when the current focus is on a text input, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Filter(_) | Focus::Command)
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Simple search: one active field, filtered on submit.
#[derive(Debug)]
pub struct SimpleView {
    pub input: TextInput,
    pub field: Field,
    pub table: ResultsTableState,
}

impl SimpleView {
    fn new(field: Field, roster: &Roster) -> Self {
        Self {
            input: TextInput::default(),
            field,
            table: ResultsTableState::new((0..roster.len()).collect()),
        }
    }

    pub fn criteria(&self) -> Criteria {
        Criteria::single(self.field, self.input.text())
    }

    /// Drop the query and show the full roster again, back on `field`.
    pub fn discard(&mut self, field: Field, roster: &Roster) {
        self.input.clear();
        self.field = field;
        self.table.set_rows((0..roster.len()).collect());
    }

    /// Re-run the filter with the current input and field.
    pub fn submit(&mut self, roster: &Roster) {
        let matches = roster.filter(&self.criteria());
        tracing::info!(
            field = %self.field,
            query = self.input.text(),
            matched = matches.len(),
            "simple search submitted"
        );
        self.table.set_rows(matches.into_indices());
    }
}

/// Advanced search: three simultaneous criteria, filtered live.
#[derive(Debug)]
pub struct AdvancedView {
    pub inputs: FilterInputs,
    pub table: ResultsTableState,
}

impl AdvancedView {
    fn new(roster: &Roster) -> Self {
        Self {
            inputs: FilterInputs::default(),
            table: ResultsTableState::new((0..roster.len()).collect()),
        }
    }

    pub fn criteria(&self) -> Criteria {
        Field::ALL.iter().fold(Criteria::new(), |c, &f| {
            c.with(f, self.inputs.get(f).text())
        })
    }

    pub fn refresh(&mut self, roster: &Roster) {
        let matches = roster.filter(&self.criteria());
        tracing::debug!(matched = matches.len(), "advanced filter refreshed");
        self.table.set_rows(matches.into_indices());
    }

    /// Clear every input; the table returns to the full roster.
    pub fn reset(&mut self, roster: &Roster) {
        tracing::info!("advanced filters reset");
        self.inputs.clear();
        self.refresh(roster);
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub roster: Roster,
    pub view: SearchMode,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub simple: SimpleView,
    pub advanced: AdvancedView,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Switch views; focus lands on the new view's first input.
    ///
    /// The view being left loses its criteria and results, so returning to it
    /// starts from the full roster.
    pub fn show_view(&mut self, view: SearchMode) {
        tracing::debug!(from = %self.view, to = %view, "view switch");
        if view != self.view {
            match self.view {
                SearchMode::Simple => self
                    .simple
                    .discard(self.config.ui.default_field, &self.roster),
                SearchMode::Advanced => self.advanced.reset(&self.roster),
            }
        }
        self.view = view;
        self.focus = Focus::entry(view);
    }

    pub fn table(&self) -> &ResultsTableState {
        match self.view {
            SearchMode::Simple => &self.simple.table,
            SearchMode::Advanced => &self.advanced.table,
        }
    }

    fn table_mut(&mut self) -> &mut ResultsTableState {
        match self.view {
            SearchMode::Simple => &mut self.simple.table,
            SearchMode::Advanced => &mut self.advanced.table,
        }
    }

    fn cycle_view(&mut self, step: isize) {
        let len = VIEWS.len() as isize;
        let current = VIEWS.iter().position(|&v| v == self.view).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.show_view(VIEWS[next]);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(roster: Roster, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        let view = config.ui.start_view;
        let simple = SimpleView::new(config.ui.default_field, &roster);
        let advanced = AdvancedView::new(&roster);
        let focus = Focus::entry(view);

        let state = AppState {
            roster,
            view,
            focus,
            prev_focus: focus,
            simple,
            advanced,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.text().to_string();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        let insert = is_insert_mode(s.focus);
        match event {
            AppEvent::Char('?') if !insert => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if !insert => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Leave a text input for the table, where shortcuts work again
            AppEvent::Escape => {
                if insert {
                    tracing::debug!(from = ?s.focus, "focus -> Table");
                    s.focus = Focus::Table;
                }
            }

            AppEvent::FocusNext | AppEvent::FocusPrev => {
                let next = if event == AppEvent::FocusNext {
                    s.focus.next(s.view)
                } else {
                    s.focus.prev(s.view)
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::SearchFocus => s.focus = Focus::entry(s.view),

            AppEvent::ShowView(view) => s.show_view(view),
            AppEvent::NextView => s.cycle_view(1),
            AppEvent::PrevView => s.cycle_view(-1),

            AppEvent::CycleField => match s.view {
                SearchMode::Simple => {
                    s.simple.field = s.simple.field.next();
                    tracing::debug!(field = %s.simple.field, "field selected");
                }
                SearchMode::Advanced => {
                    s.focus = match s.focus {
                        Focus::Filter(f) => Focus::Filter(f.next()),
                        _ => Focus::Filter(Field::Name),
                    };
                }
            },

            AppEvent::Reset => {
                if s.view == SearchMode::Advanced {
                    s.advanced.reset(&s.roster);
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Search => {
            if event == AppEvent::Enter {
                s.simple.submit(&s.roster);
            } else {
                s.simple.input.handle(&event);
            }
        }
        Focus::Fields => match event {
            AppEvent::Nav(Direction::Left) => s.simple.field = s.simple.field.prev(),
            AppEvent::Nav(Direction::Right) => s.simple.field = s.simple.field.next(),
            AppEvent::Enter => s.simple.submit(&s.roster),
            _ => {}
        },
        Focus::Filter(field) => {
            if s.advanced.inputs.get_mut(field).handle(&event) {
                s.advanced.refresh(&s.roster);
            }
        }
        Focus::Table => s.table_mut().handle(&event),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub(crate) fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let footer_height = u16::from(state.config.ui.show_footer);

    // Vertical: 1-line nav bar | 4-line form | table | footer
    let [nav_area, form_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    let theme = &state.theme;
    frame.render_widget(NavBar::new(state.view, theme), nav_area);

    let mut cursor = None;
    match state.view {
        SearchMode::Simple => {
            let focus = match state.focus {
                Focus::Search => SearchBarFocus::Input,
                Focus::Fields => SearchBarFocus::Selector,
                _ => SearchBarFocus::None,
            };
            let bar = SearchBar::new(&state.simple.input, state.simple.field, focus, theme);
            if focus == SearchBarFocus::Input {
                cursor = Some(bar.cursor_position(form_area));
            }
            frame.render_widget(bar, form_area);
        }
        SearchMode::Advanced => {
            let focused = match state.focus {
                Focus::Filter(f) => Some(f),
                _ => None,
            };
            let form = FilterForm::new(&state.advanced.inputs, focused, theme);
            cursor = form.cursor_position(form_area);
            frame.render_widget(form, form_area);
        }
    }

    frame.render_widget(
        ResultsTable::new(
            state.table(),
            &state.roster,
            state.focus == Focus::Table,
            theme,
        ),
        table_area,
    );

    if state.config.ui.show_footer {
        let year = chrono::Local::now().year();
        frame.render_widget(
            Paragraph::new(Line::from(format!("{APP_TITLE} © {year}")).centered())
                .style(theme.footer),
            footer_area,
        );
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    const ROSTER: &str = r#"[
        {"NIK": "1", "NAMA EOS": "Ari", "NO HP": "0812", "CC/AREA": "CC-BDG", "NAMA CC": "Telkom", "WITEL EOS-NEW": "BANDUNG"},
        {"NIK": "2", "NAMA EOS": "Budi", "NO HP": "0813", "CC/AREA": "CC-JKT", "NAMA CC": "Indosat", "WITEL EOS-NEW": "JAKARTA"},
        {"NIK": "3", "NAMA EOS": "Citra", "NO HP": "0811", "CC/AREA": "CC-BDG", "NAMA CC": "Telkom", "WITEL EOS-NEW": "BANDUNG BARAT"}
    ]"#;

    fn app() -> App {
        App::new(Roster::from_json_str(ROSTER).unwrap(), Config::defaults())
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    fn visible_ids(app: &App) -> Vec<String> {
        let s = app.state();
        s.table()
            .rows()
            .iter()
            .map(|&i| s.roster.records()[i].id.clone())
            .collect()
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| draw(f, app.state())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn starts_on_simple_view_with_full_roster() {
        let app = app();
        assert_eq!(app.state().view, SearchMode::Simple);
        assert_eq!(app.state().focus, Focus::Search);
        assert_eq!(visible_ids(&app), ["1", "2", "3"]);
    }

    #[test]
    fn simple_search_waits_for_enter() {
        let mut app = app();
        type_str(&mut app, "bud");
        assert_eq!(visible_ids(&app), ["1", "2", "3"]);
        app.handle(AppEvent::Enter);
        assert_eq!(visible_ids(&app), ["2"]);
    }

    #[test]
    fn simple_location_search_is_exact() {
        let mut app = app();
        app.handle(AppEvent::CycleField);
        app.handle(AppEvent::CycleField);
        assert_eq!(app.state().simple.field, Field::Location);
        type_str(&mut app, "bandung");
        app.handle(AppEvent::Enter);
        assert_eq!(visible_ids(&app), ["1"]);
    }

    #[test]
    fn field_selector_changes_field_without_searching() {
        let mut app = app();
        type_str(&mut app, "telkom");
        app.handle(AppEvent::Enter);
        assert!(visible_ids(&app).is_empty());

        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state().focus, Focus::Fields);
        app.handle(AppEvent::Nav(Direction::Right));
        assert_eq!(app.state().simple.field, Field::CompanyName);
        assert!(visible_ids(&app).is_empty());

        app.handle(AppEvent::Enter);
        assert_eq!(visible_ids(&app), ["1", "3"]);
    }

    #[test]
    fn advanced_filters_on_every_keystroke() {
        let mut app = app();
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::ShowView(SearchMode::Advanced));
        assert_eq!(app.state().focus, Focus::Filter(Field::Name));

        app.handle(AppEvent::Char('a'));
        assert_eq!(visible_ids(&app), ["1", "3"]);
        app.handle(AppEvent::Char('r'));
        assert_eq!(visible_ids(&app), ["1"]);
        app.handle(AppEvent::Backspace);
        assert_eq!(visible_ids(&app), ["1", "3"]);
    }

    #[test]
    fn advanced_criteria_are_conjunctive_and_reset_restores_all() {
        let mut app = app();
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::ShowView(SearchMode::Advanced));
        type_str(&mut app, "a");
        app.handle(AppEvent::FocusNext);
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state().focus, Focus::Filter(Field::Location));
        type_str(&mut app, "BANDUNG");
        assert_eq!(visible_ids(&app), ["1"]);

        app.handle(AppEvent::Reset);
        assert_eq!(visible_ids(&app), ["1", "2", "3"]);
        assert_eq!(app.state().advanced.criteria(), Criteria::new());
    }

    #[test]
    fn leaving_a_view_discards_its_criteria() {
        let mut app = app();
        app.handle(AppEvent::CycleField);
        type_str(&mut app, "telkom");
        app.handle(AppEvent::Enter);
        assert_eq!(visible_ids(&app), ["1", "3"]);

        app.handle(AppEvent::Escape);
        app.handle(AppEvent::NextView);
        assert_eq!(app.state().view, SearchMode::Advanced);
        assert_eq!(visible_ids(&app), ["1", "2", "3"]);
        type_str(&mut app, "bud");
        assert_eq!(visible_ids(&app), ["2"]);

        app.handle(AppEvent::Escape);
        app.handle(AppEvent::PrevView);
        assert_eq!(app.state().view, SearchMode::Simple);
        assert_eq!(app.state().simple.input.text(), "");
        assert_eq!(app.state().simple.field, Field::Name);
        assert_eq!(visible_ids(&app), ["1", "2", "3"]);
        assert_eq!(app.state().advanced.criteria(), Criteria::new());
        assert_eq!(app.state().advanced.table.rows(), &[0, 1, 2]);
    }

    #[test]
    fn reselecting_the_current_view_keeps_its_criteria() {
        let mut app = app();
        type_str(&mut app, "ari");
        app.handle(AppEvent::Enter);
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::ShowView(SearchMode::Simple));
        assert_eq!(app.state().simple.input.text(), "ari");
        assert_eq!(visible_ids(&app), ["1"]);
    }


    #[test]
    fn shortcuts_are_typed_while_editing() {
        let mut app = app();
        type_str(&mut app, "q2?");
        assert!(!app.state().quit);
        assert!(!app.state().show_help);
        assert_eq!(app.state().view, SearchMode::Simple);
        assert_eq!(app.state().simple.input.text(), "q2?");
    }

    #[test]
    fn help_popup_swallows_events() {
        let mut app = app();
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::Char('?'));
        assert!(app.state().show_help);
        app.handle(AppEvent::ShowView(SearchMode::Advanced));
        assert_eq!(app.state().view, SearchMode::Simple);
        app.handle(AppEvent::Escape);
        assert!(!app.state().show_help);
    }

    #[test]
    fn command_bar_runs_commands() {
        let mut app = app();
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::Char(':'));
        assert_eq!(app.state().focus, Focus::Command);
        type_str(&mut app, "field lokasi");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().simple.field, Field::Location);
        assert_eq!(app.state().focus, Focus::Table);

        app.handle(AppEvent::Char(':'));
        type_str(&mut app, "frobnicate");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().focus, Focus::Command);
        assert!(app.state().command_bar.error.is_some());
        app.handle(AppEvent::Escape);
        assert_eq!(app.state().focus, Focus::Table);
    }

    #[test]
    fn empty_result_renders_no_engineers_found() {
        let mut app = app();
        type_str(&mut app, "zzz");
        app.handle(AppEvent::Enter);
        let screen = render(&app);
        assert!(screen.contains(eos_core::NO_MATCHES_MESSAGE));
        assert!(screen.contains("Engineers (0 of 3)"));
    }

    #[test]
    fn render_shows_headers_and_rows() {
        let app = app();
        let screen = render(&app);
        for header in ["NIK", "NAMA EOS", "NO HP", "CC/AREA", "NAMA CC", "LOKASI SITE"] {
            assert!(screen.contains(header), "missing header {header}");
        }
        assert!(screen.contains("Budi"));
        assert!(screen.contains("Simple Search"));
        assert!(screen.contains("exact matches"));
    }

    #[test]
    fn render_advanced_view_shows_location_hint() {
        let mut app = app();
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::ShowView(SearchMode::Advanced));
        let screen = render(&app);
        assert!(screen.contains("Enter exact location"));
        assert!(screen.contains("Advanced Search"));
    }
}
