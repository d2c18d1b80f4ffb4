//! Nav bar widget — the 1-line strip at the top of the screen with the app
//! title and one tab per search view.

use crate::theme::Theme;
use eos_core::SearchMode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

pub const APP_TITLE: &str = "Engineer On Site Database";

/// Views in nav-bar order.
pub const VIEWS: [SearchMode; 2] = [SearchMode::Simple, SearchMode::Advanced];

pub fn view_label(view: SearchMode) -> &'static str {
    match view {
        SearchMode::Simple => "Simple Search",
        SearchMode::Advanced => "Advanced Search",
    }
}

/// Renders the title, the view tabs, and right-aligned key hints
/// (`q:quit  ?:help`).
pub struct NavBar<'a> {
    active: SearchMode,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(active: SearchMode, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.nav_bar);

        let title = format!(" {APP_TITLE} ");
        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(title.len() as u16 + 1), Constraint::Fill(1)])
                .areas(area);

        buf.set_string(title_area.x, title_area.y, &title, self.theme.nav_bar);

        let labels: Vec<Line> = VIEWS
            .iter()
            .enumerate()
            .map(|(i, &v)| Line::from(format!(" {}:{} ", i + 1, view_label(v))))
            .collect();
        let selected = VIEWS.iter().position(|&v| v == self.active).unwrap_or(0);

        Tabs::new(labels)
            .select(selected)
            .style(self.theme.nav_bar)
            .highlight_style(self.theme.nav_active)
            .divider("")
            .render(tabs_area, buf);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            self.theme.nav_bar.patch(Style::default().add_modifier(Modifier::DIM)),
        );
    }
}
