//! Filter form — the advanced view's three side-by-side inputs.
//!
//! Every edit re-runs the filter; there is no submit step. `Ctrl+r` (or
//! `:reset`) clears all three inputs.

use crate::theme::Theme;
use crate::widgets::text_input::{TextField, TextInput};
use eos_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const LOCATION_HINT: &str = "Enter exact location (e.g., \"BANDUNG\")";
pub const RESET_HINT: &str = "Ctrl+r: reset";

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Search by engineer name...",
        Field::CompanyName => "Search by company name...",
        Field::Location => "Search by location...",
    }
}

/// Input state for the three advanced filters.
#[derive(Debug, Default)]
pub struct FilterInputs {
    pub name: TextInput,
    pub company: TextInput,
    pub location: TextInput,
}

impl FilterInputs {
    pub fn get(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::CompanyName => &self.company,
            Field::Location => &self.location,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Name => &mut self.name,
            Field::CompanyName => &mut self.company,
            Field::Location => &mut self.location,
        }
    }

    pub fn clear(&mut self) {
        for f in Field::ALL {
            self.get_mut(f).clear();
        }
    }
}

pub struct FilterForm<'a> {
    inputs: &'a FilterInputs,
    focused: Option<Field>,
    theme: &'a Theme,
}

impl<'a> FilterForm<'a> {
    pub fn new(inputs: &'a FilterInputs, focused: Option<Field>, theme: &'a Theme) -> Self {
        Self {
            inputs,
            focused,
            theme,
        }
    }

    /// Split `area` into one input rect per field, plus the hint row.
    fn layout(area: Rect) -> ([Rect; 3], Rect) {
        let [row, hint] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        let cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(row);
        (cols, hint)
    }

    fn field_index(field: Field) -> usize {
        Field::ALL.iter().position(|&f| f == field).unwrap_or(0)
    }

    fn text_field(&self, field: Field) -> TextField<'a> {
        let title = match field {
            Field::Name => " NAMA EOS ",
            Field::CompanyName => " NAMA CC ",
            Field::Location => " LOKASI SITE ",
        };
        TextField::new(
            self.inputs.get(field),
            title,
            self.focused == Some(field),
            self.theme,
        )
        .placeholder(placeholder(field))
    }

    /// Terminal cursor position inside the focused input, if any.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let field = self.focused?;
        let (cols, _) = Self::layout(area);
        Some(self.text_field(field).cursor_position(cols[Self::field_index(field)]))
    }
}

impl Widget for FilterForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, hint_area) = Self::layout(area);

        for field in Field::ALL {
            self.text_field(field).render(cols[Self::field_index(field)], buf);
        }

        // Location hint sits under the location input; reset hint on the left.
        let loc = cols[Self::field_index(Field::Location)];
        Paragraph::new(Line::from(Span::styled(RESET_HINT, self.theme.hint)))
            .render(Rect { width: loc.x.saturating_sub(hint_area.x), ..hint_area }, buf);
        Paragraph::new(Line::from(Span::styled(LOCATION_HINT, self.theme.hint)))
            .render(Rect { x: loc.x, width: loc.width, ..hint_area }, buf);
    }
}
