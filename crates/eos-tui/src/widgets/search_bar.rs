//! Search bar — the simple view's form: one text input, a three-way field
//! selector, and the exact-match hint.
//!
//! The results only change when the user submits (`Enter` in the input or on
//! the selector). Typing alone never re-filters.

use crate::theme::Theme;
use crate::widgets::text_input::{TextField, TextInput};
use eos_core::Field;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub const SIMPLE_HINT: &str = "Note: Location searches require exact matches (e.g., \"BANDUNG\"). \
                               Name and company searches allow partial matches.";

/// Width of the field selector, borders included.
const SELECTOR_WIDTH: u16 = 40;

/// Which part of the search bar holds focus, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarFocus {
    None,
    Input,
    Selector,
}

pub struct SearchBar<'a> {
    input: &'a TextInput,
    field: Field,
    focus: SearchBarFocus,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a TextInput, field: Field, focus: SearchBarFocus, theme: &'a Theme) -> Self {
        Self {
            input,
            field,
            focus,
            theme,
        }
    }

    /// Split `area` into (input, selector, hint) rects.
    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let [row, hint] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        let [input, selector] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(SELECTOR_WIDTH)])
                .areas(row);
        (input, selector, hint)
    }

    /// Terminal cursor position inside the text input.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (input_area, _, _) = Self::layout(area);
        self.text_field().cursor_position(input_area)
    }

    fn text_field(&self) -> TextField<'a> {
        TextField::new(
            self.input,
            " Search ",
            self.focus == SearchBarFocus::Input,
            self.theme,
        )
        .placeholder("Search...  (Enter to search)")
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (input_area, selector_area, hint_area) = Self::layout(area);

        self.text_field().render(input_area, buf);

        let block = Block::bordered()
            .title(" Field (Ctrl+f) ")
            .border_style(self.theme.border(self.focus == SearchBarFocus::Selector));
        let mut spans = Vec::with_capacity(Field::ALL.len() * 2);
        for f in Field::ALL {
            let style = if f == self.field {
                self.theme.button_active
            } else {
                self.theme.button_inactive
            };
            spans.push(Span::styled(format!(" {} ", f.label()), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans))
            .block(block)
            .render(selector_area, buf);

        Paragraph::new(Line::from(Span::styled(SIMPLE_HINT, self.theme.hint))).render(hint_area, buf);
    }
}
