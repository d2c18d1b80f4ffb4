//! Results table widget — the six-column engineer table below each search form.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to first / last row |
//!
//! The table holds indices into the roster, never copies of records. An empty
//! result renders a single [`NO_MATCHES_MESSAGE`] row.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use eos_core::{Column, Roster, NO_MATCHES_MESSAGE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{
        Block, Cell as TableCell, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Table, TableState, Widget,
    },
};

const DEFAULT_PAGE: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResultsTableState {
    /// Roster indices of the rows, in roster order.
    rows: Vec<usize>,
    /// Position of the highlighted row within `rows`.
    pub cursor: usize,
    /// First visible row, carried between frames so scrolling is stable.
    offset: Cell<usize>,
    /// Body height from the last render, used as the page size.
    last_height: Cell<usize>,
}

impl ResultsTableState {
    pub fn new(rows: Vec<usize>) -> Self {
        Self {
            rows,
            cursor: 0,
            offset: Cell::new(0),
            last_height: Cell::new(DEFAULT_PAGE),
        }
    }

    /// Replace the rows with a fresh filter result and return to the top.
    pub fn set_rows(&mut self, rows: Vec<usize>) {
        self.rows = rows;
        self.cursor = 0;
        self.offset.set(0);
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Roster index of the highlighted row.
    pub fn selected(&self) -> Option<usize> {
        self.rows.get(self.cursor).copied()
    }

    fn page(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.rows.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor.saturating_sub(self.page()),
            AppEvent::ScrollDown => (self.cursor + self.page()).min(last),
            AppEvent::ScrollToTop => 0,
            AppEvent::ScrollToBottom => last,
            _ => return,
        };
        tracing::debug!(cursor = self.cursor, total, "table: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsTable<'a> {
    state: &'a ResultsTableState,
    roster: &'a Roster,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultsTable<'a> {
    pub fn new(
        state: &'a ResultsTableState,
        roster: &'a Roster,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            roster,
            focused,
            theme,
        }
    }
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::Id => Constraint::Length(10),
        Column::Name | Column::CompanyName => Constraint::Fill(2),
        Column::Phone => Constraint::Length(15),
        Column::AreaCode => Constraint::Length(9),
        Column::Location => Constraint::Fill(1),
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Engineers ({} of {}) ",
            self.state.len(),
            self.roster.len()
        );
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let header = Row::new(Column::ALL.iter().map(|c| TableCell::from(c.header())))
            .style(self.theme.table_header);
        let widths = Column::ALL.map(column_width);

        if self.state.is_empty() {
            Widget::render(
                Table::new(Vec::<Row>::new(), widths).header(header),
                inner,
                buf,
            );
            // Body starts one row below the header.
            let body = Rect {
                y: inner.y.saturating_add(1),
                height: inner.height.saturating_sub(1),
                ..inner
            };
            Paragraph::new(Line::from(NO_MATCHES_MESSAGE).centered())
                .style(self.theme.table_empty)
                .render(body, buf);
            return;
        }

        let records = self.roster.records();
        let rows: Vec<Row> = self
            .state
            .rows
            .iter()
            .filter_map(|&i| records.get(i))
            .map(|r| {
                Row::new(Column::ALL.iter().map(|&c| TableCell::from(r.column(c))))
                    .style(self.theme.table_row)
            })
            .collect();

        // Leave a 1-column strip for the scrollbar, inside the borders.
        let table_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let body_height = inner.height.saturating_sub(1) as usize;
        self.state.last_height.set(body_height);

        let mut table_state = TableState::default()
            .with_offset(self.state.offset.get())
            .with_selected(Some(self.state.cursor));
        let mut table = Table::new(rows, widths).header(header);
        if self.focused {
            table = table.row_highlight_style(self.theme.table_highlight);
        }
        StatefulWidget::render(table, table_area, buf, &mut table_state);
        self.state.offset.set(table_state.offset());

        let mut sb_state = ScrollbarState::new(self.state.len())
            .position(self.state.cursor)
            .viewport_content_length(body_height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
