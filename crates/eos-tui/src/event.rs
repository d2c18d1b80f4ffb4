//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab` / `Shift+Tab`     | `FocusNext` / `FocusPrev`  |
//! | `/`                     | `SearchFocus`              |
//! | `1` / `2`               | `ShowView(Simple/Advanced)`|
//! | `]` / `[`               | `NextView` / `PrevView`    |
//! | `Ctrl+f`                | `CycleField`               |
//! | `Ctrl+r`                | `Reset`                    |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `g` / `G`               | `ScrollToTop` / `ScrollToBottom` |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | `Home` / `End`          | `Home` / `End`             |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text input (search box, filter field, command bar) is focused, the
//! event loop calls [`to_app_event_insert`] instead. In insert mode:
//! - hjkl, q, g, G, digits and brackets produce `Char` events
//! - Arrow keys still produce `Nav` for cursor movement
//! - Only `Ctrl+c`, `Ctrl+f`, `Ctrl+r`, `Escape`, `Enter`, `Tab`,
//!   `Shift+Tab` and `Backspace` keep their special bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use eos_core::SearchMode;

/// Cardinal direction for list navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The App shell is responsible for routing events to the
/// appropriate widget based on the current view and focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane of the current view.
    FocusNext,
    /// Move keyboard focus to the previous pane of the current view.
    FocusPrev,
    /// Transfer focus to the first text input of the current view.
    SearchFocus,
    /// Switch directly to a view.
    ShowView(SearchMode),
    /// Switch to the next view in the nav bar.
    NextView,
    /// Switch to the previous view in the nav bar.
    PrevView,
    /// Select the next field in the simple view's field selector.
    CycleField,
    /// Clear every advanced filter.
    Reset,
    /// Scroll the results table up one page.
    ScrollUp,
    /// Scroll the results table down one page.
    ScrollDown,
    /// Jump to the first result row.
    ScrollToTop,
    /// Jump to the last result row.
    ScrollToBottom,
    /// Navigate the table or move the text cursor.
    Nav(Direction),
    /// Move the text cursor to the start of the input.
    Home,
    /// Move the text cursor to the end of the input.
    End,
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Submit the active input.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (text-input focus, help popup, command bar).
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input ("insert") mode.
///
/// In insert mode, single-letter shortcuts are forwarded as
/// [`AppEvent::Char`] so the user can type freely. Arrow keys still produce
/// [`AppEvent::Nav`] so `←`/`→` move the text cursor.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

/// Bindings shared by both modes. Checked first.
fn map_common(key: &KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('f') if key.modifiers == Mod::CONTROL => Some(AppEvent::CycleField),
        Char('r') if key.modifiers == Mod::CONTROL => Some(AppEvent::Reset),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        // Some terminals report Shift+Tab as BackTab with SHIFT set, some without
        BackTab => Some(AppEvent::FocusPrev),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Home => Some(AppEvent::Home),
        End => Some(AppEvent::End),
        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(ev) = map_common(&key) {
        return Some(ev);
    }

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::SearchFocus),

        Char('1') if key.modifiers == Mod::NONE => Some(AppEvent::ShowView(SearchMode::Simple)),
        Char('2') if key.modifiers == Mod::NONE => {
            Some(AppEvent::ShowView(SearchMode::Advanced))
        }
        Char(']') if key.modifiers == Mod::NONE => Some(AppEvent::NextView),
        Char('[') if key.modifiers == Mod::NONE => Some(AppEvent::PrevView),

        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::ScrollToTop),
        // Uppercase, so SHIFT may or may not be set depending on the terminal
        Char('G') => Some(AppEvent::ScrollToBottom),

        Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        _ => None,
    }
}

/// Key mapping for text-input / insert mode.
fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(ev) = map_common(&key) {
        return Some(ev);
    }

    match key.code {
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
