// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use eos_core::{Field, SearchMode};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Switch to a search view
    View(SearchMode),
    // Pick the simple view's search field
    Field(Field),
    // Clear the advanced filters
    Reset,
    // Run the simple search with the current input
    Search,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "simple" => Ok(Command::View(SearchMode::Simple)),
            "advanced" | "adv" => Ok(Command::View(SearchMode::Advanced)),
            "reset" => Ok(Command::Reset),
            "search" => Ok(Command::Search),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "field" => {
                if rest.is_empty() {
                    return Err("usage: field <name|company|location>".to_string());
                }
                rest.parse::<Field>()
                    .map(Command::Field)
                    .map_err(|e| e.to_string())
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::View(view) => {
            s.show_view(view);
        }
        Command::Field(field) => {
            s.simple.field = field;
        }
        Command::Reset => {
            s.advanced.reset(&s.roster);
        }
        Command::Search => {
            s.simple.submit(&s.roster);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_silent_close() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("   "), Err(String::new()));
    }

    #[test]
    fn parses_simple_words() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit!"), Ok(Command::Quit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse(" reset "), Ok(Command::Reset));
        assert_eq!(Command::parse("search"), Ok(Command::Search));
    }

    #[test]
    fn parses_views() {
        assert_eq!(
            Command::parse("simple"),
            Ok(Command::View(SearchMode::Simple))
        );
        assert_eq!(
            Command::parse("adv"),
            Ok(Command::View(SearchMode::Advanced))
        );
    }

    #[test]
    fn parses_field_aliases() {
        assert_eq!(
            Command::parse("field company"),
            Ok(Command::Field(Field::CompanyName))
        );
        assert_eq!(
            Command::parse("field   LOKASI"),
            Ok(Command::Field(Field::Location))
        );
    }

    #[test]
    fn field_requires_a_known_argument() {
        assert!(Command::parse("field").unwrap_err().starts_with("usage"));
        assert!(Command::parse("field phone").unwrap_err().contains("phone"));
    }

    #[test]
    fn theme_requires_a_name() {
        assert!(Command::parse("theme").is_err());
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(
            Command::parse("tail"),
            Err("unknown command: tail".to_string())
        );
    }
}
