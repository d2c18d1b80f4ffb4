//! eos TUI — ratatui application shell for the engineer roster.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use eos_core::{config::Config, Roster};

/// Start the TUI over `roster` and block until the user quits.
pub fn run(roster: Roster, config: Config) -> anyhow::Result<()> {
    tracing::info!(
        records = roster.len(),
        view = %config.ui.start_view,
        theme = %config.ui.theme,
        "starting tui"
    );
    App::new(roster, config).run()
}
