//! Ratatui widgets for the eos TUI.

pub mod command_bar;
pub mod filter_form;
pub mod help;
pub mod nav_bar;
pub mod results_table;
pub mod search_bar;
pub mod text_input;
