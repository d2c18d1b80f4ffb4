//! eos — Engineer On Site Database
//!
//! Terminal lookup for the on-site engineer roster. The binary either opens
//! the ratatui interface ([`eos_tui`]) or, with `--headless`, runs a single
//! filter and prints the matches. This crate exposes the headless layer so
//! integration tests can drive it without a terminal.
//!
//! # Architecture
//!
//! ```text
//! eos-core (Roster, filter, config, export)
//!    │
//!    ├──► eos-tui   (interactive views)
//!    └──► headless  (one-shot filter to stdout)
//! ```

pub mod headless;

pub use eos_core::{Criteria, Engineer, Field, Roster, SearchMode};
pub use headless::HeadlessOptions;
