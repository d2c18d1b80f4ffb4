//! eos-core — Engineer On Site Database core library.
//!
//! Everything that does not touch the terminal lives here: the [`Engineer`]
//! record, the immutable [`Roster`] it is loaded into, the record filter both
//! search views share, configuration, and the headless output writers.
//!
//! # Data flow
//!
//! ```text
//! dataset JSON ──► Roster ──► filter(Criteria) ──► Matches ──► TUI table
//!                                                     │
//!                                                     └──► export (headless)
//! ```

pub mod config;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod types;

pub use dataset::{DatasetError, Roster};
pub use filter::{filter_records, Criteria, Field, Matches, SearchMode, NO_MATCHES_MESSAGE};
pub use types::{Column, Engineer};
