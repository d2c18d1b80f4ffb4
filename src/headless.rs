//! Headless mode — run one filter and print the result, no terminal UI.
//!
//! `--query` drives a simple-mode search on one field; `--name`, `--company`
//! and `--location` drive an advanced-mode search. With none of them the whole
//! roster is printed.

use eos_core::{export::OutputFormat, Criteria, Field, Roster, SearchMode};
use std::io::Write;

/// Search parameters collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub field: Option<Field>,
    pub query: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub format: OutputFormat,
}

impl HeadlessOptions {
    /// Which search mode these options describe.
    pub fn mode(&self) -> SearchMode {
        if self.query.is_some() {
            SearchMode::Simple
        } else {
            SearchMode::Advanced
        }
    }

    /// Build the filter criteria. `default_field` applies when `--query` is
    /// given without `--field`.
    pub fn criteria(&self, default_field: Field) -> Criteria {
        if let Some(query) = &self.query {
            return Criteria::single(self.field.unwrap_or(default_field), query.as_str());
        }
        let mut criteria = Criteria::new();
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::CompanyName, &self.company),
            (Field::Location, &self.location),
        ] {
            if let Some(v) = value {
                criteria.set(field, v.as_str());
            }
        }
        criteria
    }
}

/// Filter `roster` and write the matches to `out`. Returns the match count.
pub fn run<W: Write>(
    roster: &Roster,
    opts: &HeadlessOptions,
    default_field: Field,
    out: &mut W,
) -> anyhow::Result<usize> {
    let criteria = opts.criteria(default_field);
    let matches = roster.filter(&criteria);
    tracing::info!(
        mode = %opts.mode(),
        matched = matches.len(),
        total = matches.total(),
        "headless search"
    );
    eos_core::export::write(out, opts.format, matches.iter())?;
    out.flush()?;
    Ok(matches.len())
}
