//! Record filter — the matching rules shared by both search views.
//!
//! [`matching_indices`] is the one pure function every caller goes through:
//! [`filter_records`] maps its indices back to records, and [`Matches`] (what
//! `Roster::filter` returns) keeps them as they are. The rule itself lives in
//! [`Matcher`]. The simple view builds a [`Criteria`] with a single active field and runs
//! it on submit; the advanced view keeps all three fields populated and runs
//! it after every edit. Neither view carries its own matching logic.
//!
//! # Matching rules
//!
//! | Field | Mode | Rule |
//! |-------|------|------|
//! | `name` | substring | lower-cased value contains the trimmed, lower-cased query |
//! | `companyName` | substring | as above |
//! | `location` | exact | trimmed, lower-cased value equals the trimmed, lower-cased query |
//!
//! An empty or whitespace-only query puts no constraint on its field. A
//! record is kept only when every constrained field matches.

use crate::types::Engineer;
use serde::Deserialize;
use thiserror::Error;

/// Message shown in place of the table body when nothing matched.
pub const NO_MATCHES_MESSAGE: &str = "No engineers found";

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A filterable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Field {
    Name,
    CompanyName,
    Location,
}

/// How a field's query is compared against record values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    Exact,
}

static FIELD_ALIASES: phf::Map<&'static str, Field> = phf::phf_map! {
    "name" => Field::Name,
    "nama" => Field::Name,
    "nama eos" => Field::Name,
    "eos" => Field::Name,
    "company" => Field::CompanyName,
    "companyname" => Field::CompanyName,
    "company_name" => Field::CompanyName,
    "company-name" => Field::CompanyName,
    "cc" => Field::CompanyName,
    "nama cc" => Field::CompanyName,
    "location" => Field::Location,
    "lokasi" => Field::Location,
    "lokasi site" => Field::Location,
    "site" => Field::Location,
    "witel" => Field::Location,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field {0:?} (expected name, company or location)")]
pub struct FieldParseError(pub String);

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::CompanyName, Field::Location];

    pub fn match_mode(self) -> MatchMode {
        match self {
            Field::Location => MatchMode::Exact,
            Field::Name | Field::CompanyName => MatchMode::Substring,
        }
    }

    /// The record value this field reads.
    pub fn value(self, record: &Engineer) -> &str {
        match self {
            Field::Name => &record.name,
            Field::CompanyName => &record.company_name,
            Field::Location => &record.location,
        }
    }

    /// Label used on selector buttons and input titles.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "NAMA EOS",
            Field::CompanyName => "NAMA CC",
            Field::Location => "LOKASI SITE",
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::CompanyName,
            Field::CompanyName => Field::Location,
            Field::Location => Field::Name,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::Location,
            Field::CompanyName => Field::Name,
            Field::Location => Field::CompanyName,
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::CompanyName => 1,
            Field::Location => 2,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::CompanyName => write!(f, "companyName"),
            Field::Location => write!(f, "location"),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FIELD_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

impl TryFrom<String> for Field {
    type Error = FieldParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Search mode
// ---------------------------------------------------------------------------

/// The two ways the filter is driven from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// One active field, re-run on an explicit submit.
    #[default]
    Simple,
    /// All fields active at once, re-run on every edit.
    Advanced,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Simple => write!(f, "simple"),
            SearchMode::Advanced => write!(f, "advanced"),
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// One query string per [`Field`]. Empty means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    queries: [String; 3],
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria constraining a single field, as the simple view builds them.
    pub fn single(field: Field, query: impl Into<String>) -> Self {
        Self::new().with(field, query)
    }

    pub fn with(mut self, field: Field, query: impl Into<String>) -> Self {
        self.set(field, query);
        self
    }

    pub fn set(&mut self, field: Field, query: impl Into<String>) {
        self.queries[field.index()] = query.into();
    }

    pub fn get(&self, field: Field) -> &str {
        &self.queries[field.index()]
    }

    /// Drop every query. Filtering afterwards yields the full input.
    pub fn clear(&mut self) {
        for q in &mut self.queries {
            q.clear();
        }
    }

    /// True when no field carries a non-blank query.
    pub fn is_unconstrained(&self) -> bool {
        self.queries.iter().all(|q| q.trim().is_empty())
    }

    /// Resolve the criteria into per-field needles, ready to test records.
    pub fn matcher(&self) -> Matcher {
        let needles = Field::ALL
            .iter()
            .filter_map(|&field| {
                let needle = self.get(field).trim().to_lowercase();
                (!needle.is_empty()).then_some((field, needle))
            })
            .collect();
        Matcher { needles }
    }
}

/// Criteria with queries already trimmed and case-folded.
#[derive(Debug, Clone)]
pub struct Matcher {
    needles: Vec<(Field, String)>,
}

impl Matcher {
    pub fn matches(&self, record: &Engineer) -> bool {
        self.needles.iter().all(|(field, needle)| {
            let value = field.value(record);
            match field.match_mode() {
                MatchMode::Exact => value.trim().to_lowercase() == *needle,
                MatchMode::Substring => value.to_lowercase().contains(needle.as_str()),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the records matching every non-empty criterion, in input order.
pub fn filter_records<'a>(records: &'a [Engineer], criteria: &Criteria) -> Vec<&'a Engineer> {
    matching_indices(records, criteria)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Indices into `records` of the matching entries, ascending.
pub fn matching_indices(records: &[Engineer], criteria: &Criteria) -> Vec<usize> {
    let matcher = criteria.matcher();
    records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| matcher.matches(r).then_some(i))
        .collect()
}

/// The result of one filter run over a roster.
///
/// An empty `Matches` is a normal outcome; callers render
/// [`NO_MATCHES_MESSAGE`] instead of a bare table.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    records: &'a [Engineer],
    indices: Vec<usize>,
}

impl<'a> Matches<'a> {
    pub fn new(records: &'a [Engineer], criteria: &Criteria) -> Self {
        let indices = matching_indices(records, criteria);
        Self { records, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Size of the roster the filter ran over.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Engineer> + '_ {
        let records = self.records;
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
