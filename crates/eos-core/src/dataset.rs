//! Dataset — the immutable roster of [`Engineer`] records.
//!
//! The roster is loaded once at startup, either from the copy embedded in the
//! binary or from a JSON file given on the command line / in the config, and
//! is never mutated afterwards. Every view filters the same [`Roster`].

use crate::filter::{Criteria, Matches};
use crate::types::Engineer;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_DATASET: &str = include_str!("../data/engineers.json");

/// Failure to produce a roster. Filtering itself never fails.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a JSON array of engineer records: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate engineer id {0:?} in dataset")]
    DuplicateId(String),
}

/// Ordered, read-only sequence of engineer records, unique by id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Engineer>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(records: Vec<Engineer>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(DatasetError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The dataset shipped inside the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    pub fn from_json_str(src: &str) -> Result<Self, DatasetError> {
        let records: Vec<Engineer> = serde_json::from_str(src)?;
        Self::new(records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json_str(&src)?;
        tracing::info!(path = %path.display(), records = roster.len(), "dataset loaded");
        Ok(roster)
    }

    /// Load from `path` when given, otherwise fall back to the bundled copy.
    pub fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(p) => Self::from_path(p),
            None => {
                let roster = Self::bundled()?;
                tracing::info!(records = roster.len(), "bundled dataset loaded");
                Ok(roster)
            }
        }
    }

    pub fn records(&self) -> &[Engineer] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Engineer> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Run the record filter over the whole roster.
    pub fn filter(&self, criteria: &Criteria) -> Matches<'_> {
        let matches = Matches::new(&self.records, criteria);
        tracing::debug!(
            matched = matches.len(),
            total = self.records.len(),
            ?criteria,
            "filter applied"
        );
        matches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
