//! Test builders — ergonomic constructors for `Engineer` records and rosters.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use eos_core::{Engineer, Roster};

// ---------------------------------------------------------------------------
// EngineerBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Engineer`] test fixtures.
///
/// ```rust
/// let ari = EngineerBuilder::new("91150001")
///     .name("Ari Wibowo")
///     .company("PT Telkom Akses")
///     .location("BANDUNG")
///     .build();
/// ```
pub struct EngineerBuilder {
    inner: Engineer,
}

impl EngineerBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            inner: Engineer {
                phone: format!("0812{id}"),
                area_code: "CC-TEST".to_string(),
                id,
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.inner.company_name = company.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.inner.location = location.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = phone.into();
        self
    }

    pub fn build(self) -> Engineer {
        self.inner
    }
}

/// Shorthand for the common (id, name, company, location) case.
pub fn engineer(id: &str, name: &str, company: &str, location: &str) -> Engineer {
    EngineerBuilder::new(id)
        .name(name)
        .company(company)
        .location(location)
        .build()
}

/// Build a roster, panicking on duplicate ids.
pub fn roster_of(records: Vec<Engineer>) -> Roster {
    Roster::new(records).expect("test roster must have unique ids")
}
