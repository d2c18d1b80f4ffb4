//! Core types for eos-core — Engineer On Site Database.
//!
//! This module defines the single entity of the system, the [`Engineer`]
//! record, and the [`Column`] enumeration used by every table rendering.

use serde::{Deserialize, Deserializer, Serialize};

/// One engineer's profile entry in the roster.
///
/// Serde keys follow the column naming of the source spreadsheet the roster
/// is exported from. Every field decodes leniently: a missing key or `null`
/// becomes an empty string, and a number or boolean is kept as its text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Engineer {
    /// Unique identifier (employee number). Stable key for list rendering.
    #[serde(rename = "NIK", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "NAMA EOS", default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Contact number, displayed verbatim and never parsed.
    #[serde(rename = "NO HP", default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(rename = "CC/AREA", default, deserialize_with = "lenient_string")]
    pub area_code: String,
    #[serde(rename = "NAMA CC", default, deserialize_with = "lenient_string")]
    pub company_name: String,
    /// Site/region label, uppercase place names in practice.
    #[serde(rename = "WITEL EOS-NEW", default, deserialize_with = "lenient_string")]
    pub location: String,
}

impl Engineer {
    /// Text shown for this record in the given table column.
    pub fn column(&self, column: Column) -> &str {
        match column {
            Column::Id => &self.id,
            Column::Name => &self.name,
            Column::Phone => &self.phone,
            Column::AreaCode => &self.area_code,
            Column::CompanyName => &self.company_name,
            Column::Location => &self.location,
        }
    }
}

/// The six displayed columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Phone,
    AreaCode,
    CompanyName,
    Location,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Name,
        Column::Phone,
        Column::AreaCode,
        Column::CompanyName,
        Column::Location,
    ];

    /// Header label shown above the column.
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "NIK",
            Column::Name => "NAMA EOS",
            Column::Phone => "NO HP",
            Column::AreaCode => "CC/AREA",
            Column::CompanyName => "NAMA CC",
            Column::Location => "LOKASI SITE",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
