//! Source classifier — maps a record's origin tag to a badge class.
//!
//! The table is closed. `classify_source` is total: unknown tags render with
//! the default class. Typed callers that need to reject unknown tags use
//! `SourceTag::from_str`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DISPLAY_CLASS: &str = "default";
pub const DEFAULT_LABEL: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceTag {
    Manual,
    CsvImport,
    SpreadsheetImport,
    ThirdPartyImport,
    FileUpload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown source tag: '{0}'")]
pub struct UnknownSourceTag(pub String);

impl SourceTag {
    pub const ALL: [SourceTag; 5] = [
        SourceTag::Manual,
        SourceTag::CsvImport,
        SourceTag::SpreadsheetImport,
        SourceTag::ThirdPartyImport,
        SourceTag::FileUpload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Manual => "MANUAL",
            SourceTag::CsvImport => "CSV_IMPORT",
            SourceTag::SpreadsheetImport => "SPREADSHEET_IMPORT",
            SourceTag::ThirdPartyImport => "THIRD_PARTY_IMPORT",
            SourceTag::FileUpload => "FILE_UPLOAD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceTag::Manual => "Manual entry",
            SourceTag::CsvImport => "CSV import",
            SourceTag::SpreadsheetImport => "Spreadsheet import",
            SourceTag::ThirdPartyImport => "Third-party import",
            SourceTag::FileUpload => "File upload",
        }
    }

    pub fn display_class(&self) -> &'static str {
        match self {
            SourceTag::Manual => "neutral",
            SourceTag::CsvImport => "info",
            SourceTag::SpreadsheetImport => "success",
            SourceTag::ThirdPartyImport => "accent",
            SourceTag::FileUpload => "warning",
        }
    }
}

impl FromStr for SourceTag {
    type Err = UnknownSourceTag;

    /// Matches after trimming and ASCII upper-casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        SourceTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == key)
            .ok_or_else(|| UnknownSourceTag(s.to_string()))
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceClassification {
    pub display_class: String,
    pub label: String,
    /// `None` when the input tag is not in the table.
    pub tag: Option<SourceTag>,
}

pub fn classify_source(source: &str) -> SourceClassification {
    match source.parse::<SourceTag>() {
        Ok(tag) => SourceClassification {
            display_class: tag.display_class().to_string(),
            label: tag.label().to_string(),
            tag: Some(tag),
        },
        Err(_) => SourceClassification {
            display_class: DEFAULT_DISPLAY_CLASS.to_string(),
            label: DEFAULT_LABEL.to_string(),
            tag: None,
        },
    }
}
