mod csv;
mod html;
mod json;

use std::str::FromStr;

use chrono::FixedOffset;
use thiserror::Error;

pub use csv::{dump_csv, CsvSettings, DEFAULT_CSV_FIELDS};
pub use html::dump_html;
pub use json::dump_json;

use crate::types::CommentRecord;

/// Default filename stem for export blobs.
pub const DEFAULT_FILENAME_STEM: &str = "youtube_comments";

/// Named in-memory export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub name: String,
    pub mime_type: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Html => "text/html",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub filename_stem: String,
    /// CSV header labels. `None` keeps the default projection labels; an
    /// explicitly empty vector omits the header row.
    pub csv_fields: Option<Vec<String>>,
    /// Reference offset for rendered timestamps; `None` uses the local zone.
    /// Injected in tests so rendered output stays deterministic.
    pub timezone: Option<FixedOffset>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename_stem: DEFAULT_FILENAME_STEM.to_string(),
            csv_fields: None,
            timezone: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("cannot export CSV from an empty record set")]
    EmptyInput,
    #[error("cell contains a separator or terminator and quoting is disabled: {0:?}")]
    InvalidCharacter(String),
}

/// Dispatch to the formatter for `format`, producing a named blob.
pub fn dump(
    records: &[CommentRecord],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Blob, ExportError> {
    match format {
        ExportFormat::Csv => dump_csv(records, &CsvSettings::default(), options),
        ExportFormat::Html => Ok(dump_html(records, options)),
        ExportFormat::Json => Ok(dump_json(records, options)),
    }
}
