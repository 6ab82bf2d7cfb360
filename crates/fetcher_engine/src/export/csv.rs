use super::{Blob, ExportError, ExportFormat, ExportOptions};
use crate::timestamp::{format_offset_date, local_offset};
use crate::types::CommentRecord;

/// Default header labels for the CSV projection.
pub const DEFAULT_CSV_FIELDS: [&str; 5] = ["Comment ID", "Posted", "Author", "Text", "Likes"];

#[derive(Debug, Clone)]
pub struct CsvSettings {
    pub separator: String,
    pub terminator: String,
    /// `None` disables quoting entirely; cells containing the separator or
    /// terminator then fail with [`ExportError::InvalidCharacter`].
    pub quote: Option<char>,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            terminator: "\n".to_string(),
            quote: Some('"'),
        }
    }
}

/// Serialize the fixed projection (id, localized date, author, text, likes)
/// of every record. Fails with `EmptyInput` when there are no records.
pub fn dump_csv(
    records: &[CommentRecord],
    settings: &CsvSettings,
    options: &ExportOptions,
) -> Result<Blob, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let offset = options.timezone.unwrap_or_else(local_offset);
    let labels: Vec<String> = match &options.csv_fields {
        Some(fields) => fields.clone(),
        None => DEFAULT_CSV_FIELDS.iter().map(|s| s.to_string()).collect(),
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    if !labels.is_empty() {
        lines.push(join_row(labels.iter().map(String::as_str), settings)?);
    }
    for record in records {
        let liked = record.comment_liked.to_string();
        let posted = format_offset_date(&record.comment_date, offset);
        let cells = [
            record.comment_id.as_str(),
            posted.as_str(),
            record.comment_author.as_str(),
            record.comment_text.as_str(),
            liked.as_str(),
        ];
        lines.push(join_row(cells.into_iter(), settings)?);
    }

    Ok(Blob {
        name: format!("{}.csv", options.filename_stem),
        mime_type: ExportFormat::Csv.mime_type(),
        content: lines.join(&settings.terminator),
    })
}

fn join_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    settings: &CsvSettings,
) -> Result<String, ExportError> {
    let escaped = cells
        .map(|cell| escape_cell(cell, settings))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(escaped.join(&settings.separator))
}

/// Quote a cell iff it contains the separator, terminator, or quote
/// character, doubling every embedded quote. Without a quote character any
/// cell that would need one is an error rather than silent corruption.
fn escape_cell(cell: &str, settings: &CsvSettings) -> Result<String, ExportError> {
    let needs_quoting =
        cell.contains(&settings.separator) || cell.contains(&settings.terminator);

    match settings.quote {
        Some(quote) => {
            if needs_quoting || cell.contains(quote) {
                let doubled = cell.replace(quote, &format!("{quote}{quote}"));
                Ok(format!("{quote}{doubled}{quote}"))
            } else {
                Ok(cell.to_string())
            }
        }
        None if needs_quoting => Err(ExportError::InvalidCharacter(cell.to_string())),
        None => Ok(cell.to_string()),
    }
}
