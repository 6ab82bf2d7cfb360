use super::{Blob, ExportFormat, ExportOptions};
use crate::types::CommentRecord;

/// Pretty-printed (2-space indent) serialization of the full record
/// sequence, no field filtering. Empty input yields `[]`.
pub fn dump_json(records: &[CommentRecord], options: &ExportOptions) -> Blob {
    let content =
        serde_json::to_string_pretty(records).expect("comment records serialize to JSON");

    Blob {
        name: format!("{}.json", options.filename_stem),
        mime_type: ExportFormat::Json.mime_type(),
        content,
    }
}
