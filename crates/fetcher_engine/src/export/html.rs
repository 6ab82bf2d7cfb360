use chrono::FixedOffset;

use super::{Blob, ExportFormat, ExportOptions};
use crate::timestamp::{format_display_date, format_offset_date, local_offset};
use crate::types::CommentRecord;
use crate::video_id::WEB_ORIGIN;

const DOCUMENT_HEAD: &str = "<!DOCTYPE html>\n\
    <meta charset=\"UTF-8\">\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n";

/// Render a minimal standalone document with one nested blockquote per
/// comment. Replies get a second nesting level; their position under the
/// parent relies on the document order of `records`. Empty input yields a
/// valid document with zero blocks.
pub fn dump_html(records: &[CommentRecord], options: &ExportOptions) -> Blob {
    let offset = options.timezone.unwrap_or_else(local_offset);
    let blocks: Vec<String> = records
        .iter()
        .map(|record| render_block(record, offset))
        .collect();

    Blob {
        name: format!("{}.html", options.filename_stem),
        mime_type: ExportFormat::Html.mime_type(),
        content: format!("{DOCUMENT_HEAD}{}", blocks.join("\n\n")),
    }
}

fn render_block(record: &CommentRecord, offset: FixedOffset) -> String {
    let (open, close) = if record.is_top_level {
        ("<blockquote>", "</blockquote>")
    } else {
        ("<blockquote><blockquote>", "</blockquote></blockquote>")
    };

    let author_href = format!(
        "{WEB_ORIGIN}/{}",
        urlencoding::encode(&record.comment_author)
    );
    let permalink = format!(
        "{WEB_ORIGIN}/watch?v={}&lc={}",
        record.video_id, record.comment_id
    );

    let edited = if record.comment_updated != record.comment_date {
        format!(
            " <time datetime=\"{}\" title=\"{}\">(edited)</time>",
            html_escape::encode_double_quoted_attribute(&format_offset_date(
                &record.comment_updated,
                offset
            )),
            html_escape::encode_double_quoted_attribute(&format_display_date(
                &record.comment_updated,
                offset
            )),
        )
    } else {
        String::new()
    };

    // The comment body is provider-rendered HTML and passes through
    // untouched; everything else templated here is entity-escaped.
    format!(
        "{open}\n  \
        <header>\n    \
        <a href=\"{href}\" target=\"_blank\" rel=\"external\"><b>{author}</b></a>\n    \
        <a href=\"{permalink}\" target=\"_blank\" rel=\"external\"><time datetime=\"{datetime}\">{display}</time>{edited}</a>\n    \
        <span>\u{1F44D}{likes}</span>\n  \
        </header>\n  \
        <div>{body}</div>\n\
        {close}",
        href = html_escape::encode_double_quoted_attribute(&author_href),
        author = html_escape::encode_text(&record.comment_author),
        permalink = html_escape::encode_double_quoted_attribute(&permalink),
        datetime = html_escape::encode_double_quoted_attribute(&format_offset_date(
            &record.comment_date,
            offset
        )),
        display = html_escape::encode_text(&format_display_date(&record.comment_date, offset)),
        likes = record.comment_liked,
        body = record.comment_html,
    )
}
