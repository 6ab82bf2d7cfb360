//! Raw wire model of the comment-thread listing response.
//!
//! Knowledge of the provider's nested shape stays in this module; the rest
//! of the crate only sees flat [`CommentRecord`]s produced by
//! [`flatten_thread`].

use serde::Deserialize;

use crate::types::CommentRecord;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadListResponse {
    pub error: Option<ApiError>,
    pub items: Option<Vec<ThreadItem>>,
    pub next_page_token: Option<String>,
}

/// Error payload the listing endpoint embeds in the response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThreadItem {
    pub id: String,
    pub snippet: ThreadSnippet,
    pub replies: Option<ReplyList>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyList {
    pub comments: Vec<ReplyItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyItem {
    pub id: String,
    pub snippet: CommentSnippet,
}

/// Shared snippet shape of top-level comments and replies.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub video_id: String,
    pub author_display_name: String,
    pub author_channel_id: AuthorChannelId,
    pub published_at: String,
    pub updated_at: String,
    pub text_original: String,
    pub text_display: String,
    pub like_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorChannelId {
    pub value: String,
}

/// Flatten one raw thread item into document order: the top-level comment
/// first, then each of its replies as listed by the provider.
pub fn flatten_thread(item: &ThreadItem) -> Vec<CommentRecord> {
    let reply_count = item.replies.as_ref().map_or(0, |r| r.comments.len());
    let mut records = Vec::with_capacity(1 + reply_count);

    records.push(record_from(
        &item.snippet.top_level_comment.snippet,
        &item.id,
        true,
    ));

    if let Some(replies) = &item.replies {
        for reply in &replies.comments {
            records.push(record_from(&reply.snippet, &reply.id, false));
        }
    }

    records
}

fn record_from(snippet: &CommentSnippet, comment_id: &str, is_top_level: bool) -> CommentRecord {
    CommentRecord {
        video_id: snippet.video_id.clone(),
        is_top_level,
        comment_id: comment_id.to_string(),
        comment_date: snippet.published_at.clone(),
        comment_updated: snippet.updated_at.clone(),
        comment_author: snippet.author_display_name.clone(),
        comment_author_channel: snippet.author_channel_id.value.clone(),
        comment_text: snippet.text_original.clone(),
        comment_html: snippet.text_display.clone(),
        comment_liked: snippet.like_count,
    }
}
