use std::fmt;

use serde::Serialize;

/// One flattened comment, uniform for top-level comments and replies.
///
/// Replies follow their parent in document order; `is_top_level` is the only
/// structural marker. Serialized field names stay in the provider's
/// `camelCase` so JSON exports keep the historical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub video_id: String,
    pub is_top_level: bool,
    pub comment_id: String,
    pub comment_date: String,
    pub comment_updated: String,
    pub comment_author: String,
    pub comment_author_channel: String,
    pub comment_text: String,
    pub comment_html: String,
    pub comment_liked: u64,
}

/// Failure of a fetch session, carrying the classified kind and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchFailure,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FetchFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            // Provider messages are surfaced verbatim.
            FetchFailure::Provider => write!(f, "{}", self.message),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The listing endpoint returned an explicit error payload.
    Provider,
    /// Transport-level failure (connect, TLS, timeout).
    Network,
    /// The response body was not the expected JSON shape.
    Decode,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Provider => write!(f, "provider error"),
            FetchFailure::Network => write!(f, "network error"),
            FetchFailure::Decode => write!(f, "decode error"),
        }
    }
}
