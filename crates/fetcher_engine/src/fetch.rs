use std::str::FromStr;

use async_trait::async_trait;

use crate::types::{FetchError, FetchFailure};
use crate::wire::ThreadListResponse;

/// Comment-thread listing endpoint of the YouTube Data API v3.
pub const API_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// Provider maximum for `maxResults` on a single listing request.
pub const PAGE_SIZE_CEILING: u64 = 100;

/// Listing order for top-level comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentOrder {
    #[default]
    Time,
    Relevance,
}

impl CommentOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentOrder::Time => "time",
            CommentOrder::Relevance => "relevance",
        }
    }
}

impl FromStr for CommentOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(CommentOrder::Time),
            "relevance" => Ok(CommentOrder::Relevance),
            other => Err(format!("unknown comment order: {other}")),
        }
    }
}

/// Per-session fetch configuration.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_key: String,
    pub order: CommentOrder,
    /// Upper bound on `maxResults` per request; clamped further by the
    /// remaining result budget.
    pub page_size_ceiling: u64,
    /// Cap on raw top-level comments fetched; `None` is unbounded.
    pub result_cap: Option<u64>,
}

impl FetchSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            order: CommentOrder::default(),
            page_size_ceiling: PAGE_SIZE_CEILING,
            result_cap: None,
        }
    }
}

/// Query parameters for one page of the comment-thread listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub video_id: String,
    pub max_results: u64,
    pub order: CommentOrder,
    /// Opaque pagination cursor; empty on the first page.
    pub page_token: String,
    pub api_key: String,
}

/// Transport seam for the comment-thread listing endpoint.
#[async_trait]
pub trait CommentApi: Send + Sync {
    async fn list_page(&self, query: &PageQuery) -> Result<ThreadListResponse, FetchError>;
}

/// reqwest-backed [`CommentApi`] against the real listing endpoint.
#[derive(Debug, Clone)]
pub struct YouTubeCommentApi {
    endpoint: String,
    client: reqwest::Client,
}

impl YouTubeCommentApi {
    pub fn new() -> Self {
        Self::with_endpoint(API_ENDPOINT)
    }

    /// Endpoint override, for tests against a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for YouTubeCommentApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentApi for YouTubeCommentApi {
    async fn list_page(&self, query: &PageQuery) -> Result<ThreadListResponse, FetchError> {
        let max_results = query.max_results.to_string();
        let params = [
            ("part", "snippet,replies"),
            ("videoId", query.video_id.as_str()),
            ("maxResults", max_results.as_str()),
            ("order", query.order.as_str()),
            ("pageToken", query.page_token.as_str()),
            ("key", query.api_key.as_str()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|err| FetchError::new(FetchFailure::Network, err.to_string()))?;

        // The provider delivers its error payload with a non-2xx status, so
        // the body is decoded before the status is considered.
        response
            .json::<ThreadListResponse>()
            .await
            .map_err(|err| FetchError::new(FetchFailure::Decode, err.to_string()))
    }
}
