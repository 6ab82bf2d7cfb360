use std::sync::Arc;

use log::{debug, info};

use crate::fetch::{CommentApi, FetchSettings, PageQuery, YouTubeCommentApi};
use crate::types::{CommentRecord, FetchError, FetchFailure};
use crate::wire::flatten_thread;

/// Pull-based pagination over the comment-thread listing for one video.
///
/// Each `next_page` call issues at most one request and returns the flattened
/// batch for that page; `None` means the session is finished, whether by
/// exhaustion, cap, or cancellation. Sessions are one-shot: any terminal
/// outcome is sticky, fetch again by constructing a new session. A session
/// owns its cursor and counter exclusively, so concurrent fetches just use
/// independent sessions.
pub struct FetchSession {
    api: Arc<dyn CommentApi>,
    settings: FetchSettings,
    video_id: String,
    fetched: u64,
    page_token: String,
    done: bool,
}

impl FetchSession {
    pub fn new(video_id: impl Into<String>, settings: FetchSettings) -> Self {
        Self::with_api(video_id, settings, Arc::new(YouTubeCommentApi::new()))
    }

    pub fn with_api(
        video_id: impl Into<String>,
        settings: FetchSettings,
        api: Arc<dyn CommentApi>,
    ) -> Self {
        Self {
            api,
            settings,
            video_id: video_id.into(),
            fetched: 0,
            page_token: String::new(),
            done: false,
        }
    }

    /// Raw top-level comments consumed so far (replies excluded).
    pub fn fetched(&self) -> u64 {
        self.fetched
    }

    /// Stop the session before the next request is issued. Batches already
    /// returned stay valid; the following `next_page` returns `None` without
    /// touching the network.
    pub fn cancel(&mut self) {
        if !self.done {
            info!(
                "fetch session for {} cancelled after {} top-level comments",
                self.video_id, self.fetched
            );
        }
        self.done = true;
    }

    /// Fetch and flatten the next page of comment threads.
    pub async fn next_page(&mut self) -> Result<Option<Vec<CommentRecord>>, FetchError> {
        if self.done {
            return Ok(None);
        }

        let budget = match self.settings.result_cap {
            Some(cap) if self.fetched >= cap => {
                self.done = true;
                return Ok(None);
            }
            Some(cap) => cap - self.fetched,
            None => u64::MAX,
        };
        let request_size = self.settings.page_size_ceiling.min(budget);

        debug!(
            "requesting comment page video_id={} max_results={} page_token={:?}",
            self.video_id, request_size, self.page_token
        );

        let query = PageQuery {
            video_id: self.video_id.clone(),
            max_results: request_size,
            order: self.settings.order,
            page_token: self.page_token.clone(),
            api_key: self.settings.api_key.clone(),
        };

        let page = match self.api.list_page(&query).await {
            Ok(page) => page,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };

        if let Some(error) = page.error {
            self.done = true;
            return Err(FetchError::new(FetchFailure::Provider, error.message));
        }

        // An absent item collection is a soft end of the listing, not an
        // error.
        let Some(items) = page.items else {
            self.finish();
            return Ok(None);
        };

        let mut batch = Vec::new();
        for item in &items {
            batch.extend(flatten_thread(item));
        }

        // The cap bounds raw top-level comments, not flattened records, so
        // replies are never charged against it.
        self.fetched += items.len() as u64;

        match page.next_page_token {
            Some(token) if !token.is_empty() => self.page_token = token,
            _ => self.finish(),
        }

        Ok(Some(batch))
    }

    fn finish(&mut self) {
        self.done = true;
        info!(
            "comment listing for {} exhausted after {} top-level comments",
            self.video_id, self.fetched
        );
    }
}
