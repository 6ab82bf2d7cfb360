use std::path::PathBuf;

use clap::Parser;
use fetcher_engine::{CommentOrder, ExportFormat, PAGE_SIZE_CEILING};

use crate::logging::LogDestination;

/// Fetch all comments for a YouTube video and export them.
#[derive(Debug, Parser)]
#[command(name = "yt-comments", version)]
pub struct Args {
    /// Video URL (https://www.youtube.com/watch?v=...) or bare video ID.
    pub video: String,

    /// YouTube Data API v3 key.
    #[arg(long, env = "YT_API_KEY")]
    pub api_key: String,

    /// Listing order for top-level comments.
    #[arg(long, default_value = "time")]
    pub order: CommentOrder,

    /// Cap on fetched top-level comments (replies do not count against it).
    #[arg(long)]
    pub max_results: Option<u64>,

    /// Page size ceiling per request.
    #[arg(long, default_value_t = PAGE_SIZE_CEILING)]
    pub page_size: u64,

    /// Export format.
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Directory the export file is written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output filename stem; defaults to youtube_comments_<videoId>.
    #[arg(long)]
    pub stem: Option<String>,

    /// Where log output goes.
    #[arg(long, default_value = "terminal")]
    pub log: LogDestination,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}
