//! Fetcher engine: paginated comment retrieval and export pipeline.
mod export;
mod fetch;
mod persist;
mod session;
mod timestamp;
mod types;
mod video_id;
mod wire;

pub use export::{
    dump, dump_csv, dump_html, dump_json, Blob, CsvSettings, ExportError, ExportFormat,
    ExportOptions, DEFAULT_CSV_FIELDS, DEFAULT_FILENAME_STEM,
};
pub use fetch::{
    CommentApi, CommentOrder, FetchSettings, PageQuery, YouTubeCommentApi, API_ENDPOINT,
    PAGE_SIZE_CEILING,
};
pub use persist::{ensure_output_dir, BlobWriter, PersistError};
pub use session::FetchSession;
pub use timestamp::{format_display_date, format_local_date, format_offset_date, local_offset};
pub use types::{CommentRecord, FetchError, FetchFailure};
pub use video_id::{resolve_video_id, VideoIdError, WEB_ORIGIN};
pub use wire::{
    flatten_thread, ApiError, AuthorChannelId, CommentSnippet, ReplyItem, ReplyList, ThreadItem,
    ThreadListResponse, ThreadSnippet, TopLevelComment,
};
