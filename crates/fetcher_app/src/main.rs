//! CLI entry point: fetch comments for one video and export them.

use anyhow::Result;
use clap::Parser;
use fetcher_engine::{
    dump, resolve_video_id, BlobWriter, CommentRecord, ExportOptions, FetchSession, FetchSettings,
    DEFAULT_FILENAME_STEM,
};
use log::info;

mod cli;
mod logging;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, args.quiet);

    let video_id = resolve_video_id(&args.video)?;
    info!("fetching comments for video {video_id}");

    let mut settings = FetchSettings::new(args.api_key);
    settings.order = args.order;
    settings.page_size_ceiling = args.page_size;
    settings.result_cap = args.max_results;

    let runtime = tokio::runtime::Runtime::new()?;
    let records = runtime.block_on(fetch_all(&video_id, settings))?;

    let options = ExportOptions {
        filename_stem: args
            .stem
            .unwrap_or_else(|| format!("{DEFAULT_FILENAME_STEM}_{video_id}")),
        ..ExportOptions::default()
    };
    let blob = dump(&records, args.format, &options)?;

    let writer = BlobWriter::new(args.output_dir);
    let path = writer.write(&blob)?;
    println!("{} comments -> {}", records.len(), path.display());
    Ok(())
}

/// Drive the session to exhaustion, accumulating batches and reporting a
/// running total.
async fn fetch_all(video_id: &str, settings: FetchSettings) -> Result<Vec<CommentRecord>> {
    let mut session = FetchSession::new(video_id, settings);
    let mut records = Vec::new();
    while let Some(batch) = session.next_page().await? {
        records.extend(batch);
        info!("fetched {} comments", records.len());
    }
    Ok(records)
}
