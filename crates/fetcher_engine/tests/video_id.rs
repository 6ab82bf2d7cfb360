use fetcher_engine::{resolve_video_id, VideoIdError};
use pretty_assertions::assert_eq;

#[test]
fn literal_id_passes_through() {
    assert_eq!(resolve_video_id("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
}

#[test]
fn watch_url_yields_v_parameter() {
    assert_eq!(
        resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
    // Other parameters do not interfere.
    assert_eq!(
        resolve_video_id("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
}

#[test]
fn foreign_origin_is_rejected() {
    assert_eq!(
        resolve_video_id("https://vimeo.com/watch?v=x").unwrap_err(),
        VideoIdError::UnsupportedOrigin
    );
}

#[test]
fn watch_url_without_v_is_rejected() {
    assert_eq!(
        resolve_video_id("https://www.youtube.com/watch").unwrap_err(),
        VideoIdError::MissingVideoParam
    );
}
