use thiserror::Error;
use url::Url;

/// Canonical provider web origin accepted for video URLs.
pub const WEB_ORIGIN: &str = "https://www.youtube.com";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoIdError {
    #[error("unsupported origin for the provided video URL")]
    UnsupportedOrigin,
    #[error("missing required `v` param in the provided video URL")]
    MissingVideoParam,
}

/// Resolve a user-entered value into a video identifier.
///
/// Anything that does not parse as an absolute URL is treated as a literal
/// video ID and passed through without shape validation. URLs must carry the
/// canonical origin and a `v` query parameter. No network, no side effects.
pub fn resolve_video_id(input: &str) -> Result<String, VideoIdError> {
    let parsed = match Url::parse(input) {
        Ok(url) => url,
        Err(_) => return Ok(input.to_string()),
    };

    if parsed.origin().ascii_serialization() != WEB_ORIGIN {
        return Err(VideoIdError::UnsupportedOrigin);
    }

    match parsed.query_pairs().find(|(key, _)| key == "v") {
        Some((_, value)) => Ok(value.into_owned()),
        None => Err(VideoIdError::MissingVideoParam),
    }
}
