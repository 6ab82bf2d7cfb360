use chrono::{DateTime, FixedOffset, Local};

/// Render an ISO-8601 instant as `YYYY-MM-DDTHH:mm:ss±HHmm` reinterpreted in
/// `offset`. Values that do not parse are passed through unchanged.
pub fn format_offset_date(value: &str, offset: FixedOffset) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(instant) => instant
            .with_timezone(&offset)
            .format("%Y-%m-%dT%H:%M:%S%z")
            .to_string(),
        Err(_) => value.to_string(),
    }
}

/// Same rendering in the local timezone of the executing environment.
pub fn format_local_date(value: &str) -> String {
    format_offset_date(value, local_offset())
}

/// Human-readable `YYYY-MM-DD HH:MM:SS` form, used next to the
/// machine-readable attribute in the HTML export.
pub fn format_display_date(value: &str, offset: FixedOffset) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(instant) => instant
            .with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => value.to_string(),
    }
}

/// UTC offset of the local timezone at this moment.
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}
