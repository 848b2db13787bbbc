//! Shared rendering utilities.

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Returns a human-readable description of how long ago `at` was.
///
/// - Less than 1 minute: `"just now"`
/// - Less than 1 hour: `"Xm ago"`
/// - Less than 1 day: `"Xh ago"`
/// - 1 day or more: `"Xd ago"`
///
/// Timestamps in the future (clock skew) read as `"just now"`.
#[must_use]
pub fn time_ago(at: DateTime<Utc>) -> String {
    let diff = Utc::now().timestamp() - at.timestamp();

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}

/// Truncates `text` to at most `max_chars` characters, appending `...` when
/// anything was cut. Operates on character boundaries, never mid-codepoint.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut: String = text.chars().take(keep).collect();
    format!("{cut}...")
}
