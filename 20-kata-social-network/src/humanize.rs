//! Human-readable ages such as "3 minutes ago".

use std::time::{Duration, SystemTime};

/// Renders the age of `past` as seen from `now`.
///
/// A `now` earlier than `past` counts as no time at all.
pub fn relative_time(past: SystemTime, now: SystemTime) -> String {
    let elapsed = now.duration_since(past).unwrap_or(Duration::ZERO);
    humanize(elapsed)
}

/// Formats an elapsed duration, picking the coarsest unit that applies.
///
/// Minutes are counted in total rather than within the hour, so once an hour
/// has passed only the hour count is shown. Anything that rounds to zero
/// seconds renders as an empty string.
pub fn humanize(elapsed: Duration) -> String {
    // Round half up to whole seconds.
    let total = (elapsed.as_millis() + 500) / 1_000;
    let hours = total / 3_600;
    let minutes = total / 60;
    let seconds = total % 60;

    match (hours, minutes, seconds) {
        (1, _, _) => "1 hour ago".to_string(),
        (h, _, _) if h > 1 => format!("{h} hours ago"),
        (_, 1, _) => "1 minute ago".to_string(),
        (_, m, _) if m > 1 => format!("{m} minutes ago"),
        (_, _, 1) => "1 second ago".to_string(),
        (_, _, s) if s > 1 => format!("{s} seconds ago"),
        _ => String::new(),
    }
}
