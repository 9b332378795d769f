//! Time-window resolution for time-series reads

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Acquisition-time bounds for one read; both bounds exclusive, either may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeWindow {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// The `lookback` ending at `now`.
    ///
    /// A lookback reaching past the earliest representable time leaves the start open.
    pub fn trailing(now: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            start: now.checked_sub_signed(lookback),
            end: Some(now),
        }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| ts > start) && self.end.is_none_or(|end| ts < end)
    }
}

/// Resolve a caller-supplied window.
///
/// Without an end, the window is the trailing `lookback` ending at `now` and
/// any supplied start is discarded. With an end, the caller's bounds are used
/// as given, so an end without a start leaves the lower bound open.
pub fn resolve_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    lookback: Duration,
) -> TimeWindow {
    match end {
        None => TimeWindow::trailing(now, lookback),
        Some(end) => TimeWindow::new(start, Some(end)),
    }
}
