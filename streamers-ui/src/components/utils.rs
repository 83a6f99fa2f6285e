//! Utility functions for UI components

use chrono::{DateTime, Utc};

/// Compact viewer count: `950`, `1,2 mil`, `15 mil`
pub fn format_viewer_count(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 10_000 {
        let tenths = count / 100;
        let whole = tenths / 10;
        let frac = tenths % 10;
        if frac == 0 {
            format!("{whole} mil")
        } else {
            format!("{whole},{frac} mil")
        }
    } else {
        format!("{} mil", count / 1_000)
    }
}

/// How long a stream has been on air: `45min`, `2h05`
pub fn format_uptime(started_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - started_at).num_minutes().max(0);
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if hours == 0 {
        format!("{remaining}min")
    } else {
        format!("{hours}h{remaining:02}")
    }
}
