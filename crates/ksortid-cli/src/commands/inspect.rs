//! `ksortid inspect`: decode a sortable ID.

use ksortid_core::analysis::expected_shannon;
use ksortid_core::{Clock, SystemClock, split_sortid};

pub fn run(id: &str) {
    let (millis, random) = split_sortid(id).unwrap_or_else(|e| super::exit_with(e));
    let now = SystemClock.now_millis();

    println!("ID:         {id}");
    println!(
        "Timestamp:  {millis} ms ({}.{:03} s since UNIX epoch)",
        millis / 1000,
        millis % 1000
    );
    println!("Age:        {}", describe_age(now, millis));
    println!(
        "Random:     {random} ({} chars, ~{:.1} bits of entropy)",
        random.len(),
        random.len() as f64 * expected_shannon()
    );
}

/// Human-readable distance between `then` and `now`, both in milliseconds.
pub fn describe_age(now: u64, then: u64) -> String {
    if then > now {
        return format!("{} in the future", format_span(then - now));
    }
    format!("{} ago", format_span(now - then))
}

fn format_span(millis: u64) -> String {
    let secs = millis / 1000;
    match secs {
        0 => format!("{millis}ms"),
        1..=59 => format!("{secs}s"),
        60..=3599 => format!("{}m {}s", secs / 60, secs % 60),
        3600..=86_399 => format!("{}h {}m", secs / 3600, (secs % 3600) / 60),
        _ => format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600),
    }
}
