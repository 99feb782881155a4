use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const PROGRESS_TITLE: &str = "Analyzing given sites";

/// Progress bar for a sweep of `total` sites, drawn on stderr
pub fn probe_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template(
        "{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} (ETA: {eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    pb.set_message(PROGRESS_TITLE);
    pb
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    if seconds == 0 {
        format!("{} ms", duration.as_millis())
    } else if seconds < 60 {
        format!("{seconds} seconds")
    } else {
        format!("{} minutes {} seconds", seconds / 60, seconds % 60)
    }
}
