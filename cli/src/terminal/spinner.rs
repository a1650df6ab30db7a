use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the fan-out phase, advanced from the scanner's
/// completion callback.
pub fn scan_progress(total: usize) -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new(total as u64);
    let style: ProgressStyle =
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.green}] {pos}/{len}")
            .expect("static progress template")
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Probing servers");
    pb
}
