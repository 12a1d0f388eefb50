//! Progress bar for batch runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over `total` records, or a hidden one when disabled
pub fn record_progress(total: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message("Mapping genes to UniProt");
    pb
}
