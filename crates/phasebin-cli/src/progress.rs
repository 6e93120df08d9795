use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use phasebin_core::search::ProgressReporter;

/// Drives an indicatif bar from search progress callbacks.
pub struct BarReporter {
    pb: ProgressBar,
}

impl BarReporter {
    pub fn new() -> Result<Self> {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { pb })
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total: usize) {
        self.pb.set_length(total as u64);
        self.pb.set_message("Scoring thresholds");
    }

    fn advance(&self, _done: usize) {
        // Parallel workers may report counts out of order.
        self.pb.inc(1);
    }

    fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}
