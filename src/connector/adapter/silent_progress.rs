use tracing::debug;

use crate::application::ProgressReporter;

/// Discards progress; used for `--quiet`, JSON output and tests.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&self, total: u64, label: &str) {
        debug!("Starting {} {}", total, label);
    }

    fn advance(&self, _delta: u64) {}

    fn finish(&self) {}
}
