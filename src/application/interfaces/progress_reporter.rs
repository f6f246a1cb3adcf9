/// Receives progress of long-running resampling loops.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, total: u64, label: &str);

    fn advance(&self, delta: u64);

    fn finish(&self);
}
