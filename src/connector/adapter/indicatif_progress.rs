use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ProgressReporter;

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Terminal progress bar on stderr.
pub struct IndicatifProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl IndicatifProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(TEMPLATE)
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for IndicatifProgress {
    fn start(&self, total: u64, label: &str) {
        let bar = ProgressBar::new(total);
        bar.set_style(Self::style());
        bar.set_message(label.to_string());
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(previous) = slot.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn advance(&self, delta: u64) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.inc(delta);
            }
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_with_message("done");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_position_until_finished() {
        let progress = IndicatifProgress::new();
        progress.start(10, "permutations");
        progress.advance(3);
        progress.advance(2);
        {
            let slot = progress.bar.lock().unwrap();
            let bar = slot.as_ref().unwrap();
            assert_eq!(bar.position(), 5);
            assert_eq!(bar.length(), Some(10));
        }
        progress.finish();
        assert!(progress.bar.lock().unwrap().is_none());
    }

    #[test]
    fn advance_without_start_is_ignored() {
        let progress = IndicatifProgress::default();
        progress.advance(1);
        progress.finish();
    }
}
