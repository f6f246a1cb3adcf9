use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::application::{
    Mean, Metric, ProgressReporter, DEFAULT_SEED, MAX_RESAMPLING_REPS,
};
use crate::domain::{BootstrapInterval, DomainError, Sample};

pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Percentile bootstrap interval for a metric, or for the difference of a
/// metric between two groups.
pub struct BootstrapIntervalUseCase {
    metric: Arc<dyn Metric>,
    progress: Arc<dyn ProgressReporter>,
    resamples: usize,
    confidence: f64,
    seed: u64,
}

impl BootstrapIntervalUseCase {
    pub fn new(progress: Arc<dyn ProgressReporter>) -> Self {
        Self {
            metric: Arc::new(Mean),
            progress,
            resamples: DEFAULT_RESAMPLES,
            confidence: 0.95,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_metric(mut self, metric: Arc<dyn Metric>) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Interval for `metric(x)`, or `metric(x) - metric(y)` when `y` is given.
    pub fn execute(
        &self,
        x: &Sample,
        y: Option<&Sample>,
    ) -> Result<BootstrapInterval, DomainError> {
        if self.resamples == 0 {
            return Err(DomainError::invalid_input(
                "bootstrap needs at least one resample",
            ));
        }
        if self.resamples > MAX_RESAMPLING_REPS {
            return Err(DomainError::invalid_input(format!(
                "{} resamples exceeds the limit of {}",
                self.resamples, MAX_RESAMPLING_REPS
            )));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(DomainError::invalid_input(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }

        let statistic = |a: &[f64], b: Option<&[f64]>| match b {
            Some(b) => self.metric.compute(a) - self.metric.compute(b),
            None => self.metric.compute(a),
        };

        let estimate = statistic(x.values(), y.map(Sample::values));
        info!(
            "Bootstrap {} ({} groups), resamples={}, confidence={}",
            self.metric.name(),
            if y.is_some() { 2 } else { 1 },
            self.resamples,
            self.confidence
        );
        let start_time = Instant::now();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut buf_x = vec![0.0; x.len()];
        let mut buf_y = vec![0.0; y.map_or(0, Sample::len)];
        let mut stats = Vec::with_capacity(self.resamples);

        self.progress.start(self.resamples as u64, "resamples");
        for _ in 0..self.resamples {
            resample_into(x.values(), &mut buf_x, &mut rng);
            let value = match y {
                Some(y) => {
                    resample_into(y.values(), &mut buf_y, &mut rng);
                    statistic(buf_x.as_slice(), Some(buf_y.as_slice()))
                }
                None => statistic(buf_x.as_slice(), None),
            };
            stats.push(value);
            self.progress.advance(1);
        }
        self.progress.finish();

        stats.retain(|v| v.is_finite());
        if stats.is_empty() {
            return Err(DomainError::degenerate(format!(
                "metric '{}' was never finite on a resample",
                self.metric.name()
            )));
        }
        stats.sort_by(|a, b| a.total_cmp(b));

        let tail = (1.0 - self.confidence) / 2.0;
        let low = quantile_sorted(&stats, tail);
        let high = quantile_sorted(&stats, 1.0 - tail);

        info!(
            "Bootstrap finished in {:.2}s: [{:.6}, {:.6}]",
            start_time.elapsed().as_secs_f64(),
            low,
            high
        );

        Ok(BootstrapInterval {
            estimate,
            low,
            high,
            confidence: self.confidence,
            resamples: self.resamples,
            metric: self.metric.name().to_string(),
        })
    }
}

fn resample_into(source: &[f64], target: &mut [f64], rng: &mut StdRng) {
    let n = source.len();
    for slot in target.iter_mut() {
        *slot = source[rng.gen_range(0..n)];
    }
}

/// Quantile `q` of ascending `sorted` with linear interpolation between
/// order statistics.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
