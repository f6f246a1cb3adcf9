use serde::{Deserialize, Serialize};

use super::Alternative;

/// Raw one-sample t statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TStatistic {
    pub t_stat: f64,
    /// Degrees of freedom, `n - 1`.
    pub df: u64,
    /// Standard error of the mean.
    pub se: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TTestOutcome {
    pub p_value: f64,
    pub t_stat: f64,
    pub df: u64,
    pub alternative: Alternative,
    pub mean: f64,
    pub mu0: f64,
    /// Confidence interval for the mean. `None` marks the unbounded side of a
    /// one-sided alternative.
    pub ci_low: Option<f64>,
    pub ci_high: Option<f64>,
    pub confidence: f64,
}

/// Raw two-proportion z statistic with its intermediate quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZStatistic {
    pub z_stat: f64,
    pub p1: f64,
    pub p2: f64,
    pub p_pool: f64,
    pub se_pool: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZTestOutcome {
    pub p_value: f64,
    pub z_stat: f64,
    pub alternative: Alternative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinomialOutcome {
    pub p_value: f64,
    pub successes: u64,
    pub trials: u64,
    pub p0: f64,
    pub alternative: Alternative,
}

impl BinomialOutcome {
    pub fn observed_rate(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationOutcome {
    pub p_value: f64,
    /// `metric(x) - metric(y)` on the original group labels.
    pub observed: f64,
    /// The statistic under each random relabelling, in draw order.
    pub permuted: Vec<f64>,
    pub reps: usize,
    pub metric: String,
    pub alternative: Alternative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapInterval {
    pub estimate: f64,
    pub low: f64,
    pub high: f64,
    pub confidence: f64,
    pub resamples: usize,
    pub metric: String,
}

impl BootstrapInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSizePlan {
    pub per_group: u64,
    pub total: u64,
    pub baseline: f64,
    /// Absolute lift over the baseline rate.
    pub mde: f64,
    pub alpha: f64,
    pub power: f64,
    pub alternative: Alternative,
}

/// Implemented by every outcome that carries a p-value.
pub trait HypothesisOutcome {
    fn p_value(&self) -> f64;

    fn statistic(&self) -> f64;

    fn alternative(&self) -> Alternative;

    fn is_significant(&self, alpha: f64) -> bool {
        self.p_value() < alpha
    }
}

impl HypothesisOutcome for TTestOutcome {
    fn p_value(&self) -> f64 {
        self.p_value
    }

    fn statistic(&self) -> f64 {
        self.t_stat
    }

    fn alternative(&self) -> Alternative {
        self.alternative
    }
}

impl HypothesisOutcome for ZTestOutcome {
    fn p_value(&self) -> f64 {
        self.p_value
    }

    fn statistic(&self) -> f64 {
        self.z_stat
    }

    fn alternative(&self) -> Alternative {
        self.alternative
    }
}

impl HypothesisOutcome for BinomialOutcome {
    fn p_value(&self) -> f64 {
        self.p_value
    }

    fn statistic(&self) -> f64 {
        self.successes as f64
    }

    fn alternative(&self) -> Alternative {
        self.alternative
    }
}

impl HypothesisOutcome for PermutationOutcome {
    fn p_value(&self) -> f64 {
        self.p_value
    }

    fn statistic(&self) -> f64 {
        self.observed
    }

    fn alternative(&self) -> Alternative {
        self.alternative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significance_is_strict() {
        let outcome = ZTestOutcome {
            p_value: 0.05,
            z_stat: 1.96,
            alternative: Alternative::TwoSided,
        };
        assert!(!outcome.is_significant(0.05));
        assert!(outcome.is_significant(0.051));
    }

    #[test]
    fn bootstrap_interval_contains() {
        let ci = BootstrapInterval {
            estimate: 0.3,
            low: 0.1,
            high: 0.5,
            confidence: 0.95,
            resamples: 1000,
            metric: "mean".to_string(),
        };
        assert!(ci.contains(0.1));
        assert!(!ci.contains(0.0));
        assert!((ci.width() - 0.4).abs() < 1e-12);
    }
}
