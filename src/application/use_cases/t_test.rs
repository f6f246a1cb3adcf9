use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use crate::domain::{Alternative, DomainError, Sample, TStatistic, TTestOutcome};

/// Confidence level used for the mean's interval unless overridden.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// t statistic for H₀: μ = `mu0` from a single sample.
///
/// Uses the unbiased (n - 1) standard deviation; `df = n - 1`.
pub fn one_sample_t_stat(sample: &Sample, mu0: f64) -> Result<TStatistic, DomainError> {
    let n = sample.len();
    if n < 2 {
        return Err(DomainError::invalid_input(
            "one-sample t-test needs at least two observations",
        ));
    }
    if !mu0.is_finite() {
        return Err(DomainError::invalid_input("mu0 must be finite"));
    }

    let se = sample.std(1) / (n as f64).sqrt();
    if se == 0.0 {
        return Err(DomainError::degenerate(
            "all observations are identical, standard error is zero",
        ));
    }

    Ok(TStatistic {
        t_stat: (sample.mean() - mu0) / se,
        df: (n - 1) as u64,
        se,
    })
}

pub fn one_sample_t_test(
    sample: &Sample,
    mu0: f64,
    alternative: Alternative,
) -> Result<TTestOutcome, DomainError> {
    one_sample_t_test_with_confidence(sample, mu0, alternative, DEFAULT_CONFIDENCE)
}

/// One-sample t-test plus a confidence interval for the mean at
/// `confidence`. One-sided alternatives give a one-sided interval.
pub fn one_sample_t_test_with_confidence(
    sample: &Sample,
    mu0: f64,
    alternative: Alternative,
    confidence: f64,
) -> Result<TTestOutcome, DomainError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(DomainError::invalid_input(format!(
            "confidence must be in (0, 1), got {}",
            confidence
        )));
    }

    let stat = one_sample_t_stat(sample, mu0)?;
    let dist = student_t(stat.df)?;

    let p_value = alternative.p_value_from_cdf(stat.t_stat, |t| dist.cdf(t));

    let mean = sample.mean();
    let critical = dist.inverse_cdf(1.0 - alternative.tail_alpha(1.0 - confidence));
    let margin = critical * stat.se;
    let (ci_low, ci_high) = match alternative {
        Alternative::TwoSided => (Some(mean - margin), Some(mean + margin)),
        Alternative::Greater => (Some(mean - margin), None),
        Alternative::Less => (None, Some(mean + margin)),
    };

    debug!(
        "t-test: n={}, t={:.4}, df={}, p={:.6}",
        sample.len(),
        stat.t_stat,
        stat.df,
        p_value
    );

    Ok(TTestOutcome {
        p_value,
        t_stat: stat.t_stat,
        df: stat.df,
        alternative,
        mean,
        mu0,
        ci_low,
        ci_high,
        confidence,
    })
}

fn student_t(df: u64) -> Result<StudentsT, DomainError> {
    StudentsT::new(0.0, 1.0, df as f64).map_err(|e| DomainError::distribution(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(value: Option<f64>) -> f64 {
        value.expect("interval side should be bounded")
    }

    // Reference values: scipy.stats.ttest_1samp(x, 5.0)
    fn petals() -> Sample {
        Sample::new(vec![5.1, 4.9, 5.6, 5.8, 6.0, 5.3, 5.7, 5.5]).unwrap()
    }

    #[test]
    fn statistic_matches_reference() {
        let stat = one_sample_t_stat(&petals(), 5.0).unwrap();
        assert!((stat.t_stat - 3.745352851760394).abs() < 1e-9);
        assert_eq!(stat.df, 7);
        assert!((stat.se - 0.13016130102958515).abs() < 1e-10);
    }

    #[test]
    fn p_values_for_each_alternative() {
        let two = one_sample_t_test(&petals(), 5.0, Alternative::TwoSided).unwrap();
        assert!((two.p_value - 0.0072119532198394).abs() < 1e-6);

        let greater = one_sample_t_test(&petals(), 5.0, Alternative::Greater).unwrap();
        assert!((greater.p_value - 0.0036059766099197).abs() < 1e-6);

        let less = one_sample_t_test(&petals(), 5.0, Alternative::Less).unwrap();
        assert!((less.p_value - 0.9963940233900803).abs() < 1e-6);
    }

    #[test]
    fn two_sided_interval_is_symmetric() {
        let outcome = one_sample_t_test(&petals(), 5.0, Alternative::TwoSided).unwrap();
        assert!((bound(outcome.ci_low) - 5.179717430966574).abs() < 1e-3);
        assert!((bound(outcome.ci_high) - 5.795282569033426).abs() < 1e-3);
        assert!((outcome.mean - 5.4875).abs() < 1e-12);
    }

    #[test]
    fn one_sided_interval_is_open() {
        let outcome = one_sample_t_test(&petals(), 5.0, Alternative::Greater).unwrap();
        assert!((bound(outcome.ci_low) - 5.240899183858668).abs() < 1e-3);
        assert_eq!(outcome.ci_high, None);

        let less = one_sample_t_test(&petals(), 5.0, Alternative::Less).unwrap();
        assert_eq!(less.ci_low, None);
        assert!(bound(less.ci_high) > less.mean);
    }

    #[test]
    fn one_sided_outcome_survives_json() {
        let outcome = one_sample_t_test(&petals(), 5.0, Alternative::Greater).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"ci_high\":null"), "got: {}", json);

        let parsed: TTestOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }

    #[test]
    fn rejects_tiny_or_constant_samples() {
        let single = Sample::new(vec![1.0]).unwrap();
        assert!(one_sample_t_stat(&single, 0.0).unwrap_err().is_invalid_input());

        let flat = Sample::new(vec![2.0, 2.0, 2.0]).unwrap();
        assert!(one_sample_t_stat(&flat, 0.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn rejects_bad_confidence() {
        let err = one_sample_t_test_with_confidence(&petals(), 5.0, Alternative::TwoSided, 1.0)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
