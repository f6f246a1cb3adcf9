use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::domain::{Alternative, DomainError, SampleSizePlan};

const MDE_BISECTION_STEPS: usize = 100;

/// Largest group size whose two-group total still fits in a `u64`.
const MAX_PER_GROUP: u64 = u64::MAX / 2;

/// Per-group sample size for a two-proportion z-test to detect an absolute
/// change of `mde` from `baseline` with the given `alpha` and `power`.
pub fn proportion_sample_size(
    baseline: f64,
    mde: f64,
    alpha: f64,
    power: f64,
    alternative: Alternative,
) -> Result<SampleSizePlan, DomainError> {
    validate_open_unit("baseline", baseline)?;
    if mde == 0.0 || !mde.is_finite() {
        return Err(DomainError::invalid_input("mde must be a non-zero finite lift"));
    }
    validate_open_unit("baseline + mde", baseline + mde)?;
    validate_open_unit("alpha", alpha)?;
    validate_open_unit("power", power)?;

    let exact = required_per_group(baseline, mde, alpha, power, alternative)?;
    if !exact.is_finite() || exact > MAX_PER_GROUP as f64 {
        return Err(DomainError::invalid_input(format!(
            "lift {} is too small to plan for",
            mde
        )));
    }
    let per_group = exact.ceil() as u64;

    debug!(
        "sample size: baseline={}, mde={}, alpha={}, power={} -> {} per group",
        baseline, mde, alpha, power, per_group
    );

    Ok(SampleSizePlan {
        per_group,
        total: total_for(per_group)?,
        baseline,
        mde,
        alpha,
        power,
        alternative,
    })
}

/// Smallest positive absolute lift over `baseline` detectable with
/// `per_group` observations in each group.
pub fn minimum_detectable_effect(
    baseline: f64,
    per_group: u64,
    alpha: f64,
    power: f64,
    alternative: Alternative,
) -> Result<SampleSizePlan, DomainError> {
    validate_open_unit("baseline", baseline)?;
    validate_open_unit("alpha", alpha)?;
    validate_open_unit("power", power)?;
    if per_group == 0 {
        return Err(DomainError::invalid_input("per_group must be positive"));
    }
    let total = total_for(per_group)?;

    let target = per_group as f64;
    let mut low = 0.0;
    let mut high = 1.0 - baseline;
    let ceiling = high * (1.0 - 1e-9);

    if required_per_group(baseline, ceiling, alpha, power, alternative)? > target {
        return Err(DomainError::invalid_input(format!(
            "{} observations per group cannot detect any lift from baseline {}",
            per_group, baseline
        )));
    }

    for _ in 0..MDE_BISECTION_STEPS {
        let mid = (low + high) / 2.0;
        if required_per_group(baseline, mid, alpha, power, alternative)? <= target {
            high = mid;
        } else {
            low = mid;
        }
    }

    Ok(SampleSizePlan {
        per_group,
        total,
        baseline,
        mde: high,
        alpha,
        power,
        alternative,
    })
}

fn required_per_group(
    baseline: f64,
    mde: f64,
    alpha: f64,
    power: f64,
    alternative: Alternative,
) -> Result<f64, DomainError> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| DomainError::distribution(e.to_string()))?;
    let z_alpha = normal.inverse_cdf(1.0 - alternative.tail_alpha(alpha));
    let z_beta = normal.inverse_cdf(power);

    let p1 = baseline;
    let p2 = baseline + mde;
    let p_bar = (p1 + p2) / 2.0;

    let null_sd = (2.0 * p_bar * (1.0 - p_bar)).sqrt();
    let alt_sd = (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt();

    Ok((z_alpha * null_sd + z_beta * alt_sd).powi(2) / (mde * mde))
}

fn total_for(per_group: u64) -> Result<u64, DomainError> {
    per_group.checked_mul(2).ok_or_else(|| {
        DomainError::invalid_input(format!("{} per group overflows the total", per_group))
    })
}

fn validate_open_unit(name: &str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(DomainError::invalid_input(format!(
            "{} must be in (0, 1), got {}",
            name, value
        )))
    }
}
