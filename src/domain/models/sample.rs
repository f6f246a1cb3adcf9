use ndarray::{Array1, ArrayView1};

use crate::domain::DomainError;

/// A non-empty set of finite observations from one experiment group.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Array1<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Result<Self, DomainError> {
        if values.is_empty() {
            return Err(DomainError::invalid_input("sample must not be empty"));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(DomainError::invalid_input(format!(
                "sample contains a non-finite value at position {}",
                pos
            )));
        }
        Ok(Self {
            values: Array1::from_vec(values),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        self.values.as_slice().unwrap_or_default()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn sum(&self) -> f64 {
        self.values.sum()
    }

    pub fn mean(&self) -> f64 {
        mean_of(self.values())
    }

    /// Variance with `ddof` delta degrees of freedom; NaN when `ddof >= len`.
    pub fn variance(&self, ddof: usize) -> f64 {
        variance_of(self.values(), ddof)
    }

    pub fn std(&self, ddof: usize) -> f64 {
        self.variance(ddof).sqrt()
    }

    pub fn median(&self) -> f64 {
        median_of(self.values())
    }
}

/// Mean of a slice; NaN for an empty slice.
pub fn mean_of(values: &[f64]) -> f64 {
    ArrayView1::from(values).mean().unwrap_or(f64::NAN)
}

/// Variance of a slice with `ddof` delta degrees of freedom; NaN when
/// `ddof >= values.len()`.
pub fn variance_of(values: &[f64], ddof: usize) -> f64 {
    if ddof >= values.len() {
        return f64::NAN;
    }
    ArrayView1::from(values).var(ddof as f64)
}

/// Median of a slice; NaN for an empty slice.
pub fn median_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = DomainError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Sample::new(values)
    }
}
