use ndarray::ArrayView1;

use crate::domain::{mean_of, median_of, variance_of, DomainError};

/// A statistic computed over the observations of one group.
///
/// Resampling use cases compare groups by the difference of a metric.
pub trait Metric: Send + Sync {
    fn name(&self) -> &str;

    fn compute(&self, values: &[f64]) -> f64;
}

pub struct Mean;

pub struct Median;

pub struct Sum;

/// Unbiased (n - 1) sample variance.
pub struct Variance;

impl Metric for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn compute(&self, values: &[f64]) -> f64 {
        mean_of(values)
    }
}

impl Metric for Median {
    fn name(&self) -> &str {
        "median"
    }

    fn compute(&self, values: &[f64]) -> f64 {
        median_of(values)
    }
}

impl Metric for Sum {
    fn name(&self) -> &str {
        "sum"
    }

    fn compute(&self, values: &[f64]) -> f64 {
        ArrayView1::from(values).sum()
    }
}

impl Metric for Variance {
    fn name(&self) -> &str {
        "variance"
    }

    fn compute(&self, values: &[f64]) -> f64 {
        variance_of(values, 1)
    }
}

/// Wraps a closure as a named metric.
pub struct FnMetric<F> {
    name: String,
    func: F,
}

impl<F> FnMetric<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Metric for FnMetric<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, values: &[f64]) -> f64 {
        (self.func)(values)
    }
}

pub fn metric_from_name(name: &str) -> Result<Box<dyn Metric>, DomainError> {
    match name.trim().to_lowercase().as_str() {
        "mean" | "avg" => Ok(Box::new(Mean)),
        "median" => Ok(Box::new(Median)),
        "sum" | "total" => Ok(Box::new(Sum)),
        "variance" | "var" => Ok(Box::new(Variance)),
        other => Err(DomainError::invalid_input(format!(
            "unknown metric '{}', expected one of mean, median, sum, variance",
            other
        ))),
    }
}
