use serde::{Deserialize, Serialize};

use super::Sample;
use crate::domain::DomainError;

/// Successes out of trials for one experiment group, e.g. conversions out
/// of visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionCounts {
    successes: u64,
    trials: u64,
}

impl ProportionCounts {
    pub fn new(successes: u64, trials: u64) -> Result<Self, DomainError> {
        if trials == 0 {
            return Err(DomainError::invalid_input("trials must be positive"));
        }
        if successes > trials {
            return Err(DomainError::invalid_input(format!(
                "successes ({}) cannot exceed trials ({})",
                successes, trials
            )));
        }
        Ok(Self { successes, trials })
    }

    /// Counts the ones in a sample of 0/1 outcomes.
    pub fn from_binary(sample: &Sample) -> Result<Self, DomainError> {
        let mut successes = 0u64;
        for (i, &v) in sample.values().iter().enumerate() {
            if v == 1.0 {
                successes += 1;
            } else if v != 0.0 {
                return Err(DomainError::invalid_input(format!(
                    "binary sample has value {} at position {}",
                    v, i
                )));
            }
        }
        Self::new(successes, sample.len() as u64)
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn failures(&self) -> u64 {
        self.trials - self.successes
    }

    pub fn rate(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}
