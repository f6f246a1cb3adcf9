use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Direction of the alternative hypothesis H₁.
///
/// For two-group tests `Greater` means the first group's parameter exceeds
/// the second's; for one-sample tests it means the parameter exceeds the
/// null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    #[default]
    TwoSided,
    Greater,
    Less,
}

impl Alternative {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Greater => "greater",
            Alternative::Less => "less",
        }
    }

    pub fn is_two_sided(&self) -> bool {
        matches!(self, Alternative::TwoSided)
    }

    /// P-value of `stat` under a distribution symmetric around zero whose
    /// CDF is `cdf`.
    pub fn p_value_from_cdf(&self, stat: f64, cdf: impl Fn(f64) -> f64) -> f64 {
        let p = match self {
            Alternative::TwoSided => 2.0 * (1.0 - cdf(stat.abs())),
            Alternative::Greater => 1.0 - cdf(stat),
            Alternative::Less => cdf(stat),
        };
        p.clamp(0.0, 1.0)
    }

    /// Significance level to put in a single tail for this alternative.
    pub fn tail_alpha(&self, alpha: f64) -> f64 {
        if self.is_two_sided() {
            alpha / 2.0
        } else {
            alpha
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "two-sided" | "two_sided" | "two" => Ok(Alternative::TwoSided),
            "greater" | "larger" => Ok(Alternative::Greater),
            "less" | "smaller" => Ok(Alternative::Less),
            other => Err(DomainError::invalid_input(format!(
                "alternative must be one of 'two-sided', 'greater', 'less', got '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_cdf(x: f64) -> f64 {
        // symmetric on [-1, 1]
        ((x + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("two-sided".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert_eq!("two_sided".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert_eq!("Larger".parse::<Alternative>().unwrap(), Alternative::Greater);
        assert_eq!("smaller".parse::<Alternative>().unwrap(), Alternative::Less);
        assert!("sideways".parse::<Alternative>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn p_value_rules() {
        let two = Alternative::TwoSided.p_value_from_cdf(-0.5, uniform_cdf);
        assert!((two - 0.5).abs() < 1e-12);

        let greater = Alternative::Greater.p_value_from_cdf(0.5, uniform_cdf);
        assert!((greater - 0.25).abs() < 1e-12);

        let less = Alternative::Less.p_value_from_cdf(0.5, uniform_cdf);
        assert!((less - 0.75).abs() < 1e-12);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Alternative::TwoSided).unwrap();
        assert_eq!(json, "\"two-sided\"");
        assert_eq!(Alternative::default().to_string(), "two-sided");
    }

    #[test]
    fn tail_alpha_halves_only_two_sided() {
        assert_eq!(Alternative::TwoSided.tail_alpha(0.05), 0.025);
        assert_eq!(Alternative::Less.tail_alpha(0.05), 0.05);
    }
}
