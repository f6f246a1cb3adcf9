use serde::{Deserialize, Serialize};

use crate::domain::{Alternative, DomainError, HypothesisOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub test: String,
    pub variant: String,
    pub control: String,
    pub statistic: f64,
    pub p_value: f64,
    pub alternative: Alternative,
}

/// Collects the outcomes of the tests run for one experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    name: String,
    entries: Vec<ReportEntry>,
}

impl ExperimentReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn record(
        &mut self,
        test: impl Into<String>,
        variant: impl Into<String>,
        control: impl Into<String>,
        outcome: &dyn HypothesisOutcome,
    ) -> &mut Self {
        self.entries.push(ReportEntry {
            test: test.into(),
            variant: variant.into(),
            control: control.into(),
            statistic: outcome.statistic(),
            p_value: outcome.p_value(),
            alternative: outcome.alternative(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with `p_value < alpha`, in recording order.
    pub fn significant(&self, alpha: f64) -> Vec<&ReportEntry> {
        self.entries.iter().filter(|e| e.p_value < alpha).collect()
    }

    pub fn render_table(&self) -> String {
        let mut out = format!("Experiment: {}\n", self.name);
        if self.entries.is_empty() {
            out.push_str("  (no results)\n");
            return out;
        }

        let test_width = self
            .entries
            .iter()
            .map(|e| e.test.len())
            .max()
            .unwrap_or(0)
            .max(4);
        let cmp_width = self
            .entries
            .iter()
            .map(|e| e.variant.len() + e.control.len() + 4)
            .max()
            .unwrap_or(0)
            .max(10);

        out.push_str(&format!(
            "  {:<tw$}  {:<cw$}  {:>12}  {:>10}  {}\n",
            "test",
            "comparison",
            "statistic",
            "p-value",
            "alternative",
            tw = test_width,
            cw = cmp_width
        ));
        for e in &self.entries {
            let comparison = format!("{} vs {}", e.variant, e.control);
            out.push_str(&format!(
                "  {:<tw$}  {:<cw$}  {:>12.4}  {:>10.6}  {}\n",
                e.test,
                comparison,
                e.statistic,
                e.p_value,
                e.alternative,
                tw = test_width,
                cw = cmp_width
            ));
        }
        out
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::internal(e.to_string()))
    }
}
