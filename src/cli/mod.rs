use clap::Subcommand;

use abtest::Alternative;

#[derive(Subcommand)]
pub enum Commands {
    /// One-sample t-test of H₀: mean = mu0
    Ttest {
        /// Sample file, or an inline comma-separated list
        #[arg(short, long)]
        data: String,

        #[arg(long)]
        mu0: f64,

        #[arg(short, long, default_value = "two-sided")]
        alternative: Alternative,

        #[arg(short, long, default_value = "0.95")]
        confidence: f64,
    },

    /// Two-proportion z-test from success counts
    Ztest {
        #[arg(long)]
        success_a: u64,

        #[arg(long)]
        trials_a: u64,

        #[arg(long)]
        success_b: u64,

        #[arg(long)]
        trials_b: u64,

        #[arg(short, long, default_value = "two-sided")]
        alternative: Alternative,
    },

    /// Two-sample z-test on raw observations (e.g. 0/1 conversions)
    ZtestSamples {
        #[arg(short, long)]
        a: String,

        #[arg(short, long)]
        b: String,

        #[arg(long, default_value = "two-sided")]
        alternative: Alternative,

        /// Use separate group variances instead of the pooled variance
        #[arg(long)]
        unequal_variance: bool,
    },

    /// Exact binomial test of H₀: p = p0
    Binom {
        #[arg(short, long)]
        successes: u64,

        #[arg(short, long)]
        trials: u64,

        #[arg(long)]
        p0: f64,

        #[arg(short, long, default_value = "two-sided")]
        alternative: Alternative,
    },

    /// Permutation test on the difference of a metric between two groups
    Permutation {
        #[arg(short, long)]
        a: String,

        #[arg(short, long)]
        b: String,

        #[arg(short, long, default_value = "mean")]
        metric: String,

        #[arg(long, default_value = "10000")]
        reps: usize,

        #[arg(long, default_value = "42")]
        seed: u64,

        #[arg(long, default_value = "two-sided")]
        alternative: Alternative,
    },

    /// Percentile bootstrap interval of a metric (or of a difference with --b)
    Bootstrap {
        #[arg(short, long)]
        a: String,

        #[arg(short, long)]
        b: Option<String>,

        #[arg(short, long, default_value = "mean")]
        metric: String,

        #[arg(long, default_value = "10000")]
        resamples: usize,

        #[arg(long, default_value = "42")]
        seed: u64,

        #[arg(short, long, default_value = "0.95")]
        confidence: f64,
    },

    /// Per-group sample size for a two-proportion test
    SampleSize {
        #[arg(long)]
        baseline: f64,

        /// Absolute lift to detect, e.g. 0.02 for +2 percentage points
        #[arg(long, allow_negative_numbers = true)]
        mde: f64,

        #[arg(long, default_value = "0.05")]
        alpha: f64,

        #[arg(long, default_value = "0.8")]
        power: f64,

        #[arg(long, default_value = "two-sided")]
        alternative: Alternative,
    },

    /// Minimum detectable absolute lift for a given group size
    Mde {
        #[arg(long)]
        baseline: f64,

        #[arg(long)]
        per_group: u64,

        #[arg(long, default_value = "0.05")]
        alpha: f64,

        #[arg(long, default_value = "0.8")]
        power: f64,

        #[arg(long, default_value = "two-sided")]
        alternative: Alternative,
    },
}
