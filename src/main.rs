use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use abtest::{
    binomial_test, metric_from_name, minimum_detectable_effect, one_sample_t_test_with_confidence,
    proportion_sample_size, proportion_z_test, two_sample_z_test, BootstrapIntervalUseCase,
    IndicatifProgress, Metric, PermutationTestUseCase, ProgressReporter, ProportionCounts,
    SampleFileReader, SampleSizePlan, SilentProgress, VarianceMode,
};

mod cli;

use cli::Commands;

#[derive(Parser)]
#[command(name = "abtest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let progress: Arc<dyn ProgressReporter> = if cli.quiet || cli.json {
        Arc::new(SilentProgress)
    } else {
        Arc::new(IndicatifProgress::new())
    };

    match cli.command {
        Commands::Ttest {
            data,
            mu0,
            alternative,
            confidence,
        } => {
            let sample = SampleFileReader::load(&data).await?;
            let outcome =
                one_sample_t_test_with_confidence(&sample, mu0, alternative, confidence)?;

            emit(cli.json, &outcome, || {
                println!("One-sample t-test (H0: mean = {})", mu0);
                println!("  n:            {}", sample.len());
                println!("  mean:         {:.6}", outcome.mean);
                println!("  t:            {:.6}", outcome.t_stat);
                println!("  df:           {}", outcome.df);
                println!("  p-value:      {:.6}", outcome.p_value);
                println!(
                    "  {:.0}% CI:      [{}, {}]",
                    outcome.confidence * 100.0,
                    format_bound(outcome.ci_low, "-inf"),
                    format_bound(outcome.ci_high, "+inf")
                );
                println!("  alternative:  {}", outcome.alternative);
            })?;
        }

        Commands::Ztest {
            success_a,
            trials_a,
            success_b,
            trials_b,
            alternative,
        } => {
            let a = ProportionCounts::new(success_a, trials_a)?;
            let b = ProportionCounts::new(success_b, trials_b)?;
            let outcome = proportion_z_test(&a, &b, alternative)?;

            emit(cli.json, &outcome, || {
                println!("Two-proportion z-test (H0: p_a = p_b)");
                println!("  p_a:          {:.6} ({}/{})", a.rate(), success_a, trials_a);
                println!("  p_b:          {:.6} ({}/{})", b.rate(), success_b, trials_b);
                println!("  z:            {:.6}", outcome.z_stat);
                println!("  p-value:      {:.6}", outcome.p_value);
                println!("  alternative:  {}", outcome.alternative);
            })?;
        }

        Commands::ZtestSamples {
            a,
            b,
            alternative,
            unequal_variance,
        } => {
            let x1 = SampleFileReader::load(&a).await?;
            let x2 = SampleFileReader::load(&b).await?;
            let mode = if unequal_variance {
                VarianceMode::Unequal
            } else {
                VarianceMode::Pooled
            };
            let outcome = two_sample_z_test(&x1, &x2, alternative, mode)?;

            emit(cli.json, &outcome, || {
                println!("Two-sample z-test ({:?} variance)", mode);
                println!("  mean_a:       {:.6} (n={})", x1.mean(), x1.len());
                println!("  mean_b:       {:.6} (n={})", x2.mean(), x2.len());
                println!("  z:            {:.6}", outcome.z_stat);
                println!("  p-value:      {:.6}", outcome.p_value);
                println!("  alternative:  {}", outcome.alternative);
            })?;
        }

        Commands::Binom {
            successes,
            trials,
            p0,
            alternative,
        } => {
            let outcome = binomial_test(successes, trials, p0, alternative)?;

            emit(cli.json, &outcome, || {
                println!("Exact binomial test (H0: p = {})", p0);
                println!(
                    "  observed:     {}/{} ({:.6})",
                    successes,
                    trials,
                    outcome.observed_rate()
                );
                println!("  p-value:      {:.6}", outcome.p_value);
                println!("  alternative:  {}", outcome.alternative);
            })?;
        }

        Commands::Permutation {
            a,
            b,
            metric,
            reps,
            seed,
            alternative,
        } => {
            let x = SampleFileReader::load(&a).await?;
            let y = SampleFileReader::load(&b).await?;
            let metric: Arc<dyn Metric> = Arc::from(metric_from_name(&metric)?);

            let use_case = PermutationTestUseCase::new(progress)
                .with_metric(metric)
                .with_reps(reps)
                .with_seed(seed);
            let outcome =
                tokio::task::spawn_blocking(move || use_case.execute(&x, &y, alternative))
                    .await??;

            emit(cli.json, &outcome, || {
                println!("Permutation test ({} difference)", outcome.metric);
                println!("  observed:     {:.6}", outcome.observed);
                println!("  reps:         {}", outcome.reps);
                println!("  p-value:      {:.6}", outcome.p_value);
                println!("  alternative:  {}", outcome.alternative);
            })?;
        }

        Commands::Bootstrap {
            a,
            b,
            metric,
            resamples,
            seed,
            confidence,
        } => {
            let x = SampleFileReader::load(&a).await?;
            let y = match b {
                Some(b) => Some(SampleFileReader::load(&b).await?),
                None => None,
            };
            let metric: Arc<dyn Metric> = Arc::from(metric_from_name(&metric)?);

            let use_case = BootstrapIntervalUseCase::new(progress)
                .with_metric(metric)
                .with_resamples(resamples)
                .with_confidence(confidence)
                .with_seed(seed);
            let two_groups = y.is_some();
            let interval =
                tokio::task::spawn_blocking(move || use_case.execute(&x, y.as_ref())).await??;

            emit(cli.json, &interval, || {
                let what = if two_groups {
                    format!("{} difference (a - b)", interval.metric)
                } else {
                    interval.metric.clone()
                };
                println!("Bootstrap interval for {}", what);
                println!("  estimate:     {:.6}", interval.estimate);
                println!(
                    "  {:.0}% CI:      [{:.6}, {:.6}]",
                    interval.confidence * 100.0,
                    interval.low,
                    interval.high
                );
                println!("  resamples:    {}", interval.resamples);
            })?;
        }

        Commands::SampleSize {
            baseline,
            mde,
            alpha,
            power,
            alternative,
        } => {
            let plan = proportion_sample_size(baseline, mde, alpha, power, alternative)?;
            emit(cli.json, &plan, || print_plan("Sample size plan", &plan))?;
        }

        Commands::Mde {
            baseline,
            per_group,
            alpha,
            power,
            alternative,
        } => {
            let plan = minimum_detectable_effect(baseline, per_group, alpha, power, alternative)?;
            emit(cli.json, &plan, || print_plan("Minimum detectable effect", &plan))?;
        }
    }

    debug!("Command finished");
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human();
    }
    Ok(())
}

fn format_bound(bound: Option<f64>, open: &str) -> String {
    match bound {
        Some(value) => format!("{:.6}", value),
        None => open.to_string(),
    }
}

fn print_plan(title: &str, plan: &SampleSizePlan) {
    println!("{}", title);
    println!("  baseline:     {:.4}", plan.baseline);
    println!(
        "  mde:          {:+.4} (target rate {:.4})",
        plan.mde,
        plan.baseline + plan.mde
    );
    println!("  alpha:        {}", plan.alpha);
    println!("  power:        {}", plan.power);
    println!("  per group:    {}", plan.per_group);
    println!("  total:        {}", plan.total);
    println!("  alternative:  {}", plan.alternative);
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use abtest::Alternative;

    #[test]
    fn parses_binomial_command() {
        let cli = Cli::try_parse_from([
            "abtest", "binom", "-s", "7", "-t", "20", "--p0", "0.5", "-a", "less",
        ])
        .unwrap();
        match cli.command {
            Commands::Binom {
                successes,
                trials,
                alternative,
                ..
            } => {
                assert_eq!(successes, 7);
                assert_eq!(trials, 20);
                assert_eq!(alternative, Alternative::Less);
            }
            _ => panic!("expected binom command"),
        }
    }

    #[test]
    fn rejects_unknown_alternative() {
        let res = Cli::try_parse_from([
            "abtest", "binom", "-s", "7", "-t", "20", "--p0", "0.5", "-a", "sideways",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "abtest", "sample-size", "--baseline", "0.1", "--mde", "-0.02", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::SampleSize { mde, .. } if mde == -0.02));
    }

    #[test]
    fn permutation_defaults() {
        let cli = Cli::try_parse_from(["abtest", "permutation", "-a", "1,2", "-b", "3,4"]).unwrap();
        match cli.command {
            Commands::Permutation {
                reps, seed, metric, ..
            } => {
                assert_eq!(reps, 10_000);
                assert_eq!(seed, 42);
                assert_eq!(metric, "mean");
            }
            _ => panic!("expected permutation command"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
