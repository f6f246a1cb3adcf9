pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    binomial_test, metric_from_name, minimum_detectable_effect, one_sample_t_stat,
    one_sample_t_test, one_sample_t_test_with_confidence, proportion_sample_size,
    proportion_z_stat, proportion_z_test, two_sample_z_test, BootstrapIntervalUseCase,
    ExperimentReport, FnMetric, Mean, Median, Metric, PermutationTestUseCase, ProgressReporter,
    ReportEntry, Sum, VarianceMode, Variance,
};

pub use connector::{parse_values, IndicatifProgress, SampleFileReader, SilentProgress};

pub use domain::{
    Alternative, BinomialOutcome, BootstrapInterval, DomainError, HypothesisOutcome,
    PermutationOutcome, ProportionCounts, Sample, SampleSizePlan, TStatistic, TTestOutcome,
    ZStatistic, ZTestOutcome,
};
