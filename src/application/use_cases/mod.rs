mod bootstrap_interval;
mod experiment_report;
mod sample_size;
mod t_test;

pub use binomial_test::*;
pub use bootstrap_interval::*;
pub use experiment_report::*;
pub use permutation_test::*;
pub use sample_size::*;
pub use t_test::*;
pub use z_test::*;
