mod metric;
mod progress_reporter;

pub use metric::*;
pub use progress_reporter::*;
