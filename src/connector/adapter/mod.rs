mod indicatif_progress;
mod sample_file_reader;
mod silent_progress;

pub use indicatif_progress::*;
pub use sample_file_reader::*;
pub use silent_progress::*;
