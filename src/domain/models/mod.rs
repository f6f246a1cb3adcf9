mod alternative;
mod outcome;
mod proportion;
mod sample;

pub use alternative::*;
pub use outcome::*;
pub use proportion::*;
pub use sample::*;
