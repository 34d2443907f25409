mod period;
mod progress;

pub use period::*;
pub use progress::*;
