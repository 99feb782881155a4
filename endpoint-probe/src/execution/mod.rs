pub mod progress;
pub mod runner;

pub use progress::{ProgressCallback, ProgressTracker};
pub use runner::{build_outcome, ProbeRunner, SINK_CAPACITY};
