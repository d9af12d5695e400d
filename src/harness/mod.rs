//! Wall-clock runtime sweep over random sequences of geometrically growing length.

pub mod config;
pub mod generator;
pub mod runner;
pub mod stopwatch;

pub use config::{SweepConfig, SweepOverrides};
pub use generator::SequenceGenerator;
pub use runner::{RuntimeReport, RuntimeSample, run_sweep, run_sweep_with};
pub use stopwatch::Stopwatch;
