use std::fmt::Write as _;
use std::hint::black_box;

use serde::Serialize;
use tracing::debug;

use crate::core::max_flags;
use crate::error::FlagsResult;
use crate::harness::config::SweepConfig;
use crate::harness::generator::SequenceGenerator;
use crate::harness::stopwatch::Stopwatch;

/// One timed `max_flags` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuntimeSample {
    pub len: usize,
    pub seconds: f64,
    pub max_flags: usize,
}

/// Samples of a whole sweep, ordered by sequence length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RuntimeReport {
    pub samples: Vec<RuntimeSample>,
    /// Sum of every computed result; keeps the timed calls observable.
    pub flags_checksum: u64,
}

impl RuntimeReport {
    /// Renders one `<len> : <seconds>` line per sample.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for sample in &self.samples {
            let _ = writeln!(out, "{} : {}", sample.len, sample.seconds);
        }
        out
    }

    pub fn to_json_pretty(&self) -> FlagsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.samples.iter().map(|sample| sample.seconds).sum()
    }
}

/// Runs the sweep described by `config`, seeding from `config.seed` or entropy.
pub fn run_sweep(config: &SweepConfig) -> FlagsResult<RuntimeReport> {
    config.validate()?;
    let mut generator = match config.seed {
        Some(seed) => SequenceGenerator::seeded(seed, config.value_min, config.value_max)?,
        None => SequenceGenerator::from_entropy(config.value_min, config.value_max)?,
    };
    run_sweep_with(config, &mut generator)
}

/// Runs the sweep with a caller-supplied generator; the config's value range is ignored.
pub fn run_sweep_with(
    config: &SweepConfig,
    generator: &mut SequenceGenerator,
) -> FlagsResult<RuntimeReport> {
    let sizes = config.sizes()?;
    let mut report = RuntimeReport {
        samples: Vec::with_capacity(sizes.len()),
        flags_checksum: 0,
    };
    let mut stopwatch = Stopwatch::start();

    for len in sizes {
        let values = generator.generate(len);
        stopwatch.reset();
        let flags = black_box(max_flags(black_box(&values)));
        let seconds = stopwatch.elapsed_seconds();

        debug!(len, seconds, max_flags = flags, "timed sweep sample");
        report.flags_checksum = report.flags_checksum.wrapping_add(flags as u64);
        report.samples.push(RuntimeSample {
            len,
            seconds,
            max_flags: flags,
        });
    }

    Ok(report)
}
