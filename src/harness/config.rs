use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlagsError, FlagsResult};

/// Geometric sequence-length sweep driving the runtime harness.
///
/// Serializable so sweeps can be stored next to their reports and replayed.
/// Missing JSON fields fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    #[serde(default = "default_growth_factor")]
    pub growth_factor: f64,
    #[serde(default = "default_value_min")]
    pub value_min: i64,
    #[serde(default = "default_value_max")]
    pub value_max: i64,
    /// Fixed RNG seed; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
            growth_factor: default_growth_factor(),
            value_min: default_value_min(),
            value_max: default_value_max(),
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Sets the inclusive length bounds of the sweep.
    #[must_use]
    pub fn with_len_range(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    #[must_use]
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Sets the inclusive range generated readings are drawn from.
    #[must_use]
    pub fn with_value_range(mut self, value_min: i64, value_max: i64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> FlagsResult<()> {
        if self.min_len == 0 {
            return Err(FlagsError::InvalidConfig(
                "min_len must be > 0".to_owned(),
            ));
        }

        if self.min_len > self.max_len {
            return Err(FlagsError::InvalidConfig(format!(
                "min_len ({}) must be <= max_len ({})",
                self.min_len, self.max_len
            )));
        }

        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(FlagsError::InvalidConfig(
                "growth_factor must be finite and > 1".to_owned(),
            ));
        }

        if self.value_min > self.value_max {
            return Err(FlagsError::InvalidConfig(format!(
                "value_min ({}) must be <= value_max ({})",
                self.value_min, self.value_max
            )));
        }

        Ok(())
    }

    /// Lengths visited by the sweep, strictly increasing from `min_len` up to `max_len`.
    ///
    /// Each step truncates `len * growth_factor`; a step that would not move
    /// forward advances by one instead.
    pub fn sizes(&self) -> FlagsResult<Vec<usize>> {
        self.validate()?;

        let mut sizes = Vec::new();
        let mut len = self.min_len;
        while len <= self.max_len {
            sizes.push(len);
            let grown = (len as f64 * self.growth_factor) as usize;
            len = if grown > len {
                grown
            } else {
                match len.checked_add(1) {
                    Some(next) => next,
                    None => break,
                }
            };
        }
        Ok(sizes)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(raw: &str) -> FlagsResult<Self> {
        let config = Self::parse_json_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON config without validating it, for callers that still
    /// merge overrides before calling `validate`.
    pub fn parse_json_str(raw: &str) -> FlagsResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> FlagsResult<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file without validating it.
    pub fn read(path: impl AsRef<Path>) -> FlagsResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FlagsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> FlagsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Command-line values layered over a file or default config.
///
/// Unset fields keep whatever the base config holds, so validation belongs
/// after `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepOverrides {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub growth_factor: Option<f64>,
    pub seed: Option<u64>,
}

impl SweepOverrides {
    #[must_use]
    pub fn apply(self, base: SweepConfig) -> SweepConfig {
        let mut config = base.with_len_range(
            self.min_len.unwrap_or(base.min_len),
            self.max_len.unwrap_or(base.max_len),
        );
        if let Some(growth_factor) = self.growth_factor {
            config = config.with_growth_factor(growth_factor);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn default_min_len() -> usize {
    1_000
}

fn default_max_len() -> usize {
    10_000_000
}

fn default_growth_factor() -> f64 {
    1.2
}

fn default_value_min() -> i64 {
    0
}

fn default_value_max() -> i64 {
    2
}
