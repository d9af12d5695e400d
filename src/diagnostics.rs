//! Text rendering of inputs and intermediate stages.
//!
//! These helpers only format; they never feed back into the computation.

use std::fmt::{self, Display, Write as _};

use crate::core::{SuccessorTable, flags_possible, peak_indices};
use crate::error::{FlagsError, FlagsResult};

/// Renders `[a, b, c]`, or `[ ]` for an empty slice.
#[must_use]
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "[ ]".to_owned();
    }

    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

/// Parses integers separated by commas and/or whitespace.
pub fn parse_sequence(raw: &str) -> FlagsResult<Vec<i64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|err| {
                FlagsError::InvalidSequence(format!("`{token}` is not an integer: {err}"))
            })
        })
        .collect()
}

/// Input, peaks and successor table of one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugReport {
    pub values: Vec<i64>,
    pub peaks: Vec<usize>,
    pub table: SuccessorTable,
}

impl DebugReport {
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        let peaks = peak_indices(values);
        let table = SuccessorTable::from_peaks(&peaks);
        Self {
            values: values.to_vec(),
            peaks,
            table,
        }
    }
}

impl Display for DebugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input vector: {}", format_sequence(&self.values))?;
        writeln!(f, "Peak indices: {}", format_sequence(&self.peaks))?;
        writeln!(f, "Next peak is: {}", format_sequence(self.table.as_slice()))
    }
}

/// Probes `k = 0, 1, ...` and stops after the first infeasible count.
#[must_use]
pub fn feasibility_trace(values: &[i64]) -> Vec<(usize, bool)> {
    let table = SuccessorTable::from_values(values);
    let mut trace = Vec::new();
    for flags in 0.. {
        let possible = flags_possible(flags, &table);
        trace.push((flags, possible));
        if !possible {
            break;
        }
    }
    trace
}

#[must_use]
pub fn render_feasibility_trace(trace: &[(usize, bool)]) -> String {
    let mut out = String::new();
    for (flags, possible) in trace {
        let _ = writeln!(out, "Possible with {flags}? {possible}");
    }
    out
}
