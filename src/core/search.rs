use serde::Serialize;
use tracing::{debug, trace};

use crate::core::feasibility::{flags_possible, place_flags};
use crate::core::peaks::peak_indices;
use crate::core::successor::SuccessorTable;

/// Integer ceiling of `sqrt(n)`.
#[must_use]
pub fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// Maximum number of flags placeable on the peaks of `values`.
///
/// Total for every input: the empty sequence yields `0` and the result never
/// exceeds `ceil_sqrt(values.len())`.
#[must_use]
pub fn max_flags(values: &[i64]) -> usize {
    let table = SuccessorTable::from_values(values);
    max_flags_with_table(values.len(), &table)
}

/// Binary search for the largest feasible flag count over `[0, ceil_sqrt(sequence_len)]`.
///
/// `K` flags span at least `K * (K - 1)` positions, which bounds the search.
/// Feasibility is prefix-closed over the count, so the first infeasible probe
/// rules out everything above it.
#[must_use]
pub fn max_flags_with_table(sequence_len: usize, table: &SuccessorTable) -> usize {
    let max_k = ceil_sqrt(sequence_len);
    let mut best = 0;
    let mut low = 1;
    let mut high = max_k;

    while low <= high {
        let mid = low + (high - low) / 2;
        let possible = flags_possible(mid, table);
        trace!(flags = mid, possible, low, high, "probe flag count");
        if possible {
            best = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    debug!(
        sequence_len,
        peaks_table_len = table.len(),
        max_k,
        max_flags = best,
        "flag search finished"
    );
    best
}

/// Every intermediate stage of one computation, for diagnostics and JSON dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagsSolution {
    pub sequence_len: usize,
    pub peaks: Vec<usize>,
    pub table: SuccessorTable,
    pub max_flags: usize,
    /// Greedy-earliest indices of the placed flags.
    pub placement: Vec<usize>,
}

/// Runs the full pipeline and keeps the peak list, table and placement around.
#[must_use]
pub fn solve(values: &[i64]) -> FlagsSolution {
    let peaks = peak_indices(values);
    let table = SuccessorTable::from_peaks(&peaks);
    let max_flags = max_flags_with_table(values.len(), &table);
    let placement = place_flags(max_flags, &table).unwrap_or_default();

    FlagsSolution {
        sequence_len: values.len(),
        peaks,
        table,
        max_flags,
        placement,
    }
}
