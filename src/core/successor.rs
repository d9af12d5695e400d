use serde::{Deserialize, Serialize};

use crate::core::peaks::peak_indices;
use crate::error::{FlagsError, FlagsResult};

/// Dense lookup from a rank to the nearest peak index at or after it.
///
/// The table covers ranks `0..=last_peak`; entry `r` holds the smallest peak
/// index `>= r`. Ranks past the last peak have no successor. The table is
/// empty when the sequence has no peaks.
///
/// Serializes as a plain array. Deserialized arrays are checked against the
/// same layout `from_peaks` produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct SuccessorTable {
    next_peak: Vec<usize>,
}

impl SuccessorTable {
    /// Builds the table from strictly increasing peak indices in one forward pass.
    #[must_use]
    pub fn from_peaks(peaks: &[usize]) -> Self {
        let capacity = peaks.last().map_or(0, |&last| last + 1);
        let mut next_peak = Vec::with_capacity(capacity);
        for &peak in peaks {
            debug_assert!(
                next_peak.len() <= peak,
                "peak indices must be strictly increasing"
            );
            // Ranks `filled..=peak` are still unassigned and all resolve to `peak`.
            let filled = next_peak.len();
            next_peak.resize(filled.max(peak + 1), peak);
        }
        Self { next_peak }
    }

    /// Detects peaks in `values` and builds their table.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        Self::from_peaks(&peak_indices(values))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.next_peak.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_peak.is_empty()
    }

    /// Index of the earliest peak, if any.
    #[must_use]
    pub fn first_peak(&self) -> Option<usize> {
        self.next_peak.first().copied()
    }

    /// Smallest peak index `>= rank`, or `None` once `rank` runs past the last peak.
    #[must_use]
    pub fn next_peak_at_or_after(&self, rank: usize) -> Option<usize> {
        self.next_peak.get(rank).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.next_peak
    }
}

impl TryFrom<Vec<usize>> for SuccessorTable {
    type Error = FlagsError;

    /// Accepts a raw table only if some strictly increasing peak list builds it.
    ///
    /// Every entry is either its own rank (a peak) or equals the entry after
    /// it, and the last entry is the last rank.
    fn try_from(next_peak: Vec<usize>) -> FlagsResult<Self> {
        if let Some(&last) = next_peak.last() {
            if last + 1 != next_peak.len() {
                return Err(FlagsError::InvalidTable(format!(
                    "last entry {last} must equal the last rank {}",
                    next_peak.len() - 1
                )));
            }
        }

        for (rank, pair) in next_peak.windows(2).enumerate() {
            if pair[0] != rank && pair[0] != pair[1] {
                return Err(FlagsError::InvalidTable(format!(
                    "entry {rank} points to {} but the next peak at or after it is {}",
                    pair[0], pair[1]
                )));
            }
        }

        Ok(Self { next_peak })
    }
}

impl From<SuccessorTable> for Vec<usize> {
    fn from(table: SuccessorTable) -> Self {
        table.next_peak
    }
}

#[cfg(test)]
mod tests {
    use super::SuccessorTable;

    #[test]
    fn gaps_resolve_to_the_following_peak() {
        let table = SuccessorTable::from_peaks(&[0, 7, 9, 15]);
        assert_eq!(
            table.as_slice(),
            &[0, 7, 7, 7, 7, 7, 7, 7, 9, 9, 15, 15, 15, 15, 15, 15]
        );
        assert_eq!(table.next_peak_at_or_after(16), None);
    }

    #[test]
    fn empty_peaks_give_empty_table() {
        let table = SuccessorTable::from_peaks(&[]);
        assert!(table.is_empty());
        assert_eq!(table.first_peak(), None);
    }

    #[test]
    fn raw_tables_must_match_a_peak_layout() {
        let table = SuccessorTable::from_peaks(&[0, 7, 9, 15]);
        let rebuilt = SuccessorTable::try_from(table.as_slice().to_vec()).expect("valid table");
        assert_eq!(rebuilt, table);

        assert!(SuccessorTable::try_from(vec![0, 0, 0]).is_err());
        assert!(SuccessorTable::try_from(vec![2, 1, 2]).is_err());
        assert!(SuccessorTable::try_from(vec![3, 3, 3]).is_err());
        assert!(SuccessorTable::try_from(Vec::new()).is_ok());
    }
}
