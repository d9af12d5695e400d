#[cfg(feature = "parallel-peaks")]
use rayon::prelude::*;

/// Returns `true` when `values[index]` is a strict local maximum.
///
/// A missing neighbor at either boundary counts as satisfied, so a lone
/// element is always a peak and an edge element only has to beat its single
/// neighbor. Equal neighbors never produce a peak. Out-of-range indices are
/// not peaks.
#[must_use]
pub fn is_peak(values: &[i64], index: usize) -> bool {
    let Some(&value) = values.get(index) else {
        return false;
    };

    let greater_than_prev = index == 0 || value > values[index - 1];
    let greater_than_next = index + 1 == values.len() || value > values[index + 1];
    greater_than_prev && greater_than_next
}

/// Scans `values` once and returns the strictly increasing list of peak indices.
#[must_use]
pub fn peak_indices(values: &[i64]) -> Vec<usize> {
    // Every index reads its neighbors from the shared slice, so splitting the
    // scan across workers needs no boundary reconciliation.
    #[cfg(feature = "parallel-peaks")]
    {
        (0..values.len())
            .into_par_iter()
            .filter(|&index| is_peak(values, index))
            .collect()
    }

    #[cfg(not(feature = "parallel-peaks"))]
    {
        (0..values.len())
            .filter(|&index| is_peak(values, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{is_peak, peak_indices};

    #[test]
    fn boundaries_are_compared_against_their_only_neighbor() {
        let values = [3, 1, 2];
        assert!(is_peak(&values, 0));
        assert!(!is_peak(&values, 1));
        assert!(is_peak(&values, 2));
        assert!(!is_peak(&values, 3));
    }

    #[test]
    fn plateau_is_not_a_peak() {
        assert_eq!(peak_indices(&[0, 2, 2, 0]), Vec::<usize>::new());
        assert_eq!(peak_indices(&[5, 5]), Vec::<usize>::new());
    }
}
