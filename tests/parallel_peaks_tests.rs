#![cfg(feature = "parallel-peaks")]

use peaks_flags::core::{is_peak, max_flags, peak_indices};
use peaks_flags::harness::SequenceGenerator;

#[test]
fn parallel_scan_keeps_sequential_order() {
    let mut generator = SequenceGenerator::seeded(17, 0, 2).expect("generator");
    let values = generator.generate(250_000);

    let sequential: Vec<usize> = (0..values.len())
        .filter(|&index| is_peak(&values, index))
        .collect();
    let parallel = peak_indices(&values);

    assert_eq!(parallel, sequential);
    assert!(parallel.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn parallel_scan_handles_boundaries() {
    assert_eq!(peak_indices(&[]), Vec::<usize>::new());
    assert_eq!(peak_indices(&[4]), vec![0]);
    assert_eq!(peak_indices(&[3, 1, 2]), vec![0, 2]);
    assert_eq!(max_flags(&[1, 0, 1, 2, 2, 2, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1]), 3);
}
