use peaks_flags::core::{
    SuccessorTable, ceil_sqrt, flags_possible, max_flags, peak_indices, place_flags, solve,
};

#[test]
fn empty_sequence_has_no_flags() {
    assert_eq!(max_flags(&[]), 0);
}

#[test]
fn singleton_sequence_takes_one_flag() {
    assert_eq!(peak_indices(&[0]), vec![0]);
    assert_eq!(max_flags(&[0]), 1);
    assert_eq!(max_flags(&[-7]), 1);
}

#[test]
fn strictly_increasing_sequence_peaks_only_at_the_end() {
    let values = [0, 1, 2, 3, 4];
    assert_eq!(peak_indices(&values), vec![4]);
    assert_eq!(max_flags(&values), 1);
}

#[test]
fn strictly_decreasing_sequence_peaks_only_at_the_start() {
    let values = [4, 3, 2, 1, 0];
    assert_eq!(peak_indices(&values), vec![0]);
    assert_eq!(max_flags(&values), 1);
}

#[test]
fn flat_sequence_has_no_peaks() {
    let values = [3; 9];
    assert!(peak_indices(&values).is_empty());
    assert_eq!(max_flags(&values), 0);
}

#[test]
fn short_fixture_places_two_flags() {
    let values = [0, 2, 3, 2, 4];
    assert_eq!(peak_indices(&values), vec![2, 4]);

    let table = SuccessorTable::from_values(&values);
    assert_eq!(table.as_slice(), &[2, 2, 2, 4, 4]);
    assert!(flags_possible(2, &table));
    assert!(!flags_possible(3, &table));
    assert_eq!(max_flags(&values), 2);
}

#[test]
fn plateau_fixture_places_three_flags() {
    let values = [1, 0, 1, 2, 2, 2, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1];
    assert_eq!(peak_indices(&values), vec![0, 7, 9, 15]);

    let table = SuccessorTable::from_values(&values);
    assert!(flags_possible(3, &table));
    assert!(!flags_possible(4, &table));
    assert_eq!(place_flags(3, &table), Some(vec![0, 7, 15]));
    assert_eq!(max_flags(&values), 3);
}

#[test]
fn alternating_sequence_reaches_the_sqrt_bound() {
    let values: Vec<i64> = (0..100).map(|i| i % 2).collect();
    assert_eq!(ceil_sqrt(values.len()), 10);
    assert_eq!(max_flags(&values), 10);
}

#[test]
fn result_is_monotone_around_the_maximum() {
    let values = [5, 1, 4, 1, 6, 0, 3, 2, 8, 1, 7, 0, 9, 2, 2, 5, 1, 6, 0, 4];
    let table = SuccessorTable::from_values(&values);
    let best = max_flags(&values);

    for flags in 0..=best {
        assert!(flags_possible(flags, &table), "flags={flags}");
    }
    assert!(!flags_possible(best + 1, &table));
}

#[test]
fn repeated_calls_are_identical() {
    let values = [2, 9, 1, 9, 1, 9, 3, 0, 8, 1, 7];
    let first = max_flags(&values);
    let second = max_flags(&values);
    assert_eq!(first, second);
    assert_eq!(solve(&values), solve(&values));
}

#[test]
fn solve_keeps_every_stage() {
    let values = [0, 2, 3, 2, 4];
    let solution = solve(&values);

    assert_eq!(solution.sequence_len, 5);
    assert_eq!(solution.peaks, vec![2, 4]);
    assert_eq!(solution.table.as_slice(), &[2, 2, 2, 4, 4]);
    assert_eq!(solution.max_flags, 2);
    assert_eq!(solution.placement, vec![2, 4]);
}

#[test]
fn solution_serializes_table_as_plain_array() {
    let solution = solve(&[0, 2, 3, 2, 4]);
    let json: serde_json::Value = serde_json::to_value(&solution).expect("serialize solution");

    assert_eq!(json["table"], serde_json::json!([2, 2, 2, 4, 4]));
    assert_eq!(json["max_flags"], serde_json::json!(2));
}

#[test]
fn deserialized_table_must_follow_peak_layout() {
    let table: SuccessorTable = serde_json::from_str("[2, 2, 2, 4, 4]").expect("valid table");
    assert_eq!(table, SuccessorTable::from_values(&[0, 2, 3, 2, 4]));
    assert!(flags_possible(2, &table));

    assert!(serde_json::from_str::<SuccessorTable>("[0, 0, 0]").is_err());
    assert!(serde_json::from_str::<SuccessorTable>("[1, 0]").is_err());
}
