mod reference_values;

use crate::types::Dataset;

pub(super) fn two_groups() -> Dataset {
    Dataset::from_values(vec![
        vec![4.2, 5.1, 3.9, 6.0, 5.5, 4.8],
        vec![2.0, 7.5, 5.0, 8.1, 1.2, 6.3, 4.4],
    ])
    .expect("valid groups")
}

pub(super) fn three_groups() -> Dataset {
    Dataset::from_values(vec![
        vec![4.2, 5.1, 3.9, 6.0, 5.5, 4.8],
        vec![2.0, 7.5, 5.0, 8.1, 1.2, 6.3, 4.4],
        vec![3.3, 3.9, 4.1, 3.6, 4.0],
    ])
    .expect("valid groups")
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {}, got {} (tolerance {})",
        what,
        expected,
        actual,
        tolerance
    );
}
