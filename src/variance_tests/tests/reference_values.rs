//! Reference values computed independently at 30 significant digits.

use super::{assert_close, three_groups, two_groups};
use crate::types::{DegreesOfFreedom, TestKind};
use crate::variance_tests::descriptive::{mean, median, variance};
use crate::variance_tests::{bartlett_test, brown_forsythe_test, f_test, levene_test};

#[test]
fn test_descriptive_helpers() {
    let a = [4.2, 5.1, 3.9, 6.0, 5.5, 4.8];
    assert_close(mean(&a), 4.916666666666667, 1e-12, "mean");
    assert_close(variance(&a), 0.6216666666666667, 1e-12, "variance");
    assert_close(median(&a), 4.95, 1e-12, "even median");
    assert_close(median(&[2.0, 7.5, 5.0, 8.1, 1.2, 6.3, 4.4]), 5.0, 1e-12, "odd median");
}

#[test]
fn test_f_test_two_groups() {
    let result = f_test(&two_groups()).expect("defined");
    assert_eq!(result.test, TestKind::FTest);
    assert_eq!(result.df, DegreesOfFreedom::Pair(5.0, 6.0));
    assert_close(result.statistic, 0.0902835408022130, 1e-10, "F statistic");
    assert_close(result.p_value, 0.0184145683206390, 1e-8, "F p-value");
}

/// Tests that swapping the groups inverts the statistic but keeps the two-sided p-value
#[test]
fn test_f_test_is_symmetric_in_p_value() {
    let forward = f_test(&two_groups()).expect("defined");
    let groups = two_groups().groups().to_vec();
    let swapped = crate::types::Dataset::pair(groups[1].clone(), groups[0].clone());
    let reverse = f_test(&swapped).expect("defined");
    assert_close(reverse.statistic, 11.0762160091919, 1e-9, "reversed F statistic");
    assert_close(reverse.p_value, forward.p_value, 1e-10, "p-value symmetry");
}

#[test]
fn test_bartlett_two_and_three_groups() {
    let two = bartlett_test(&two_groups()).expect("defined");
    assert_eq!(two.df, DegreesOfFreedom::Single(1.0));
    assert_close(two.statistic, 5.63636168832630, 1e-9, "Bartlett k=2 statistic");
    assert_close(two.p_value, 0.0175916762134445, 1e-8, "Bartlett k=2 p-value");

    let three = bartlett_test(&three_groups()).expect("defined");
    assert_eq!(three.df, DegreesOfFreedom::Single(2.0));
    assert_close(three.statistic, 14.8113678530223, 1e-9, "Bartlett k=3 statistic");
    assert_close(three.p_value, 0.000607788300552424, 1e-9, "Bartlett k=3 p-value");
}

#[test]
fn test_levene_mean_centered() {
    let two = levene_test(&two_groups()).expect("defined");
    assert_eq!(two.test, TestKind::Levene);
    assert_eq!(two.df, DegreesOfFreedom::Pair(1.0, 11.0));
    assert_close(two.statistic, 5.80300138771977, 1e-9, "Levene k=2 statistic");
    assert_close(two.p_value, 0.0346793502284783, 1e-8, "Levene k=2 p-value");

    let three = levene_test(&three_groups()).expect("defined");
    assert_eq!(three.df, DegreesOfFreedom::Pair(2.0, 15.0));
    assert_close(three.statistic, 6.63297801334887, 1e-9, "Levene k=3 statistic");
    assert_close(three.p_value, 0.00863389674444928, 1e-8, "Levene k=3 p-value");
}

#[test]
fn test_brown_forsythe_median_centered() {
    let two = brown_forsythe_test(&two_groups()).expect("defined");
    assert_eq!(two.test, TestKind::BrownForsythe);
    assert_close(two.statistic, 5.57311194202669, 1e-9, "Brown-Forsythe k=2 statistic");
    assert_close(two.p_value, 0.0377642328727742, 1e-8, "Brown-Forsythe k=2 p-value");

    let three = brown_forsythe_test(&three_groups()).expect("defined");
    assert_close(three.statistic, 6.43042531210265, 1e-9, "Brown-Forsythe k=3 statistic");
    assert_close(three.p_value, 0.00962114266129341, 1e-8, "Brown-Forsythe k=3 p-value");
}

#[test]
fn test_apply_dispatches_by_kind() {
    let dataset = two_groups();
    for test in TestKind::ALL {
        let result = test.apply(&dataset).expect("defined");
        assert_eq!(result.test, test);
    }
}
