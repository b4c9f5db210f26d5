use crate::types::{Dataset, Sample, SimError};
use crate::variance_tests::f_test;

#[test]
fn test_constructors_reject_small_groups() {
    assert!(matches!(Sample::new(vec![1.0]), Err(SimError::InvalidParameter(_))));
    assert!(matches!(Sample::new(vec![]), Err(SimError::InvalidParameter(_))));
    let one_group = vec![Sample::new(vec![1.0, 2.0]).expect("valid")];
    assert!(matches!(Dataset::new(one_group), Err(SimError::InvalidParameter(_))));
}

/// Tests that deserialization goes through the same checks as the constructors
#[test]
fn test_deserialize_enforces_group_invariants() {
    assert!(serde_json::from_str::<Sample>(r#"{"values":[1.0]}"#).is_err());
    assert!(serde_json::from_str::<Sample>(r#"{"values":[]}"#).is_err());

    let sample: Sample = serde_json::from_str(r#"{"values":[1.0,2.5]}"#).expect("two observations");
    assert_eq!(sample.len(), 2);
    assert!(!sample.is_empty());

    let tiny_groups = r#"{"groups":[{"values":[1.0]},{"values":[]}]}"#;
    assert!(serde_json::from_str::<Dataset>(tiny_groups).is_err());

    let one_group = r#"{"groups":[{"values":[1.0,2.0]}]}"#;
    assert!(serde_json::from_str::<Dataset>(one_group).is_err());
}

#[test]
fn test_serialized_dataset_reads_back() {
    let dataset = Dataset::from_values(vec![vec![1.0, 2.0, 4.0], vec![3.0, 3.5]]).expect("valid");
    let json = serde_json::to_string(&dataset).expect("serializes");
    let back: Dataset = serde_json::from_str(&json).expect("round trips");
    assert_eq!(back, dataset);
    assert!(f_test(&back).is_ok());
}
