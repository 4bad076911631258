mod common;

use carseq::error::SequenceError;
use carseq::evaluator::evaluate;
use carseq::objective::ObjectiveVector;
use common::{brute_force, example_instance, instance_from_text};
use rstest::rstest;

#[test]
fn test_example_identity() {
    let instance = example_instance();
    let objective = evaluate(&instance, &instance.identity_sequence()).unwrap();
    assert_eq!(objective, ObjectiveVector::new(1, 1, 0));
}

#[rstest]
#[case(vec![0, 1, 3, 2, 4, 5], ObjectiveVector::new(3, 0, 0))]
#[case(vec![3, 4, 5, 0, 1, 2], ObjectiveVector::new(1, 1, 0))]
#[case(vec![0, 3, 1, 4, 2, 5], ObjectiveVector::new(5, 0, 0))]
#[case(vec![3, 0, 1, 2, 4, 5], ObjectiveVector::new(2, 1, 0))]
fn test_example_sequences(#[case] sequence: Vec<usize>, #[case] expected: ObjectiveVector) {
    let instance = example_instance();
    assert_eq!(evaluate(&instance, &sequence).unwrap(), expected);
}

// Same line as the example, but the first three cars are already sequenced.
const PREFIX_INSTANCE: &str = "\
6 1 2 3 0 3
2 3 1
0 3 1
1 3 0
";

#[test]
fn test_prefix_windows_and_boundaries() {
    let instance = instance_from_text(PREFIX_INSTANCE);
    // Window [A,A,A] lies inside the prefix; boundary 3 straddles it and counts.
    let objective = evaluate(&instance, &instance.identity_sequence()).unwrap();
    assert_eq!(objective, ObjectiveVector::new(1, 0, 0));
}

#[test]
fn test_straddling_window_counts_prefix_cars() {
    let instance = instance_from_text(PREFIX_INSTANCE);
    // Cars 3 and 5 swapped: nothing changes colorwise, windows see the same cars.
    let objective = evaluate(&instance, &[0, 1, 2, 5, 4, 3]).unwrap();
    assert_eq!(objective, ObjectiveVector::new(1, 0, 0));
}

#[rstest]
#[case(vec![0, 1, 2, 3, 4], SequenceError::WrongLength { expected: 6, found: 5 })]
#[case(vec![0, 1, 2, 3, 4, 4], SequenceError::Malformed { position: 5, index: 4 })]
#[case(vec![0, 1, 2, 3, 4, 6], SequenceError::Malformed { position: 5, index: 6 })]
fn test_malformed_sequences(#[case] sequence: Vec<usize>, #[case] expected: SequenceError) {
    let instance = example_instance();
    assert_eq!(evaluate(&instance, &sequence), Err(expected));
}

const MIXED_INSTANCE: &str = "\
12 3 4 2 0 2
1 2 1
2 3 1
1 4 0
0 3 1 0 1
1 3 0 1 0
2 4 1 1 0
0 2 0 0 1
";

#[test]
fn test_low_priority_split() {
    let instance = instance_from_text(MIXED_INSTANCE);
    let sequence = instance.identity_sequence();
    let objective = evaluate(&instance, &sequence).unwrap();
    assert_eq!(objective, brute_force(&instance, &sequence));
    assert!(objective.low_violations > 0);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(1234)]
fn test_full_pass_matches_definition(#[case] seed: u64) {
    let instance = instance_from_text(MIXED_INSTANCE);
    let mut rng = fastrand::Rng::with_seed(seed);
    let sequence = carseq::candidates::random_sequence(&mut rng, &instance);
    assert_eq!(
        evaluate(&instance, &sequence).unwrap(),
        brute_force(&instance, &sequence)
    );
}

#[test]
fn test_line_shorter_than_window() {
    let instance = instance_from_text("2 1 1 2 0 0\n1 5 1\n0 2 1\n");
    let objective = evaluate(&instance, &[1, 0]).unwrap();
    assert_eq!(objective, ObjectiveVector::new(0, 0, 0));
}
