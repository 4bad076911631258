mod common;

use carseq::candidates::{
    color_batched_sequence, rank_candidates, random_feasible_sequence, random_sequence,
    sample_and_rank, RankedCandidate,
};
use carseq::config::SampleParams;
use carseq::objective::compare;
use carseq::validator;
use common::instance_from_text;
use std::cmp::Ordering;

// Three colors of four cars each, batch limit 2, first two cars fixed.
const COLORS_INSTANCE: &str = "\
12 1 3 2 0 2
1 3 1
0 4 1
1 4 0
2 4 0
";

#[test]
fn test_random_sequence_keeps_prefix() {
    let instance = instance_from_text(COLORS_INSTANCE);
    let mut rng = fastrand::Rng::with_seed(1);
    for _ in 0..20 {
        let sequence = random_sequence(&mut rng, &instance);
        assert_eq!(&sequence[..2], &[0, 1]);
        assert!(validator::check_permutation(&sequence, 12).is_ok());
    }
}

#[test]
fn test_random_feasible_sequence() {
    let instance = instance_from_text(COLORS_INSTANCE);
    let mut rng = fastrand::Rng::with_seed(2);
    let sequence = random_feasible_sequence(&mut rng, &instance, 10_000).unwrap();
    let feasibility = validator::validate_full(&instance, &sequence).unwrap();
    assert!(feasibility.is_feasible());
}

#[test]
fn test_color_batched_sequence() {
    let instance = instance_from_text(COLORS_INSTANCE);
    let sequence = color_batched_sequence(&instance);
    assert_eq!(&sequence[..2], &[0, 1]);
    let feasibility = validator::validate_full(&instance, &sequence).unwrap();
    assert!(feasibility.is_feasible());
    // Batches of two: five color changes at most after the prefix.
    let objective = carseq::evaluate(&instance, &sequence).unwrap();
    assert!(objective.color_changes <= 5, "{:?}", objective);
}

#[test]
fn test_rank_candidates_orders_best_first() {
    let instance = instance_from_text(COLORS_INSTANCE);
    let mut rng = fastrand::Rng::with_seed(3);
    let candidates: Vec<Vec<usize>> = (0..30)
        .map(|_| random_sequence(&mut rng, &instance))
        .collect();

    let ranked = rank_candidates(&instance, candidates).unwrap();
    assert_eq!(ranked.len(), 30);
    let order = instance.objective_order();
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (fa, fb) = (a.feasibility.is_feasible(), b.feasibility.is_feasible());
        assert!(fa || !fb);
        if fa == fb {
            assert_ne!(
                compare(&a.objective, &b.objective, order),
                Ordering::Greater
            );
        }
    }
}

#[test]
fn test_rank_candidates_rejects_malformed() {
    let instance = instance_from_text(COLORS_INSTANCE);
    assert!(rank_candidates(&instance, vec![vec![0; 12]]).is_err());
}

fn sequences(ranked: &[RankedCandidate]) -> Vec<Vec<usize>> {
    ranked.iter().map(|c| c.sequence.clone()).collect()
}

#[test]
fn test_sample_and_rank_is_reproducible() {
    let instance = instance_from_text(COLORS_INSTANCE);
    let params = SampleParams {
        samples: 16,
        seed: Some(42),
        threads: Some(2),
        ..Default::default()
    };
    let first = sample_and_rank(&instance, &params).unwrap();
    let second = sample_and_rank(&instance, &params).unwrap();
    assert_eq!(first.len(), 18);
    assert_eq!(sequences(&first), sequences(&second));
    assert!(first[0].feasibility.is_feasible());
}
