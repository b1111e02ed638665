//! Law and scenario tests for the interaction algebra.
//!
//! Property tests cover the monad laws for patterns (observational
//! equivalence under a common stepper), the comonad laws for matters
//! (identity-stable via the duplicate memo), and termination of pairing for
//! finite patterns.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use weft::{
    drive, pair, run, run_traced, Answer, DirectionKind, Matter, PairedSignature, Pattern,
    TableSignature,
};

/// Signature with integer chain positions plus the graft positions used by
/// the bind-law functions.
fn law_signature(depth: usize) -> TableSignature {
    let mut signature = TableSignature::new()
        .with_position("f", DirectionKind::Int)
        .with_position("g", DirectionKind::Int);
    for index in 0..depth {
        signature = signature.with_position(format!("step-{}", index), DirectionKind::Int);
    }
    signature
}

/// A finite pattern asking `depth` integer questions and summing the answers.
fn summing_pattern(depth: usize, acc: i64) -> Pattern<TableSignature, i64> {
    if depth == 0 {
        return Pattern::pure(acc);
    }
    Pattern::suspend(format!("step-{}", depth - 1), move |answer| {
        let n = match answer {
            Answer::Int(n) => n,
            _ => 0,
        };
        summing_pattern(depth - 1, acc.wrapping_add(n))
    })
}

/// One-question graft used as `f` in the bind laws.
fn graft_f(a: i64) -> Pattern<TableSignature, i64> {
    Pattern::suspend("f".to_string(), move |answer| match answer {
        Answer::Int(n) => Pattern::pure(a.wrapping_add(n)),
        _ => Pattern::pure(a),
    })
}

/// One-question graft used as `g` in the bind laws.
fn graft_g(a: i64) -> Pattern<TableSignature, i64> {
    Pattern::suspend("g".to_string(), move |answer| match answer {
        Answer::Int(n) => Pattern::pure(a.wrapping_mul(2).wrapping_sub(n)),
        _ => Pattern::pure(a),
    })
}

/// Stepper handing out `answers` in ask order.
fn scripted(answers: Vec<i64>) -> impl FnMut(&String) -> Option<Answer> {
    let mut remaining = answers.into_iter();
    move |_position: &String| remaining.next().map(Answer::Int)
}

fn install_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

proptest! {
    /// bind(pure(a), f) == f(a).
    #[test]
    fn prop_bind_left_identity(a in -1_000i64..1_000, answer in -1_000i64..1_000) {
        let signature = law_signature(0);

        let lhs = run(
            &signature,
            Pattern::pure(a).and_then(graft_f),
            scripted(vec![answer]),
        ).unwrap();
        let rhs = run(&signature, graft_f(a), scripted(vec![answer])).unwrap();

        prop_assert_eq!(lhs, rhs);
    }

    /// bind(m, pure) == m, observed under a common stepper.
    #[test]
    fn prop_bind_right_identity(
        answers in proptest::collection::vec(-1_000i64..1_000, 0..8),
    ) {
        let depth = answers.len();
        let signature = law_signature(depth);

        let (plain, plain_steps) = run_traced(
            &signature,
            summing_pattern(depth, 0),
            scripted(answers.clone()),
        ).unwrap();
        let (bound, bound_steps) = run_traced(
            &signature,
            summing_pattern(depth, 0).and_then(Pattern::pure),
            scripted(answers),
        ).unwrap();

        prop_assert_eq!(plain, bound);
        prop_assert_eq!(plain_steps.steps(), bound_steps.steps());
    }

    /// bind(bind(m, f), g) == bind(m, a -> bind(f(a), g)).
    #[test]
    fn prop_bind_associativity(
        answers in proptest::collection::vec(-1_000i64..1_000, 2..10),
    ) {
        let depth = answers.len() - 2;
        let signature = law_signature(depth);

        let (lhs, lhs_steps) = run_traced(
            &signature,
            summing_pattern(depth, 0).and_then(graft_f).and_then(graft_g),
            scripted(answers.clone()),
        ).unwrap();
        let (rhs, rhs_steps) = run_traced(
            &signature,
            summing_pattern(depth, 0).and_then(|a| graft_f(a).and_then(graft_g)),
            scripted(answers),
        ).unwrap();

        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(lhs_steps.steps(), rhs_steps.steps());
    }

    /// Comonad laws hold for any seed, up to instance identity of the
    /// memoized duplicate.
    #[test]
    fn prop_comonad_laws(seed in any::<i64>()) {
        let matter: Matter<TableSignature, i64> =
            Matter::cofree(seed, |_position: &String| Answer::Unit);

        // extract(duplicate(w)) == w.
        let duplicated = matter.duplicate();
        prop_assert!(Matter::same_instance(duplicated.extract(), &matter));

        // map(extract, duplicate(w)) == w.
        let rebuilt = duplicated.map(|focus| *focus.extract());
        prop_assert!(Matter::observably_eq(&rebuilt, &matter));

        // duplicate(duplicate(w)) == map(duplicate, duplicate(w)).
        let left = duplicated.duplicate();
        let right = duplicated.map(|focus| focus.duplicate());
        prop_assert!(Matter::same_instance(left.extract(), &duplicated));
        prop_assert!(Matter::same_instance(right.extract(), &duplicated));
    }

    /// Pairing a finite pattern terminates in a leaf pairing the pattern's
    /// own result with the matter's unchanged state.
    #[test]
    fn prop_pairing_terminates_with_unchanged_state(
        seed in any::<i32>(),
        answers in proptest::collection::vec(-1_000i64..1_000, 0..8),
    ) {
        let depth = answers.len();
        let signature = law_signature(depth);

        let unpaired = run(
            &signature,
            summing_pattern(depth, 0),
            scripted(answers.clone()),
        ).unwrap();

        let matter: Matter<TableSignature, i32> =
            Matter::cofree(seed, |_position: &String| Answer::Unit);
        let paired_signature = PairedSignature::new(signature.clone(), signature);

        let mut remaining = answers.into_iter();
        let (value, state) = run(
            &paired_signature,
            pair(summing_pattern(depth, 0), matter),
            move |position: &(String, i32)| {
                // The base algorithm never advances the matter.
                assert_eq!(position.1, seed, "matter state drifted during pairing");
                remaining.next().map(|n| (Answer::Int(n), Answer::Unit))
            },
        ).unwrap();

        prop_assert_eq!(value, unpaired);
        prop_assert_eq!(state, seed);
    }
}

#[test]
fn test_scenario_pure_pairs_with_constant_matter() {
    install_tracing();

    let matter: Matter<TableSignature, String> =
        Matter::cofree("x".to_string(), |_position: &String| {
            Answer::Text("x".to_string())
        });
    let paired = pair(Pattern::<TableSignature, i64>::pure(5), matter);

    match paired {
        Pattern::Pure(value) => assert_eq!(value, (5, "x".to_string())),
        Pattern::Suspend { .. } => panic!("expected terminal pattern"),
    }
}

#[test]
fn test_scenario_drive_matches_direct_run() {
    install_tracing();

    let signature = law_signature(4);
    let matter: Matter<TableSignature, u8> = Matter::cofree(9, |position: &String| {
        Answer::Int(position.len() as i64)
    });

    let direct = run(&signature, summing_pattern(4, 0), |position: &String| {
        Some(matter.respond(position))
    })
    .unwrap();
    let (driven, state) = drive(&signature, summing_pattern(4, 0), &matter).unwrap();

    assert_eq!(driven, direct);
    assert_eq!(state, 9);
}
