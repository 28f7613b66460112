#![cfg(test)]
use equiz_common::algebra::judgment::JudgmentKind;
use equiz_core::generator;
use equiz_core::session::SessionState;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plays one full problem through the public API: generate, submit the
/// known solution as text, and expect a success judgment embedding it.
#[test]
fn full_round_trip_with_correct_answer() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut session = SessionState::new();

    session.renew(&mut rng).expect("generation should succeed");
    let problem = session.problem.expect("a problem must be posed");

    let x = problem.solution_x.to_string();
    let y = problem.solution_y.to_string();
    let judgment = session.submit(&x, &y).expect("problem is posed");

    assert_eq!(judgment.kind, JudgmentKind::Success);
    assert!(judgment.message.contains(&format!("x = {}", problem.solution_x)));
    assert!(judgment.message.contains(&format!("y = {}", problem.solution_y)));
}

#[test]
fn wrong_then_correct_answer_recovers() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut session = SessionState::new();
    session.renew(&mut rng).unwrap();
    let problem = session.problem.unwrap();

    // An answer outside the solution range is always wrong.
    let judgment = session.submit("99", "99").unwrap();
    assert_eq!(judgment.kind, JudgmentKind::Error);
    assert_eq!(session.user_x, "99");

    let x = problem.solution_x.to_string();
    let y = problem.solution_y.to_string();
    let judgment = session.submit(&x, &y).unwrap();
    assert_eq!(judgment.kind, JudgmentKind::Success);
}

#[test]
fn decimal_text_forms_of_the_solution_are_accepted() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = SessionState::new();
    session.renew(&mut rng).unwrap();
    let problem = session.problem.unwrap();

    let x = format!("{}.0", problem.solution_x);
    let y = format!("{}.000", problem.solution_y);
    let judgment = session.submit(&x, &y).unwrap();
    assert_eq!(judgment.kind, JudgmentKind::Success);
}

#[test]
fn renewal_clears_the_previous_attempt() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut session = SessionState::new();
    session.renew(&mut rng).unwrap();

    session.submit("1", "2");
    assert!(session.result.is_some());

    session.renew(&mut rng).unwrap();
    assert!(session.problem.is_some());
    assert!(session.result.is_none());
    assert!(session.user_x.is_empty());
    assert!(session.user_y.is_empty());
}

/// A worksheet-sized batch from one seed upholds every generator invariant.
#[test]
fn generated_batch_is_solvable_end_to_end() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let system = generator::generate(&mut rng).expect("budget should suffice");
        assert_ne!(system.determinant(), 0);
        assert!(system.is_satisfied_by(system.solution_x, system.solution_y));
    }
}
