//! # Equation System Generator
//!
//! Builds random 2×2 integer linear systems with a guaranteed unique
//! integer solution.
//!
//! The construction works backwards: instead of solving a random system, it
//! picks the solution first and derives the right-hand sides by
//! substitution. That keeps everything in exact integer arithmetic; the only
//! thing left to check is that the determinant is nonzero, and draws that
//! fail it are discarded and retried under a fixed attempt budget.

use equiz_common::algebra::system::EquationSystem;
use rand::Rng;
use thiserror::Error;
use tracing::trace;

/// Coefficients a, b, d, e are drawn from this inclusive range.
pub const COEFF_MIN: i32 = -5;
pub const COEFF_MAX: i32 = 5;

/// Solution components are drawn from this inclusive range.
pub const SOLUTION_MIN: i32 = -10;
pub const SOLUTION_MAX: i32 = 10;

/// Degenerate draws are retried at most this many times before giving up.
pub const MAX_ATTEMPTS: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GenerationError {
    /// The attempt budget ran out without a nonzero determinant.
    ///
    /// Recoverable: the caller should warn the user and offer a retry.
    #[error("no solvable system found within {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Generates a solvable system using the default attempt budget.
pub fn generate<R: Rng>(rng: &mut R) -> Result<EquationSystem, GenerationError> {
    generate_with(rng, MAX_ATTEMPTS)
}

/// Convenience entry point drawing from the thread-local generator.
///
/// `None` means the attempt budget ran out; callers should surface a
/// warning and let the user retry.
pub fn generate_equation_system() -> Option<EquationSystem> {
    generate(&mut rand::rng()).ok()
}

/// Generates a solvable system, retrying degenerate draws up to
/// `max_attempts` times.
///
/// Each attempt draws the four coefficients uniformly from
/// [`COEFF_MIN`], [`COEFF_MAX`], repairs an all-zero row, picks the target
/// solution from [`SOLUTION_MIN`], [`SOLUTION_MAX`], and derives the
/// constants by substitution. The attempt is kept iff the determinant is
/// nonzero, which makes the chosen solution the unique one.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    max_attempts: u32,
) -> Result<EquationSystem, GenerationError> {
    for attempt in 0..max_attempts {
        let mut a = rng.random_range(COEFF_MIN..=COEFF_MAX);
        let b = rng.random_range(COEFF_MIN..=COEFF_MAX);
        let d = rng.random_range(COEFF_MIN..=COEFF_MAX);
        let mut e = rng.random_range(COEFF_MIN..=COEFF_MAX);

        // Row repair: each equation must keep at least one nonzero
        // coefficient. Only `a` (resp. `e`) is redrawn; the lopsidedness is
        // part of the sampling distribution and must stay as-is.
        while a == 0 && b == 0 {
            a = rng.random_range(COEFF_MIN..=COEFF_MAX);
        }
        while d == 0 && e == 0 {
            e = rng.random_range(COEFF_MIN..=COEFF_MAX);
        }

        let solution_x = rng.random_range(SOLUTION_MIN..=SOLUTION_MAX);
        let solution_y = rng.random_range(SOLUTION_MIN..=SOLUTION_MAX);

        let system = EquationSystem {
            eq1_coeffs: (a, b),
            eq1_const: a * solution_x + b * solution_y,
            eq2_coeffs: (d, e),
            eq2_const: d * solution_x + e * solution_y,
            solution_x,
            solution_y,
        };

        if system.determinant() != 0 {
            return Ok(system);
        }
        trace!("discarding degenerate draw on attempt {attempt}");
    }

    Err(GenerationError::Exhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_systems_uphold_all_invariants() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..50 {
                let system = generate(&mut rng).expect("budget should never run out");

                assert_ne!(system.determinant(), 0, "degenerate system: {system:?}");
                assert_ne!(system.eq1_coeffs, (0, 0), "equation 1 is not a line");
                assert_ne!(system.eq2_coeffs, (0, 0), "equation 2 is not a line");
                assert!(
                    system.is_satisfied_by(system.solution_x, system.solution_y),
                    "stored solution does not satisfy {system:?}"
                );
            }
        }
    }

    #[test]
    fn coefficients_and_solutions_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let system = generate(&mut rng).unwrap();
            let (a, b) = system.eq1_coeffs;
            let (d, e) = system.eq2_coeffs;
            for coeff in [a, b, d, e] {
                assert!((COEFF_MIN..=COEFF_MAX).contains(&coeff));
            }
            assert!((SOLUTION_MIN..=SOLUTION_MAX).contains(&system.solution_x));
            assert!((SOLUTION_MIN..=SOLUTION_MAX).contains(&system.solution_y));
        }
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(generate(&mut first), generate(&mut second));
        }
    }

    #[test]
    fn thread_local_entry_point_produces_valid_systems() {
        for _ in 0..20 {
            let system = generate_equation_system().expect("budget should never run out");
            assert_ne!(system.determinant(), 0);
            assert!(system.is_satisfied_by(system.solution_x, system.solution_y));
        }
    }

    #[test]
    fn zero_attempt_budget_reports_exhaustion() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_with(&mut rng, 0),
            Err(GenerationError::Exhausted { attempts: 0 })
        );
    }

    #[test]
    fn exhaustion_message_names_the_budget() {
        let err = GenerationError::Exhausted { attempts: 100 };
        assert_eq!(
            err.to_string(),
            "no solvable system found within 100 attempts"
        );
    }
}
