//! Answer checking.
//!
//! Takes the raw text the user typed and grades it against the stored
//! solution. Solutions are integers, but the user may type decimals, so the
//! comparison happens in `f64` with a tight tolerance that only absorbs
//! text-to-float conversion noise.

use equiz_common::algebra::judgment::Judgment;
use equiz_common::algebra::system::EquationSystem;

/// Absorbs decimal-text conversion noise; anything further off is wrong.
pub const TOLERANCE: f64 = 1e-9;

/// Grades a submitted `(x, y)` pair against `problem`.
///
/// * either field empty → [`Judgment::warning`]
/// * either field not a number → [`Judgment::error`]
/// * both within [`TOLERANCE`] of the solution → [`Judgment::success`],
///   with the integer solution embedded in the message
/// * otherwise → a generic incorrect [`Judgment::error`]
///
/// Pure and idempotent: the same problem and input always grade the same.
pub fn judge(problem: &EquationSystem, x_text: &str, y_text: &str) -> Judgment {
    let x_text = x_text.trim();
    let y_text = y_text.trim();

    if x_text.is_empty() || y_text.is_empty() {
        return Judgment::warning("Enter values for both x and y.");
    }

    let (x, y) = match (x_text.parse::<f64>(), y_text.parse::<f64>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return Judgment::error("Enter valid numbers."),
    };

    let x_hit = (x - f64::from(problem.solution_x)).abs() < TOLERANCE;
    let y_hit = (y - f64::from(problem.solution_y)).abs() < TOLERANCE;

    if x_hit && y_hit {
        Judgment::success(format!(
            "Correct! (x = {}, y = {})",
            problem.solution_x, problem.solution_y
        ))
    } else {
        Judgment::error("Incorrect. Give it another try.")
    }
}
