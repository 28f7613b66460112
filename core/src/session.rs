//! # Quiz Session State
//!
//! One struct holds everything the presentation layer keeps alive between
//! interaction steps: the current problem, the last judgment, and the raw
//! text the user typed. The owner passes it by `&mut` into the operations
//! below; the generator and judge themselves stay stateless.

use equiz_common::algebra::judgment::Judgment;
use equiz_common::algebra::system::EquationSystem;
use rand::Rng;

use crate::generator::{self, GenerationError};
use crate::judge;

#[derive(Debug, Default)]
pub struct SessionState {
    /// The problem currently posed, if generation has succeeded.
    pub problem: Option<EquationSystem>,
    /// Outcome of the most recent submission.
    pub result: Option<Judgment>,
    /// Raw text of the last submission, kept for re-display.
    pub user_x: String,
    pub user_y: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current problem wholesale and clears the stale result
    /// and input text.
    ///
    /// On generation failure nothing is touched: the previous problem (if
    /// any) stays in place so the user can keep working or retry.
    pub fn renew<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        let problem = generator::generate(rng)?;
        self.problem = Some(problem);
        self.result = None;
        self.user_x.clear();
        self.user_y.clear();
        Ok(())
    }

    /// Grades a submission against the current problem, recording both the
    /// raw input and the judgment. Returns `None` when no problem is posed.
    pub fn submit(&mut self, x_text: &str, y_text: &str) -> Option<&Judgment> {
        let problem = self.problem.as_ref()?;
        let judgment = judge::judge(problem, x_text, y_text);
        self.user_x = x_text.to_string();
        self.user_y = y_text.to_string();
        self.result = Some(judgment);
        self.result.as_ref()
    }
}
