//! # Equation System Model
//!
//! Defines the value object handed from the generator to the presentation
//! layer: a 2×2 integer linear system together with the solution it was
//! built around.
//!
//! Instances are immutable once created. A session replaces its system
//! wholesale when a new problem is requested; nothing ever mutates one
//! in place.

/// A two-variable linear system `ax + by = c`, `dx + ey = f` with a known
/// unique integer solution.
///
/// Generator output upholds:
/// * neither equation is degenerate (`(a, b) != (0, 0)`, `(d, e) != (0, 0)`),
/// * `determinant() != 0`, so the solution is unique,
/// * `(solution_x, solution_y)` satisfies both equations exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquationSystem {
    /// Coefficients `(a, b)` of the first equation.
    pub eq1_coeffs: (i32, i32),
    /// Right-hand side `c` of the first equation.
    pub eq1_const: i32,
    /// Coefficients `(d, e)` of the second equation.
    pub eq2_coeffs: (i32, i32),
    /// Right-hand side `f` of the second equation.
    pub eq2_const: i32,
    pub solution_x: i32,
    pub solution_y: i32,
}

impl EquationSystem {
    /// Computes `a*e - b*d`. Nonzero iff the system has exactly one solution.
    pub fn determinant(&self) -> i32 {
        let (a, b) = self.eq1_coeffs;
        let (d, e) = self.eq2_coeffs;
        a * e - b * d
    }

    /// Checks whether `(x, y)` satisfies both equations. Exact integer
    /// arithmetic, no tolerance.
    pub fn is_satisfied_by(&self, x: i32, y: i32) -> bool {
        let (a, b) = self.eq1_coeffs;
        let (d, e) = self.eq2_coeffs;
        a * x + b * y == self.eq1_const && d * x + e * y == self.eq2_const
    }
}
