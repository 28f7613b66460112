//! Outcome of checking a submitted answer against the current problem.

/// Severity of a judgment, mirrored in how the CLI styles the message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum JudgmentKind {
    /// The submitted answer matches the stored solution.
    Success,
    /// The answer is wrong, or the input could not be parsed as numbers.
    Error,
    /// The input is incomplete (one or both fields empty).
    Warning,
}

/// A judgment outcome paired with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub kind: JudgmentKind,
    pub message: String,
}

impl Judgment {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: JudgmentKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: JudgmentKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: JudgmentKind::Warning,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == JudgmentKind::Success
    }
}
