//! ExecResult: the result of executing a single command line.

use crate::error::ShellError;

/// The result of executing a command.
///
/// `out` carries the text the console prints on success; `err` carries the
/// single recovered error line on failure. The code distinguishes ordinary
/// failures (1) from argument-count shortfalls (2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Output text.
    pub out: String,
    /// Error text, a single human-readable line.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a usage-error result (wrong argument count).
    pub fn usage(usage: &str) -> Self {
        Self::failure(2, usage)
    }

    /// True if the command succeeded (code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl From<ShellError> for ExecResult {
    fn from(err: ShellError) -> Self {
        Self::failure(1, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_code_zero() {
        let r = ExecResult::success("hi");
        assert!(r.ok());
        assert_eq!(r.out, "hi");
        assert!(r.err.is_empty());
    }

    #[test]
    fn usage_has_code_two() {
        let r = ExecResult::usage("Usage: cd <directory>");
        assert!(!r.ok());
        assert_eq!(r.code, 2);
        assert_eq!(r.err, "Usage: cd <directory>");
    }

    #[test]
    fn shell_error_converts_to_failure_line() {
        let r: ExecResult = ShellError::WrongOldPassword.into();
        assert_eq!(r.code, 1);
        assert_eq!(r.err, "Old password is incorrect.");
    }
}
