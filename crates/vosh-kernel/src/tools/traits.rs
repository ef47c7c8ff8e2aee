//! Core tool trait and argument type.

use async_trait::async_trait;

use crate::result::ExecResult;

use super::context::ExecContext;

/// Parsed arguments ready for tool execution.
///
/// Arguments are plain whitespace-delimited tokens; there is no quoting
/// support, and tokens are never re-merged. Handlers take the tokens they
/// need by position and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Args from a token list.
    pub fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            positional: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

/// A shell command.
///
/// Tools validate their own argument count (returning their usage string on
/// shortfall) and report every failure as a recovered `ExecResult` line;
/// nothing a tool does may abort the session.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Command name as the user types it (and as it appears in permission sets).
    fn name(&self) -> &str;

    /// One-line usage hint, shown on argument-count shortfall.
    fn usage(&self) -> &str;

    /// Execute against the engine state.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
