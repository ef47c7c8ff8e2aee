//! read, delete, save: file content commands, all scoped to the cwd.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs};

/// Read tool: print a file's content.
pub struct Read;

#[async_trait]
impl Tool for Read {
    fn name(&self) -> &str {
        "read"
    }

    fn usage(&self) -> &str {
        "Usage: read <filename>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(filename) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.fs.read_file(&ctx.session.cwd, filename) {
            Ok(content) => ExecResult::success(format!("Contents of {filename}:\n{content}")),
            Err(e) => e.into(),
        }
    }
}

/// Delete tool: remove a file from the cwd.
pub struct Delete;

#[async_trait]
impl Tool for Delete {
    fn name(&self) -> &str {
        "delete"
    }

    fn usage(&self) -> &str {
        "Usage: delete <filename>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(filename) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        match ctx.fs.delete_file(&ctx.session.cwd, filename) {
            Ok(()) => ExecResult::success(format!("{filename} deleted successfully.")),
            Err(e) => e.into(),
        }
    }
}

/// Save tool: hand a file's in-memory content to the persist capability.
///
/// The file must already exist in the cwd; the persist sink receives the
/// content verbatim and imposes no suffix rule of its own.
pub struct Save;

#[async_trait]
impl Tool for Save {
    fn name(&self) -> &str {
        "save"
    }

    fn usage(&self) -> &str {
        "Usage: save <filename>"
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(filename) = args.get(0) else {
            return ExecResult::usage(self.usage());
        };
        let content = match ctx.fs.read_file(&ctx.session.cwd, filename) {
            Ok(content) => content.to_string(),
            Err(e) => return e.into(),
        };
        match ctx.persist.persist(filename, &content).await {
            Ok(()) => ExecResult::success(format!("{filename} saved successfully.")),
            Err(source) => ShellError::Persist {
                filename: filename.to_string(),
                source,
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemorySink;
    use std::sync::Arc;

    fn make_ctx_with_sink() -> (ExecContext, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let mut ctx = ExecContext::new(sink.clone());
        ctx.session.user = Some("admin".to_string());
        (ctx, sink)
    }

    #[tokio::test]
    async fn read_prints_contents() {
        let (mut ctx, _) = make_ctx_with_sink();
        ctx.fs
            .write_file("/", "notes.txt", "line one\nline two")
            .unwrap();

        let result = Read
            .execute(ToolArgs::from_tokens(&["notes.txt"]), &mut ctx)
            .await;
        assert_eq!(result.out, "Contents of notes.txt:\nline one\nline two");
    }

    #[tokio::test]
    async fn read_missing_file_fails() {
        let (mut ctx, _) = make_ctx_with_sink();
        let result = Read
            .execute(ToolArgs::from_tokens(&["ghost.txt"]), &mut ctx)
            .await;
        assert_eq!(
            result.err,
            "Error: ghost.txt does not exist in the current directory."
        );
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let (mut ctx, _) = make_ctx_with_sink();
        ctx.fs.write_file("/", "f.txt", "x").unwrap();

        let result = Delete
            .execute(ToolArgs::from_tokens(&["f.txt"]), &mut ctx)
            .await;
        assert_eq!(result.out, "f.txt deleted successfully.");
        assert!(ctx.fs.read_file("/", "f.txt").is_err());
    }

    #[tokio::test]
    async fn save_hands_content_to_persist() {
        let (mut ctx, sink) = make_ctx_with_sink();
        ctx.fs.write_file("/", "out.txt", "payload").unwrap();

        let result = Save
            .execute(ToolArgs::from_tokens(&["out.txt"]), &mut ctx)
            .await;
        assert_eq!(result.out, "out.txt saved successfully.");
        assert_eq!(sink.saved("out.txt").as_deref(), Some("payload"));
    }

    #[tokio::test]
    async fn save_missing_file_never_touches_persist() {
        let (mut ctx, sink) = make_ctx_with_sink();
        let result = Save
            .execute(ToolArgs::from_tokens(&["ghost.txt"]), &mut ctx)
            .await;
        assert!(!result.ok());
        assert_eq!(sink.count(), 0);
    }

    #[tokio::test]
    async fn save_has_no_suffix_rule() {
        // Only the notepad editor insists on .txt; save persists anything.
        let (mut ctx, sink) = make_ctx_with_sink();
        ctx.fs.write_file("/", "data.bin", "bytes").unwrap();

        let result = Save
            .execute(ToolArgs::from_tokens(&["data.bin"]), &mut ctx)
            .await;
        assert!(result.ok());
        assert_eq!(sink.saved("data.bin").as_deref(), Some("bytes"));
    }
}
