//! Tool registry: name → tool lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::Tool;

/// Registry of available tools.
///
/// Lookup is keyed by lower-cased name: routing is case-insensitive, while
/// the permission check (which happens earlier, in the kernel) is
/// case-sensitive. The asymmetry is deliberate and pinned by a kernel test.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its lower-cased name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools
            .insert(tool.name().to_lowercase(), Arc::new(tool));
    }

    /// Look up a tool, case-insensitively.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name.to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
