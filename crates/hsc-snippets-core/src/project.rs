//! Target file layout for generated snippets.
//!
//! ```text
//! <root>/
//! ├── src/<name>.hpp            # header stub
//! └── test/test_<name>.cpp      # Catch2 test stub
//! ```
//!
//! Both directories must already exist; nothing here creates them.

use std::path::{Path, PathBuf};

use crate::identifier::Identifier;

/// Directory holding header snippets, relative to the root.
pub const SRC_DIR: &str = "src";
/// Directory holding Catch2 tests, relative to the root.
pub const TEST_DIR: &str = "test";

/// Where the header and test stub for a snippet are written.
#[derive(Debug, Clone)]
pub struct SnippetLayout {
    root: PathBuf,
}

impl SnippetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/src/<name>.hpp`
    pub fn header_path(&self, id: &Identifier) -> PathBuf {
        self.root.join(SRC_DIR).join(format!("{id}.hpp"))
    }

    /// `<root>/test/test_<name>.cpp`
    pub fn test_path(&self, id: &Identifier) -> PathBuf {
        self.root.join(TEST_DIR).join(format!("test_{id}.cpp"))
    }
}

impl Default for SnippetLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
