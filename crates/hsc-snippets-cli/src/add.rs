use std::path::Path;

use anyhow::Result;
use tracing::debug;

use hsc_snippets_core::identifier::Identifier;
use hsc_snippets_core::project::SnippetLayout;
use hsc_snippets_core::scaffold::{self, WriteMode};
use hsc_snippets_core::templates;

use crate::output;

/// Scaffold the header and test stub for `name` under `root`.
///
/// With `atomic` unset, a collision on the test stub is reported after the header
/// has already been written, and the header stays on disk.
pub fn run(root: &Path, name: &str, atomic: bool) -> Result<()> {
    let id = Identifier::parse(name)?;
    output::print_header(&format!("add-snippet: {id}"));

    let mode = if atomic {
        WriteMode::Atomic
    } else {
        WriteMode::Sequential
    };
    let layout = SnippetLayout::new(root);
    debug!(root = %layout.root().display(), ?mode, "scaffolding into");
    let rendered = templates::render_snippet(&id)?;
    let report = scaffold::write_snippet(&layout, &id, &rendered, mode)?;

    let total = report.created.len() as u32;
    for (i, path) in report.created.iter().enumerate() {
        output::print_step(i as u32 + 1, total, &format!("Created {}", path.display()));
    }
    output::print_success(&format!("Snippet '{id}' scaffolded"));
    Ok(())
}

/// Validate and render `name`, then print both documents instead of writing them.
pub fn dry_run(root: &Path, name: &str) -> Result<()> {
    let id = Identifier::parse(name)?;
    let rendered = templates::render_snippet(&id)?;
    let layout = SnippetLayout::new(root);

    output::print_header(&format!("add-snippet (dry run): {id}"));
    for (path, contents) in [
        (layout.header_path(&id), &rendered.header),
        (layout.test_path(&id), &rendered.test),
    ] {
        output::print_key_value("Would write", &path.display().to_string());
        print!("{contents}");
    }
    Ok(())
}
