//! Template system for snippet scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{name}}` — snippet name as given (e.g., `union_find`)
//! - `{{name_upper}}` — snippet name in ASCII uppercase, for the include guard
//! - `{{namespace}}` — C++ namespace wrapping every snippet (`hsc_snippets`)
//!
//! **Warning**: Template files in `templates/snippet/` and constants in [`embedded`] must
//! stay in sync. The `include_str!` paths are relative to `embedded.rs` and checked at
//! compile-time.

pub mod embedded;
pub mod renderer;

use serde::Serialize;

use crate::error::{Result, SnippetError};
use crate::identifier::Identifier;
use renderer::TemplateRenderer;

/// Namespace every generated snippet lives in.
pub const NAMESPACE: &str = "hsc_snippets";

/// Data context handed to both templates.
#[derive(Debug, Clone, Serialize)]
pub struct SnippetContext<'a> {
    pub name: &'a str,
    pub name_upper: String,
    pub namespace: &'static str,
}

impl<'a> SnippetContext<'a> {
    pub fn new(id: &'a Identifier) -> Self {
        Self {
            name: id.as_str(),
            name_upper: id.upper(),
            namespace: NAMESPACE,
        }
    }
}

/// The two documents generated for one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSnippet {
    /// Contents of `src/<name>.hpp`.
    pub header: String,
    /// Contents of `test/test_<name>.cpp`.
    pub test: String,
}

/// Render the header stub and test stub for `id`.
pub fn render_snippet(id: &Identifier) -> Result<RenderedSnippet> {
    let renderer = TemplateRenderer::new();
    let data = serde_json::to_value(SnippetContext::new(id))
        .map_err(|e| SnippetError::TemplateRender(e.to_string()))?;
    Ok(RenderedSnippet {
        header: renderer.render(embedded::HEADER, &data)?,
        test: renderer.render(embedded::TEST, &data)?,
    })
}
