//! Compile-time embedded snippet templates.
//!
//! Each constant loads a template file from `templates/snippet/` via [`include_str!`]. The
//! paths are relative to this source file (`crates/hsc-snippets-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! [`super::SnippetContext`].

/// Header stub: include guard around an empty namespace block.
pub const HEADER: &str = include_str!("../../../../templates/snippet/header.hpp.tmpl");

/// Catch2 test stub with a single empty `TEST_CASE`.
pub const TEST: &str = include_str!("../../../../templates/snippet/test.cpp.tmpl");
