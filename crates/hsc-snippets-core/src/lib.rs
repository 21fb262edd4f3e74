//! Core library for the hsc-snippets scaffolding tool.
//!
//! Turns a snippet name into a C++ header stub and a matching Catch2 test stub:
//! - [`identifier`] validates the name and wraps it in an immutable [`identifier::Identifier`]
//! - [`templates`] renders the two embedded templates for that name
//! - [`project`] maps the name onto `src/<name>.hpp` and `test/test_<name>.cpp`
//! - [`scaffold`] writes both files, refusing to overwrite anything
//!
//! The `add-snippet` binary in the `hsc-snippets` crate is a thin CLI over [`scaffold::run`].

pub mod error;
pub mod identifier;
pub mod project;
pub mod scaffold;
pub mod templates;
