//! Snippet name validation.
//!
//! A snippet name ends up in a file name, an include guard macro and a C++ string
//! literal, so only `[A-Za-z0-9_]+` is accepted. [`is_valid_name`] is the pure
//! predicate; [`Identifier::parse`] trims the input, applies the same rules and
//! reports which one failed.

use std::fmt;

use crate::error::{Result, SnippetError};

/// Characters that are never allowed in a file name on common filesystems.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '\\', '/', '|', '?', '*'];

/// Return the first rule `name` breaks, or `None` if it is acceptable.
fn rejection_reason(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name is empty");
    }
    if name.contains(FORBIDDEN_CHARS) {
        return Some("name contains a character forbidden in file names");
    }
    if !name.is_ascii() {
        return Some("name contains non-ASCII characters");
    }
    // Subsumes the two checks above; those only exist for the error message.
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name may only contain ASCII letters, digits and underscores");
    }
    None
}

/// Check whether `name` is an acceptable snippet name.
pub fn is_valid_name(name: &str) -> bool {
    rejection_reason(name).is_none()
}

/// A validated snippet name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Trim surrounding whitespace and validate.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        match rejection_reason(name) {
            None => Ok(Self(name.to_string())),
            Some(reason) => Err(SnippetError::InvalidName {
                name: raw.to_string(),
                reason,
            }),
        }
    }

    /// The name as given, used in file names and the test stub.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name in ASCII uppercase, used for the include guard.
    pub fn upper(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
