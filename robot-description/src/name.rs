//! Name resolution for composable model fragments.
//!
//! Every name-bearing attribute a factory writes (link, joint, group and
//! material names) goes through a [`NameContext`]. Relative names get the
//! context prefix prepended verbatim; names starting with `/` are absolute
//! and only lose the leading slash. This lets the same fragment code build
//! `left_` and `right_` copies of an arm while still pointing at a shared
//! `/world` link.

use std::sync::Arc;

use crate::constants::ABSOLUTE_MARKER;

/// Prefix (and optional enclosing context) used to qualify names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameContext {
    /// Prepended to every relative name. No separator is inserted.
    prefix: String,
    /// Enclosing context. Stored for callers that nest fragments; it does not
    /// take part in resolution.
    parent: Option<Arc<NameContext>>,
}

impl NameContext {
    /// Creates a context with the given prefix and no parent.
    pub fn new(prefix: impl Into<String>) -> Self {
        NameContext {
            prefix: prefix.into(),
            parent: None,
        }
    }

    /// Creates a context nested inside `parent`.
    pub fn with_parent(prefix: impl Into<String>, parent: Arc<NameContext>) -> Self {
        NameContext {
            prefix: prefix.into(),
            parent: Some(parent),
        }
    }

    /// Returns the prefix applied to relative names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the enclosing context, if any.
    pub fn parent(&self) -> Option<&NameContext> {
        self.parent.as_deref()
    }

    /// Resolves a logical name into the name written to the document.
    ///
    /// - `"/world"` resolves to `"world"` regardless of prefix
    /// - `"/"` resolves to `""`
    /// - anything else resolves to `prefix + name`
    ///
    /// Only the first character is inspected; embedded slashes are kept.
    pub fn resolve(&self, name: &str) -> String {
        let resolved = match name.strip_prefix(ABSOLUTE_MARKER) {
            Some(absolute) => absolute.to_string(),
            None => {
                let mut qualified = String::with_capacity(self.prefix.len() + name.len());
                qualified.push_str(&self.prefix);
                qualified.push_str(name);
                qualified
            }
        };
        tracing::trace!(logical = name, resolved = %resolved, prefix = %self.prefix, "resolved name");
        resolved
    }
}

/// Anything that qualifies names through a [`NameContext`].
///
/// Both element factories implement this so fragment code can be written
/// against either of them.
pub trait NameResolver {
    /// Returns the context names are resolved against.
    fn context(&self) -> &NameContext;

    /// Resolves `name` against [`NameResolver::context`].
    fn resolve(&self, name: &str) -> String {
        self.context().resolve(name)
    }
}

impl NameResolver for NameContext {
    fn context(&self) -> &NameContext {
        self
    }
}
