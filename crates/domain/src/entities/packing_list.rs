//! Packing list entity

use serde::{Deserialize, Serialize};

/// Ordered sequence of packing item names
///
/// Items keep the provider's emission order and duplicates are permitted.
/// A list is either generated (the provider's items, conventionally starting
/// with "Passport") or a single-element placeholder carrying a user-facing
/// failure message. Each generation request supersedes the previous list
/// wholesale; there is no incremental update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    items: Vec<String>,
    placeholder: bool,
}

impl PackingList {
    /// Create a generated list from provider items
    #[must_use]
    pub const fn generated(items: Vec<String>) -> Self {
        Self {
            items,
            placeholder: false,
        }
    }

    /// Create a single-element placeholder list carrying a failure message
    #[must_use]
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            items: vec![message.into()],
            placeholder: true,
        }
    }

    /// Whether this list is a failure placeholder rather than a real list
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Get the items in order
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a PackingList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
