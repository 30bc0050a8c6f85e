//! Container struct definition
//!
//! A Container holds a name and an ordered list of string items. Items are
//! only ever appended, so the list always reflects insertion order.

use serde::{Deserialize, Serialize};

/// A named, append-only list of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Name given at construction
    name: String,
    /// Items in the order they were added
    items: Vec<String>,
}

impl Container {
    /// Create an empty container with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Get the container's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item to the end of the list
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Get all items in insertion order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items have been added yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
