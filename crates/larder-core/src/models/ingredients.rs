// ABOUTME: Case-insensitive set of ingredient names the user currently owns
// ABOUTME: Stores lower-cased, trimmed, de-duplicated names in sorted order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::slice::Iter;

use super::inventory::Inventory;

/// Ingredient names the user has on hand
///
/// Names are stored lower-cased and trimmed; duplicates collapse and blank
/// names are ignored. Insertion order is irrelevant, iteration is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct UserIngredientSet {
    names: Vec<String>,
}

impl UserIngredientSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build the set from the names of every inventory item
    #[must_use]
    pub fn from_inventory(inventory: &Inventory) -> Self {
        inventory.iter().map(|item| item.name.as_str()).collect()
    }

    /// Insert a name, returning `true` when it was not already present
    pub fn insert(&mut self, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        match self.names.binary_search(&key) {
            Ok(_) => false,
            Err(pos) => {
                self.names.insert(pos, key);
                true
            }
        }
    }

    /// Remove a name (case-insensitive), returning `true` when it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        match self.names.binary_search(&key) {
            Ok(pos) => {
                self.names.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether the set holds `name` (case-insensitive)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search(&name.trim().to_lowercase())
            .is_ok()
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names as a sorted slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the stored names
    pub fn iter(&self) -> Iter<'_, String> {
        self.names.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UserIngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a UserIngredientSet {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<Vec<String>> for UserIngredientSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<UserIngredientSet> for Vec<String> {
    fn from(set: UserIngredientSet) -> Self {
        set.names
    }
}
