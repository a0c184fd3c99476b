//! Saved outfit records and the group map they live in.

use crate::category::Category;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One file name per category, kept as the JSON object it was read from.
///
/// Only the category keys are interpreted; other keys and non-string values
/// written by hand are carried through a save unchanged. A category whose
/// value is missing, `null`, or not a string reads as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitRecord {
    fields: Map<String, Value>,
}

impl Default for OutfitRecord {
    /// Every category present and `null`, in [`Category::ALL`] order.
    fn default() -> Self {
        let fields = Category::ALL
            .iter()
            .map(|category| (category.as_str().to_string(), Value::Null))
            .collect();
        Self { fields }
    }
}

impl OutfitRecord {
    pub fn get(&self, category: Category) -> Option<&str> {
        self.fields.get(category.as_str()).and_then(Value::as_str)
    }

    /// Sets one category, keeping its position when the key already exists.
    pub fn set(&mut self, category: Category, file_name: Option<String>) {
        let value = file_name.map_or(Value::Null, Value::String);
        self.fields.insert(category.as_str().to_string(), value);
    }
}

/// Group name to saved records, in insertion order.
pub type SavedOutfits = IndexMap<String, Vec<OutfitRecord>>;

/// Group names in stored order.
pub fn groups_of(saved: &SavedOutfits) -> impl Iterator<Item = &str> {
    saved.keys().map(String::as_str)
}

/// Records saved under `group`; empty for an unknown group.
pub fn outfits_of<'a>(saved: &'a SavedOutfits, group: &str) -> &'a [OutfitRecord] {
    saved.get(group).map(Vec::as_slice).unwrap_or(&[])
}
