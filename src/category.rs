//! The fixed set of clothing categories.

use std::fmt;

/// One clothing slot of an outfit.
///
/// The order of [`Category::ALL`] is the display order of the main page and
/// the key order of saved outfit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Accessories,
    Tops,
    Bottoms,
    Shoes,
    Bag,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Accessories,
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Bag,
    ];

    /// Directory name under the image root and key in saved records.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Accessories => "accessories",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Bag => "bag",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Accessories => "Accessories",
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Shoes => "Shoes",
            Category::Bag => "Bag",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a category by its row index in the UI.
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
