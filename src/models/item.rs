use std::fmt;

use serde::{Deserialize, Serialize};

/// Production tier of an item.
///
/// Variants are declared lowest tier first so the derived `Ord` ranks
/// `Final > Intermediate > Raw`, which is the order reports are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    /// Mined ore: no recipe, only a base value.
    Raw,
    /// Smelted alloy, crafted from ores (or other alloys).
    Intermediate,
    /// Crafted item, the top of the production chain.
    Final,
}

impl ItemKind {
    /// In-game label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Raw => "Ore",
            ItemKind::Intermediate => "Alloy",
            ItemKind::Final => "Item",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One line of a recipe: `amount` units of `ingredient` per crafted unit.
///
/// The ingredient is referenced by name and resolved through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEdge {
    pub ingredient: String,
    pub amount: u32,
}

impl RecipeEdge {
    pub fn new(ingredient: impl Into<String>, amount: u32) -> Self {
        Self {
            ingredient: ingredient.into(),
            amount,
        }
    }
}

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub base_value: i64,
    pub recipe: Vec<RecipeEdge>,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, base_value: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            base_value,
            recipe: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>, amount: u32) -> Self {
        self.recipe.push(RecipeEdge::new(ingredient, amount));
        self
    }

    /// Whether this item decomposes any further.
    #[inline]
    pub fn is_craftable(&self) -> bool {
        !self.recipe.is_empty()
    }

    /// Canonical key for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
