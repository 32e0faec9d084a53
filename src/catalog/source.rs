use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;

/// Parsed catalog document: ores, alloys and items, in registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub ores: Vec<CatalogRecord>,

    #[serde(default)]
    pub alloys: Vec<CatalogRecord>,

    #[serde(default)]
    pub items: Vec<CatalogRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub value: i64,

    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub amount: u32,
}

impl CatalogRecord {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, amount: u32) -> Self {
        self.ingredients.push(IngredientRecord {
            name: name.into(),
            amount,
        });
        self
    }
}

/// Read a catalog JSON file and build the catalog from it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let data: CatalogData = serde_json::from_str(&content)?;
    Catalog::build(data)
}
