mod source;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{CalcError, Result};
use crate::models::{Item, ItemKind, RecipeEdge};

pub use source::{CatalogData, CatalogRecord, IngredientRecord, load_catalog};

/// Read-only lookup table of every known item, keyed by name.
///
/// Items keep their registration order, which later serves as the
/// tie-break for listings with equal kind and value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

/// DFS marking used by the cycle check.
#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl Catalog {
    /// Build a catalog from parsed records.
    ///
    /// Ores are registered first, then alloys, then items, so a recipe may
    /// only reference something registered before it. Lines naming an
    /// unknown ingredient, or asking for zero of one, are dropped with a
    /// warning. A repeated name replaces the earlier definition.
    pub fn build(data: CatalogData) -> Result<Self> {
        let mut catalog = Catalog::default();

        let groups = [
            (ItemKind::Raw, data.ores),
            (ItemKind::Intermediate, data.alloys),
            (ItemKind::Final, data.items),
        ];
        for (kind, records) in groups {
            for record in records {
                catalog.register(kind, record);
            }
        }

        catalog.validate_acyclic()?;
        debug!(items = catalog.len(), "catalog built");
        Ok(catalog)
    }

    fn register(&mut self, kind: ItemKind, record: CatalogRecord) {
        if kind == ItemKind::Raw && !record.ingredients.is_empty() {
            warn!("ignoring recipe of raw material {}", record.name);
        }

        let mut item = Item::new(record.name, kind, record.value);
        if kind != ItemKind::Raw {
            for line in record.ingredients {
                if line.amount == 0 {
                    warn!("dropping zero amount of {} for {}", line.name, item.name);
                    continue;
                }
                if !self.index.contains_key(&line.name) {
                    warn!("could not find: {} for {}", line.name, item.name);
                    continue;
                }
                item.recipe.push(RecipeEdge::new(line.name, line.amount));
            }
        }

        match self.index.get(&item.name) {
            Some(&slot) => {
                warn!("duplicate item {} replaces earlier definition", item.name);
                self.items[slot] = item;
            }
            None => {
                self.index.insert(item.name.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Reject recipe graphs where an item (indirectly) consumes itself.
    fn validate_acyclic(&self) -> Result<()> {
        let mut marks = vec![Mark::Unvisited; self.items.len()];
        let mut path = Vec::new();
        for slot in 0..self.items.len() {
            self.visit(slot, &mut marks, &mut path)?;
        }
        Ok(())
    }

    fn visit(&self, slot: usize, marks: &mut [Mark], path: &mut Vec<usize>) -> Result<()> {
        match marks[slot] {
            Mark::Done => return Ok(()),
            Mark::InProgress => {
                let start = path.iter().position(|&s| s == slot).unwrap_or(0);
                let names: Vec<&str> = path[start..]
                    .iter()
                    .chain(std::iter::once(&slot))
                    .map(|&s| self.items[s].name.as_str())
                    .collect();
                return Err(CalcError::CycleDetected(names.join(" -> ")));
            }
            Mark::Unvisited => {}
        }

        marks[slot] = Mark::InProgress;
        path.push(slot);
        for edge in &self.items[slot].recipe {
            if let Some(&next) = self.index.get(&edge.ingredient) {
                self.visit(next, marks, path)?;
            }
        }
        path.pop();
        marks[slot] = Mark::Done;
        Ok(())
    }

    /// Look up an item by its exact name.
    pub fn lookup(&self, name: &str) -> Result<&Item> {
        self.get(name)
            .ok_or_else(|| CalcError::ItemNotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&slot| &self.items[slot])
    }

    /// Case-insensitive lookup, for names typed by a user.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.get(name).or_else(|| {
            let key = name.trim().to_lowercase();
            self.items.iter().find(|item| item.key() == key)
        })
    }

    /// All items in registration order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items that can be ordered (everything but raw materials), highest
    /// tier first, then most valuable first.
    pub fn orderable_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.kind != ItemKind::Raw)
            .collect();
        items.sort_by(|a, b| {
            b.kind
                .cmp(&a.kind)
                .then_with(|| b.base_value.cmp(&a.base_value))
        });
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> CatalogData {
        CatalogData {
            ores: vec![CatalogRecord::new("Copper", 1), CatalogRecord::new("Iron", 2)],
            alloys: vec![
                CatalogRecord::new("Copper Bar", 1450).with_ingredient("Copper", 1000),
                CatalogRecord::new("Iron Bar", 3000).with_ingredient("Iron", 1000),
            ],
            items: vec![
                CatalogRecord::new("Copper Wire", 10000).with_ingredient("Copper Bar", 5),
                CatalogRecord::new("Iron Nails", 20000).with_ingredient("Iron Bar", 5),
            ],
        }
    }

    #[test]
    fn test_build_assigns_kinds() {
        let catalog = Catalog::build(sample_data()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.lookup("Copper").unwrap().kind, ItemKind::Raw);
        assert_eq!(catalog.lookup("Copper Bar").unwrap().kind, ItemKind::Intermediate);
        assert_eq!(catalog.lookup("Copper Wire").unwrap().kind, ItemKind::Final);
    }

    #[test]
    fn test_lookup_unknown_is_not_found() {
        let catalog = Catalog::build(sample_data()).unwrap();
        match catalog.lookup("Gold") {
            Err(CalcError::ItemNotFound(name)) => assert_eq!(name, "Gold"),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_ingredient_line_is_dropped() {
        let mut data = sample_data();
        data.items.push(
            CatalogRecord::new("Lamp", 500)
                .with_ingredient("Copper Wire", 10)
                .with_ingredient("Glass", 2),
        );
        let catalog = Catalog::build(data).unwrap();
        let lamp = catalog.lookup("Lamp").unwrap();
        assert_eq!(lamp.recipe, vec![RecipeEdge::new("Copper Wire", 10)]);
    }

    #[test]
    fn test_forward_reference_is_dropped() {
        // An alloy cannot use an item that is only registered later.
        let mut data = sample_data();
        data.alloys
            .push(CatalogRecord::new("Odd Bar", 10).with_ingredient("Copper Wire", 1));
        let catalog = Catalog::build(data).unwrap();
        assert!(!catalog.lookup("Odd Bar").unwrap().is_craftable());
    }

    #[test]
    fn test_zero_amount_line_is_dropped() {
        let mut data = sample_data();
        data.alloys
            .push(CatalogRecord::new("Empty Bar", 10).with_ingredient("Iron", 0));
        let catalog = Catalog::build(data).unwrap();
        assert!(catalog.lookup("Empty Bar").unwrap().recipe.is_empty());
    }

    #[test]
    fn test_raw_recipe_is_ignored() {
        let mut data = sample_data();
        data.ores
            .push(CatalogRecord::new("Weird Ore", 3).with_ingredient("Copper", 2));
        let catalog = Catalog::build(data).unwrap();
        assert!(catalog.lookup("Weird Ore").unwrap().recipe.is_empty());
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut data = sample_data();
        data.alloys
            .push(CatalogRecord::new("Copper Bar", 2000).with_ingredient("Copper", 900));
        let catalog = Catalog::build(data).unwrap();
        assert_eq!(catalog.len(), 6);
        let bar = catalog.lookup("Copper Bar").unwrap();
        assert_eq!(bar.base_value, 2000);
        assert_eq!(bar.recipe, vec![RecipeEdge::new("Copper", 900)]);
        // Keeps its original registration slot.
        let names: Vec<&str> = catalog.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names[2], "Copper Bar");
    }

    #[test]
    fn test_self_cycle_through_duplicate_is_rejected() {
        let mut data = sample_data();
        data.alloys
            .push(CatalogRecord::new("Copper Bar", 1450).with_ingredient("Copper Bar", 1));
        match Catalog::build(data) {
            Err(CalcError::CycleDetected(path)) => {
                assert_eq!(path, "Copper Bar -> Copper Bar");
            }
            other => panic!("expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_indirect_cycle_is_rejected() {
        let data = CatalogData {
            ores: vec![CatalogRecord::new("Copper", 1)],
            alloys: vec![
                CatalogRecord::new("A", 1).with_ingredient("Copper", 1),
                CatalogRecord::new("B", 1).with_ingredient("A", 1),
                // Redefining A on top of B closes the loop A -> B -> A.
                CatalogRecord::new("A", 1).with_ingredient("B", 1),
            ],
            items: vec![],
        };
        assert!(matches!(Catalog::build(data), Err(CalcError::CycleDetected(_))));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = Catalog::build(sample_data()).unwrap();
        assert_eq!(catalog.find("copper wire").unwrap().name, "Copper Wire");
        assert_eq!(catalog.find("  IRON BAR ").unwrap().name, "Iron Bar");
        assert!(catalog.find("gold").is_none());
    }

    #[test]
    fn test_orderable_items_sorted() {
        let catalog = Catalog::build(sample_data()).unwrap();
        let names: Vec<&str> = catalog
            .orderable_items()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Iron Nails", "Copper Wire", "Iron Bar", "Copper Bar"]);
    }
}
