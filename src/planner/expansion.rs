use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::error::{CalcError, Result};
use crate::models::{AggregatedEntry, Item, ItemKind};
use crate::planner::bonus::BonusConfig;

/// Accumulated need for one ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub name: String,
    pub kind: ItemKind,
    pub amount: i64,
    /// Bonus-adjusted worth of a single unit.
    pub unit_value: i64,
    value: i64,
}

impl TallyEntry {
    /// Worth of the whole accumulated amount.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Ingredient multiset keyed by item name, in first-seen order.
///
/// Adding an already-present name sums into the existing entry. Every
/// product and sum is checked; a result that does not fit in `i64` fails
/// with `CalcError::Overflow` naming the item.
#[derive(Debug, Clone, Default)]
pub struct IngredientTally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

impl IngredientTally {
    pub fn add(&mut self, name: &str, kind: ItemKind, amount: i64, unit_value: i64) -> Result<()> {
        let overflow = || CalcError::Overflow(name.to_string());
        let value = amount.checked_mul(unit_value).ok_or_else(overflow)?;

        match self.index.get(name) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.amount = entry.amount.checked_add(amount).ok_or_else(overflow)?;
                entry.value = entry.value.checked_add(value).ok_or_else(overflow)?;
            }
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(TallyEntry {
                    name: name.to_string(),
                    kind,
                    amount,
                    unit_value,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Merge every entry of `other`, multiplying its amount by `factor`.
    pub fn merge_scaled(&mut self, other: &IngredientTally, factor: i64) -> Result<()> {
        for entry in &other.entries {
            let amount = entry
                .amount
                .checked_mul(factor)
                .ok_or_else(|| CalcError::Overflow(entry.name.clone()))?;
            self.add(&entry.name, entry.kind, amount, entry.unit_value)?;
        }
        Ok(())
    }

    pub fn scaled(&self, factor: i64) -> Result<IngredientTally> {
        let mut out = IngredientTally::default();
        out.merge_scaled(self, factor)?;
        Ok(out)
    }

    /// Sum of the values of all entries of `kind`.
    pub fn value_of_kind(&self, kind: ItemKind) -> Result<i64> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .try_fold(0i64, |total, e| {
                total
                    .checked_add(e.value)
                    .ok_or_else(|| CalcError::Overflow(e.name.clone()))
            })
    }

    pub fn get(&self, name: &str) -> Option<&TallyEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Bill rows in first-seen order.
    pub fn to_entries(&self) -> Vec<AggregatedEntry> {
        self.entries
            .iter()
            .map(|e| AggregatedEntry {
                name: e.name.clone(),
                kind: e.kind,
                total_amount: e.amount,
                total_value: e.value(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything needed to craft one unit of `item`, flattened.
///
/// Each recipe line's amount is adjusted by the bonuses of the crafting
/// item's kind; each ingredient is valued with the bonus of its own kind.
/// Craftable ingredients are expanded recursively and their needs scaled by
/// the adjusted line amount. Intermediates stay in the result alongside the
/// raw materials they break down into.
///
/// The catalog guarantees an acyclic recipe graph, so recursion depth is
/// bounded by the longest production chain.
pub fn expand(catalog: &Catalog, config: &BonusConfig, item: &Item) -> Result<IngredientTally> {
    let mut tally = IngredientTally::default();

    for edge in &item.recipe {
        let ingredient = catalog.lookup(&edge.ingredient)?;
        let amount = config.adjusted_amount(item.kind, i64::from(edge.amount));
        let unit_value = config.adjusted_value(ingredient.kind, ingredient.base_value);

        tally.add(&ingredient.name, ingredient.kind, amount, unit_value)?;

        if ingredient.is_craftable() {
            let sub = expand(catalog, config, ingredient)?;
            tally.merge_scaled(&sub, amount)?;
        }
    }

    Ok(tally)
}
