use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{AggregatedEntry, Order};
use crate::planner::aggregate::aggregate;
use crate::planner::bonus::BonusConfig;
use crate::planner::expansion::IngredientTally;

/// Order a tally for display: highest tier first, then most valuable.
///
/// The sort is stable, so rows equal on both keys keep first-seen order.
pub fn sort_bill(tally: &IngredientTally) -> Vec<AggregatedEntry> {
    let mut entries = tally.to_entries();
    entries.sort_by(|a, b| {
        b.kind
            .cmp(&a.kind)
            .then_with(|| b.total_value.cmp(&a.total_value))
    });
    entries
}

/// Aggregate the orders and sort the result into the final bill.
pub fn bill(catalog: &Catalog, config: &BonusConfig, orders: &[Order]) -> Result<Vec<AggregatedEntry>> {
    Ok(sort_bill(&aggregate(catalog, config, orders)?))
}
