use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CalcError, Result};
use crate::models::{ItemKind, Order, OrderBreakdown};
use crate::planner::bonus::BonusConfig;
use crate::planner::expansion::{IngredientTally, expand};

/// Merge the expansions of all orders into one tally.
///
/// Each order's per-unit expansion is scaled by its quantity; amounts and
/// values of the same item are summed across orders.
pub fn aggregate(catalog: &Catalog, config: &BonusConfig, orders: &[Order]) -> Result<IngredientTally> {
    debug!(orders = orders.len(), "aggregating orders");

    let mut bill = IngredientTally::default();
    for order in orders {
        let item = catalog.lookup(&order.item)?;
        let expansion = expand(catalog, config, item)?;
        bill.merge_scaled(&expansion, i64::from(order.quantity))?;
    }

    Ok(bill)
}

/// Per-order view of the same expansion data the bill is built from.
///
/// Each order is expanded on its own and scaled only by its quantity, so
/// nested intermediates show up with the raw materials beneath them. The
/// cost counts raw materials only.
pub fn breakdown(
    catalog: &Catalog,
    config: &BonusConfig,
    orders: &[Order],
) -> Result<Vec<OrderBreakdown>> {
    orders
        .iter()
        .map(|order| -> Result<OrderBreakdown> {
            let item = catalog.lookup(&order.item)?;
            let quantity = i64::from(order.quantity);
            let tally = expand(catalog, config, item)?.scaled(quantity)?;

            let value = config
                .adjusted_value(item.kind, item.base_value)
                .checked_mul(quantity)
                .ok_or_else(|| CalcError::Overflow(item.name.clone()))?;

            Ok(OrderBreakdown {
                item: item.name.clone(),
                kind: item.kind,
                quantity: order.quantity,
                cost: tally.value_of_kind(ItemKind::Raw)?,
                ingredients: tally.to_entries(),
                value,
            })
        })
        .collect()
}

/// Combined worth of all orders.
pub fn summary_total(breakdowns: &[OrderBreakdown]) -> i64 {
    breakdowns.iter().map(|b| b.value).fold(0i64, i64::saturating_add)
}

/// Combined raw material cost of all orders.
pub fn summary_cost(breakdowns: &[OrderBreakdown]) -> i64 {
    breakdowns.iter().map(|b| b.cost).fold(0i64, i64::saturating_add)
}
