use serde::Serialize;

use crate::models::ItemKind;

/// One row of the final bill: the total need for a single item across all orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedEntry {
    pub name: String,
    pub kind: ItemKind,
    pub total_amount: i64,
    pub total_value: i64,
}

/// Per-order summary shown next to the aggregated bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBreakdown {
    /// Name of the ordered item.
    pub item: String,
    pub kind: ItemKind,
    pub quantity: u32,
    /// The order's own expansion scaled by its quantity, in expansion order.
    pub ingredients: Vec<AggregatedEntry>,
    /// Worth of the raw materials consumed by the batch.
    pub cost: i64,
    /// Bonus-adjusted worth of the crafted batch.
    pub value: i64,
}
