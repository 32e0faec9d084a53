mod bill;
mod item;
mod order;

pub use bill::{AggregatedEntry, OrderBreakdown};
pub use item::{Item, ItemKind, RecipeEdge};
pub use order::Order;
