pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::Catalog;
pub use error::{CalcError, Result};
pub use models::{AggregatedEntry, Item, ItemKind, Order, OrderBreakdown, RecipeEdge};
pub use planner::BonusConfig;
