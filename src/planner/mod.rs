pub mod aggregate;
pub mod bonus;
pub mod constants;
pub mod expansion;
pub mod report;

pub use aggregate::{aggregate, breakdown, summary_cost, summary_total};
pub use bonus::BonusConfig;
pub use constants::*;
pub use expansion::{IngredientTally, TallyEntry, expand};
pub use report::{bill, sort_bill};
