mod manager;
mod persistence;
mod settings;

pub use manager::OrderBook;
pub use persistence::{load_orders, load_settings, save_settings};
pub use settings::{BonusSettings, parse_multiplier};
