/// Multiplier that leaves an amount or value unchanged.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Largest bonus multiplier accepted from settings or user input.
pub const MAX_MULTIPLIER: f64 = 1_000.0;

/// Default location of the recipe catalog.
pub const DEFAULT_CATALOG_PATH: &str = "inventory.json";

/// Default location of the persisted bonus settings.
pub const DEFAULT_SETTINGS_PATH: &str = "bonus_settings.json";

/// Quantity given to a freshly added order.
pub const DEFAULT_ORDER_QUANTITY: u32 = 1;

/// Minimum Jaro-Winkler score for a fuzzy item-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered to the user.
pub const FUZZY_MAX_CANDIDATES: usize = 5;
