use serde::{Deserialize, Serialize};

/// A request to craft `quantity` units of the named item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub item: String,
    pub quantity: u32,
}

impl Order {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}
