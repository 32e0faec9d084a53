use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Recipe cycle detected: {0}")]
    CycleDetected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Quantity or value too large for {0}")]
    Overflow(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No orders to calculate")]
    NoOrders,
}

pub type Result<T> = std::result::Result<T, CalcError>;
