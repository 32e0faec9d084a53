use std::fs;
use std::path::Path;

use crate::error::{CalcError, Result};
use crate::models::Order;
use crate::state::settings::BonusSettings;

/// Load bonus settings, or defaults if the file does not exist yet.
///
/// Multipliers outside the accepted range are reset to neutral.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<BonusSettings> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(BonusSettings::default());
    }

    let content = fs::read_to_string(path)?;
    let settings: BonusSettings = serde_json::from_str(&content)?;
    Ok(settings.sanitized())
}

/// Save bonus settings as pretty-printed JSON.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &BonusSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a list of orders from a JSON file.
///
/// Zero quantities are rejected here so the planner only sees valid orders.
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>> {
    let content = fs::read_to_string(path)?;
    let orders: Vec<Order> = serde_json::from_str(&content)?;

    if let Some(order) = orders.iter().find(|o| o.quantity == 0) {
        return Err(CalcError::InvalidInput(format!(
            "quantity for {} must be positive",
            order.item
        )));
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, BonusSettings::default());
    }

    #[test]
    fn test_settings_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let settings = BonusSettings {
            final_amount: 1.5,
            intermediate_efficiency: false,
            ..Default::default()
        };

        save_settings(file.path(), &settings).unwrap();
        let reloaded = load_settings(file.path()).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_load_orders() {
        let json = r#"[{"item": "Copper Wire", "quantity": 3}, {"item": "Iron Bar", "quantity": 1}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let orders = load_orders(file.path()).unwrap();
        assert_eq!(orders, vec![Order::new("Copper Wire", 3), Order::new("Iron Bar", 1)]);
    }

    #[test]
    fn test_load_orders_rejects_zero_quantity() {
        let json = r#"[{"item": "Copper Wire", "quantity": 0}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_orders(file.path()), Err(CalcError::InvalidInput(_))));
    }
}
