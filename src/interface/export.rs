use std::path::Path;

use crate::error::Result;
use crate::models::AggregatedEntry;

/// Write the bill to a CSV file, one row per item.
pub fn write_bill_csv(bill: &[AggregatedEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "kind", "amount", "value"])?;
    for entry in bill {
        wtr.write_record([
            entry.name.clone(),
            entry.kind.to_string(),
            entry.total_amount.to_string(),
            entry.total_value.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
