use crate::catalog::Catalog;
use crate::models::{AggregatedEntry, OrderBreakdown};
use crate::planner::{summary_cost, summary_total};

/// Format an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display the aggregated bill as an Item / Amount / Value table.
pub fn display_bill(bill: &[AggregatedEntry]) {
    if bill.is_empty() {
        println!("Nothing to craft.");
        return;
    }

    let name_width = bill.iter().map(|e| e.name.len()).max().unwrap_or(4).max(4);

    println!();
    println!("=== Bill of Materials ===");
    println!();
    println!("{:<name_width$}  {:>14}  {:>18}", "Item", "Amount", "Value");

    for entry in bill {
        println!(
            "{:<name_width$}  {:>14}  {:>18}",
            entry.name,
            group_thousands(entry.total_amount),
            group_thousands(entry.total_value),
        );
    }
    println!();
}

/// Display each order with its full expansion, its cost and worth, and the totals.
pub fn display_summary(summary: &[OrderBreakdown]) {
    if summary.is_empty() {
        return;
    }

    println!("--- Orders ---");
    for (index, order) in summary.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!(
            "{} x {}  (cost ${}, worth ${})",
            order.quantity,
            order.item,
            group_thousands(order.cost),
            group_thousands(order.value)
        );
        for line in &order.ingredients {
            println!(
                "    {} x {:<5} {}  (${})",
                group_thousands(line.total_amount),
                line.kind,
                line.name,
                group_thousands(line.total_value)
            );
        }
    }
    println!();
    println!("Total cost: ${}", group_thousands(summary_cost(summary)));
    println!("Total worth: ${}", group_thousands(summary_total(summary)));
    println!();
}

/// List the items that can be ordered.
pub fn display_items(catalog: &Catalog) {
    let items = catalog.orderable_items();
    if items.is_empty() {
        println!("No craftable items in catalog.");
        return;
    }

    let name_width = items.iter().map(|i| i.name.len()).max().unwrap_or(4);
    println!();
    println!("=== Craftable Items ({}) ===", items.len());
    println!();
    for item in items {
        println!(
            "  {:<name_width$}  {:<5}  ${}",
            item.name,
            item.kind,
            group_thousands(item.base_value)
        );
    }
    println!();
}
