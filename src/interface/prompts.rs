use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::{CalcError, Result};
use crate::models::Item;
use crate::planner::constants::{DEFAULT_ORDER_QUANTITY, FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};
use crate::state::{BonusSettings, OrderBook, parse_multiplier};

/// Prompt for an item to order, with fuzzy matching.
///
/// Returns `None` when the user submits an empty line.
pub fn prompt_order_item(catalog: &Catalog) -> Result<Option<String>> {
    let orderable = catalog.orderable_items();

    loop {
        let input: String = Input::new()
            .with_prompt("Item to craft (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(item) = orderable.iter().find(|i| i.key() == input.to_lowercase()) {
            return Ok(Some(item.name.clone()));
        }

        let candidates = fuzzy_candidates(&orderable, input);

        if candidates.is_empty() {
            println!("No matching item found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = &candidates[0].name;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(name.clone()));
            }
            continue;
        }

        let mut options: Vec<String> = candidates.iter().map(|i| i.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len() {
            return Ok(Some(options[selection].clone()));
        }
    }
}

/// Orderable items resembling `input`, best match first.
pub fn fuzzy_candidates<'a>(items: &[&'a Item], input: &str) -> Vec<&'a Item> {
    let needle = input.to_lowercase();
    let mut scored: Vec<(&Item, f64)> = items
        .iter()
        .map(|item| (*item, jaro_winkler(&item.key(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(FUZZY_MAX_CANDIDATES)
        .map(|(item, _)| item)
        .collect()
}

/// Prompt for an order quantity. Anything but a positive integer becomes 1.
pub fn prompt_quantity(item: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many '{}'?", item))
        .default(DEFAULT_ORDER_QUANTITY.to_string())
        .interact_text()?;

    Ok(parse_quantity(&input))
}

pub fn parse_quantity(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => quantity,
        _ => {
            warn!("invalid quantity {:?}, using {}", text, DEFAULT_ORDER_QUANTITY);
            DEFAULT_ORDER_QUANTITY
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn pick_row(book: &OrderBook, prompt: &str) -> Result<usize> {
    let rows: Vec<String> = book
        .orders()
        .iter()
        .map(|o| format!("{} x {}", o.quantity, o.item))
        .collect();

    Ok(Select::new()
        .with_prompt(prompt)
        .items(&rows)
        .default(0)
        .interact()?)
}

/// Build up a set of orders interactively.
pub fn collect_orders(catalog: &Catalog) -> Result<OrderBook> {
    let mut book = OrderBook::new();

    while let Some(item) = prompt_order_item(catalog)? {
        let quantity = prompt_quantity(&item)?;
        book.add(&item, quantity)?;
        println!("Added: {} x {}", quantity, item);
    }

    let actions = [
        "Calculate",
        "Add order",
        "Remove order",
        "Change quantity",
        "Increase quantity",
        "Decrease quantity",
    ];
    loop {
        if book.is_empty() {
            return Err(CalcError::NoOrders);
        }

        println!();
        for order in book.orders() {
            println!("  {} x {}", order.quantity, order.item);
        }

        let action = Select::new()
            .with_prompt("Orders")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => return Ok(book),
            1 => {
                if let Some(item) = prompt_order_item(catalog)? {
                    let quantity = prompt_quantity(&item)?;
                    book.add(&item, quantity)?;
                }
            }
            2 => {
                let row = pick_row(&book, "Remove which order?")?;
                book.remove(row)?;
            }
            3 => {
                let row = pick_row(&book, "Change which order?")?;
                let item = book.orders()[row].item.clone();
                let quantity = prompt_quantity(&item)?;
                book.set_quantity(row, quantity)?;
            }
            4 => {
                let row = pick_row(&book, "Increase which order?")?;
                book.increment(row)?;
            }
            _ => {
                let row = pick_row(&book, "Decrease which order?")?;
                book.decrement(row)?;
            }
        }
    }
}

fn prompt_multiplier(prompt: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;

    Ok(parse_multiplier(&input))
}

/// Walk through every bonus setting, keeping the current value as default.
pub fn prompt_bonus_settings(current: &BonusSettings) -> Result<BonusSettings> {
    Ok(BonusSettings {
        final_amount: prompt_multiplier("Item amount bonus", current.final_amount)?,
        final_room: prompt_multiplier("Item room bonus", current.final_room)?,
        final_value: prompt_multiplier("Item value bonus", current.final_value)?,
        final_efficiency: prompt_yes_no("Item efficiency enabled?", current.final_efficiency)?,
        intermediate_amount: prompt_multiplier("Alloy amount bonus", current.intermediate_amount)?,
        intermediate_room: prompt_multiplier("Alloy room bonus", current.intermediate_room)?,
        intermediate_value: prompt_multiplier("Alloy value bonus", current.intermediate_value)?,
        intermediate_efficiency: prompt_yes_no(
            "Alloy efficiency enabled?",
            current.intermediate_efficiency,
        )?,
    })
}
